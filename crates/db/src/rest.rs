//! REST client for the hosted tables service.
//!
//! Speaks the PostgREST dialect under `/rest/v1/<table>`: filters and
//! ordering as query parameters, `Prefer: return=representation` on writes
//! so inserts and updates echo the stored row.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::backend::TableBackend;
use crate::error::RemoteError;
use crate::http::{ensure_success, parse_json};
use crate::query::Query;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.example.co` (no trailing slash).
    pub url: String,
    /// Public anonymous API key sent with every request.
    pub anon_key: String,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Build the shared `reqwest` client for this configuration.
    pub fn http_client(&self) -> Result<reqwest::Client, RemoteError> {
        Ok(reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()?)
    }
}

/// HTTP implementation of [`TableBackend`].
///
/// Requests are authorized with the signed-in user's access token when one
/// is set, falling back to the anonymous key.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
}

impl RestClient {
    /// Create a client with its own connection pool.
    pub fn new(config: &BackendConfig) -> Result<Self, RemoteError> {
        Ok(Self::with_client(config.http_client()?, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`] (shared with
    /// the [`AuthClient`](crate::AuthClient)).
    pub fn with_client(client: reqwest::Client, config: &BackendConfig) -> Self {
        Self {
            client,
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
            access_token: RwLock::new(None),
        }
    }

    /// Replace the bearer token used for subsequent requests. `None` reverts
    /// to anonymous access.
    pub async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }

    pub async fn has_access_token(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    // ---- private helpers ----

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn headers(&self) -> Result<HeaderMap, RemoteError> {
        let token = self.access_token.read().await;
        let bearer = token.as_deref().unwrap_or(&self.anon_key);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(&self.anon_key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {bearer}"))?);
        Ok(headers)
    }

    /// Take the single row a write returned.
    fn single_row(table: &str, filter: &str, rows: Vec<Value>) -> Result<Value, RemoteError> {
        rows.into_iter().next().ok_or_else(|| RemoteError::NotFound {
            table: table.to_string(),
            filter: filter.to_string(),
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, RemoteError> {
    HeaderValue::from_str(value).map_err(|e| RemoteError::Config(format!("header value: {e}")))
}

#[async_trait]
impl TableBackend for RestClient {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, RemoteError> {
        tracing::debug!(table, filter = %query.describe(), "select");
        let response = self
            .client
            .get(self.table_url(table))
            .headers(self.headers().await?)
            .query(&query.to_params(true))
            .send()
            .await?;

        parse_json(response).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError> {
        tracing::debug!(table, "insert");
        let response = self
            .client
            .post(self.table_url(table))
            .headers(self.headers().await?)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let rows: Vec<Value> = parse_json(response).await?;
        Self::single_row(table, "inserted row", rows)
    }

    async fn update(
        &self,
        table: &str,
        filter: &Query,
        patch: Value,
    ) -> Result<Value, RemoteError> {
        tracing::debug!(table, filter = %filter.describe(), "update");
        let response = self
            .client
            .patch(self.table_url(table))
            .headers(self.headers().await?)
            .header("Prefer", "return=representation")
            .query(&filter.to_params(false))
            .json(&patch)
            .send()
            .await?;

        let rows: Vec<Value> = parse_json(response).await?;
        Self::single_row(table, &filter.describe(), rows)
    }

    async fn delete(&self, table: &str, filter: &Query) -> Result<(), RemoteError> {
        tracing::debug!(table, filter = %filter.describe(), "delete");
        let response = self
            .client
            .delete(self.table_url(table))
            .headers(self.headers().await?)
            .query(&filter.to_params(false))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_strips_trailing_slash() {
        let config = BackendConfig::new("https://demo.example.co/", "anon");
        assert_eq!(config.url, "https://demo.example.co");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn table_url_uses_rest_prefix() {
        let client = RestClient::new(&BackendConfig::new("http://localhost:54321", "anon")).unwrap();
        assert_eq!(
            client.table_url("ip_assets"),
            "http://localhost:54321/rest/v1/ip_assets"
        );
    }
}

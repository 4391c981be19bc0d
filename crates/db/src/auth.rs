//! Client for the hosted auth service (`/auth/v1`).
//!
//! Sessions are opaque bearer tokens issued by the service. This client
//! only exchanges credentials for a session, looks up the current user and
//! revokes the session; refresh is left to the caller re-signing in.

use serde::Deserialize;

use crate::error::RemoteError;
use crate::http::{ensure_success, parse_json};
use crate::models::session::{AuthUser, PasswordCredentials, Session, SignUp};
use crate::rest::BackendConfig;

/// HTTP client for the auth endpoints.
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// The sign-up endpoint answers with a session when the account is
/// confirmed immediately, and with the bare user otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(AuthUser),
}

impl AuthClient {
    pub fn new(config: &BackendConfig) -> Result<Self, RemoteError> {
        Ok(Self::with_client(config.http_client()?, config))
    }

    pub fn with_client(client: reqwest::Client, config: &BackendConfig) -> Self {
        Self {
            client,
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Exchange an email and password for a session.
    ///
    /// Sends `POST /auth/v1/token?grant_type=password`.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, RemoteError> {
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&PasswordCredentials { email, password })
            .send()
            .await?;

        let session: Session = parse_json(response).await?;
        tracing::info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    /// Register a new account.
    ///
    /// Sends `POST /auth/v1/signup`.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, RemoteError> {
        let response = self
            .client
            .post(self.auth_url("signup"))
            .header("apikey", &self.anon_key)
            .json(&PasswordCredentials { email, password })
            .send()
            .await?;

        Ok(match parse_json::<SignUpResponse>(response).await? {
            SignUpResponse::Session(session) => SignUp {
                user: session.user.clone(),
                session: Some(session),
            },
            SignUpResponse::User(user) => SignUp {
                user,
                session: None,
            },
        })
    }

    /// Look up the user an access token belongs to.
    ///
    /// Sends `GET /auth/v1/user`.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, RemoteError> {
        let response = self
            .client
            .get(self.auth_url("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        parse_json(response).await
    }

    /// Revoke the session behind `access_token`.
    ///
    /// Sends `POST /auth/v1/logout`.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        ensure_success(response).await?;
        tracing::info!("Signed out");
        Ok(())
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }
}

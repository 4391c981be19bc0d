//! In-process [`TableBackend`].
//!
//! Holds every table as a vector of JSON rows and applies the same
//! server-side behavior the hosted backend does on insert: a fresh UUID
//! `id`, `created_at` / `updated_at` stamps and per-table column defaults.
//! Timestamps are strictly increasing so newest-first ordering is
//! deterministic even for rows created in the same microsecond.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use innovalex_core::types::Timestamp;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::backend::TableBackend;
use crate::error::RemoteError;
use crate::query::Query;
use crate::repositories::{
    ip_asset_repo, legal_case_repo, legal_document_repo, misinformation_alert_repo,
};

/// Value a column takes when an insert omits it.
#[derive(Debug, Clone)]
pub enum ColumnDefault {
    Value(Value),
    /// The insert time.
    Now,
}

#[derive(Debug, Default)]
struct MemoryState {
    tables: HashMap<String, Vec<Value>>,
    defaults: HashMap<String, Vec<(String, ColumnDefault)>>,
    last_stamp: Option<Timestamp>,
}

impl MemoryState {
    fn next_stamp(&mut self) -> String {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

/// Tables held in memory behind a single async mutex.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
}

impl MemoryBackend {
    /// An empty backend with no column defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty backend with the dashboard tables' server defaults:
    /// asset `status = "active"`, case `case_status = "open"` and
    /// `filing_date = now()`, document `lawyer_approved = false`, alert
    /// `status = "pending"`.
    pub fn with_default_schema() -> Self {
        Self::new()
            .with_column_default(
                ip_asset_repo::TABLE,
                "status",
                ColumnDefault::Value("active".into()),
            )
            .with_column_default(
                legal_case_repo::TABLE,
                "case_status",
                ColumnDefault::Value("open".into()),
            )
            .with_column_default(legal_case_repo::TABLE, "filing_date", ColumnDefault::Now)
            .with_column_default(
                legal_document_repo::TABLE,
                "lawyer_approved",
                ColumnDefault::Value(false.into()),
            )
            .with_column_default(
                misinformation_alert_repo::TABLE,
                "status",
                ColumnDefault::Value("pending".into()),
            )
    }

    /// Register a default for `column` of `table`.
    pub fn with_column_default(
        mut self,
        table: &str,
        column: &str,
        default: ColumnDefault,
    ) -> Self {
        self.state
            .get_mut()
            .defaults
            .entry(table.to_string())
            .or_default()
            .push((column.to_string(), default));
        self
    }

    /// Snapshot of every row currently stored in `table`, in insertion order.
    pub async fn rows(&self, table: &str) -> Vec<Value> {
        self.state
            .lock()
            .await
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of rows in `table`.
    pub async fn count(&self, table: &str) -> usize {
        self.state
            .lock()
            .await
            .tables
            .get(table)
            .map_or(0, Vec::len)
    }
}

fn bad_request(message: impl Into<String>) -> RemoteError {
    RemoteError::Api {
        status: 400,
        code: None,
        message: message.into(),
    }
}

fn into_object(row: Value) -> Result<Map<String, Value>, RemoteError> {
    match row {
        Value::Object(map) => Ok(map),
        other => Err(bad_request(format!("row must be a JSON object, got {other}"))),
    }
}

#[async_trait]
impl TableBackend for MemoryBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, RemoteError> {
        let state = self.state.lock().await;
        let mut rows: Vec<Value> = state
            .tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();
        query.sort_rows(&mut rows);
        Ok(rows.iter().map(|r| query.project(r)).collect())
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError> {
        let mut object = into_object(row)?;
        let mut state = self.state.lock().await;
        let stamp = state.next_stamp();

        if let Some(defaults) = state.defaults.get(table) {
            for (column, default) in defaults {
                if matches!(object.get(column), None | Some(Value::Null)) {
                    let value = match default {
                        ColumnDefault::Value(v) => v.clone(),
                        ColumnDefault::Now => Value::String(stamp.clone()),
                    };
                    object.insert(column.clone(), value);
                }
            }
        }
        object
            .entry("id")
            .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
        object.insert("created_at".into(), Value::String(stamp.clone()));
        object.insert("updated_at".into(), Value::String(stamp));

        let row = Value::Object(object);
        state
            .tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        table: &str,
        filter: &Query,
        patch: Value,
    ) -> Result<Value, RemoteError> {
        let patch = into_object(patch)?;
        let mut state = self.state.lock().await;
        let stamp = state.next_stamp();

        let rows = state.tables.entry(table.to_string()).or_default();
        let mut updated: Option<Value> = None;
        for row in rows.iter_mut().filter(|r| filter.matches(r)) {
            if let Value::Object(object) = row {
                for (column, value) in &patch {
                    object.insert(column.clone(), value.clone());
                }
                object.insert("updated_at".into(), Value::String(stamp.clone()));
            }
            if updated.is_none() {
                updated = Some(row.clone());
            }
        }

        updated.ok_or_else(|| RemoteError::NotFound {
            table: table.to_string(),
            filter: filter.describe(),
        })
    }

    async fn delete(&self, table: &str, filter: &Query) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        if let Some(rows) = state.tables.get_mut(table) {
            rows.retain(|r| !filter.matches(r));
        }
        Ok(())
    }
}

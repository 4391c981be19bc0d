//! The table access seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RemoteError;
use crate::query::Query;

/// Generic row operations against the hosted tables service.
///
/// Rows travel as JSON objects; typed decoding happens in the
/// repositories. Implementations must return list reads in the order the
/// query asks for, and single-row writes must return the row as stored
/// (including server-assigned columns).
#[async_trait]
pub trait TableBackend: Send + Sync {
    /// Read every row of `table` matching `query`. No pagination.
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, RemoteError>;

    /// Insert one row and return it with generated id and timestamps.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError>;

    /// Apply a partial patch to the single row matching `filter` and return
    /// the updated row.
    async fn update(&self, table: &str, filter: &Query, patch: Value)
        -> Result<Value, RemoteError>;

    /// Delete every row matching `filter`.
    async fn delete(&self, table: &str, filter: &Query) -> Result<(), RemoteError>;
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&dyn TableBackend` as the first argument. List reads are
//! owner-scoped and newest first.

pub mod ip_asset_repo;
pub mod legal_case_repo;
pub mod legal_document_repo;
pub mod misinformation_alert_repo;

pub use ip_asset_repo::IpAssetRepo;
pub use legal_case_repo::LegalCaseRepo;
pub use legal_document_repo::LegalDocumentRepo;
pub use misinformation_alert_repo::MisinformationAlertRepo;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::RemoteError;

/// Column every list is ordered by (descending).
pub(crate) const CREATED_AT: &str = "created_at";

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Value, RemoteError> {
    serde_json::to_value(value).map_err(RemoteError::Encode)
}

pub(crate) fn decode_row<T: DeserializeOwned>(table: &str, row: Value) -> Result<T, RemoteError> {
    serde_json::from_value(row).map_err(|source| RemoteError::Decode {
        table: table.to_string(),
        source,
    })
}

pub(crate) fn decode_rows<T: DeserializeOwned>(
    table: &str,
    rows: Vec<Value>,
) -> Result<Vec<T>, RemoteError> {
    rows.into_iter().map(|row| decode_row(table, row)).collect()
}

//! Repository for the `legal_cases` table.

use innovalex_core::types::RecordId;

use super::{decode_row, decode_rows, encode, CREATED_AT};
use crate::backend::TableBackend;
use crate::error::RemoteError;
use crate::models::legal_case::{CreateLegalCase, LegalCase, NewLegalCase, UpdateLegalCase};
use crate::query::Query;

pub const TABLE: &str = "legal_cases";

/// Provides create, list and update operations for legal cases.
pub struct LegalCaseRepo;

impl LegalCaseRepo {
    /// List every case whose client is `client_id`, newest first.
    pub async fn list_for_client(
        db: &dyn TableBackend,
        client_id: RecordId,
    ) -> Result<Vec<LegalCase>, RemoteError> {
        let query = Query::new()
            .eq("client_id", client_id)
            .order(CREATED_AT, false);
        decode_rows(TABLE, db.select(TABLE, &query).await?)
    }

    /// Insert a new case. `case_number` is stored as given; the backend
    /// does not enforce uniqueness.
    pub async fn create(
        db: &dyn TableBackend,
        client_id: RecordId,
        case_number: &str,
        input: &CreateLegalCase,
    ) -> Result<LegalCase, RemoteError> {
        let row = encode(&NewLegalCase {
            client_id,
            case_number,
            data: input,
        })?;
        decode_row(TABLE, db.insert(TABLE, row).await?)
    }

    /// Patch a case by id, returning the stored row.
    pub async fn update(
        db: &dyn TableBackend,
        id: RecordId,
        input: &UpdateLegalCase,
    ) -> Result<LegalCase, RemoteError> {
        let patch = encode(input)?;
        decode_row(TABLE, db.update(TABLE, &Query::by_id(id), patch).await?)
    }
}

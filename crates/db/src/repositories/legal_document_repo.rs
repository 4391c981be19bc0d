//! Repository for the `legal_documents` table.

use innovalex_core::types::RecordId;

use super::{decode_row, decode_rows, encode, CREATED_AT};
use crate::backend::TableBackend;
use crate::error::RemoteError;
use crate::models::legal_document::{
    CreateLegalDocument, LegalDocument, NewLegalDocument, UpdateLegalDocument,
};
use crate::query::Query;

pub const TABLE: &str = "legal_documents";

/// Provides create, list and update operations for legal documents.
pub struct LegalDocumentRepo;

impl LegalDocumentRepo {
    /// List every document created by `creator_id`, newest first.
    pub async fn list_for_creator(
        db: &dyn TableBackend,
        creator_id: RecordId,
    ) -> Result<Vec<LegalDocument>, RemoteError> {
        let query = Query::new()
            .eq("creator_id", creator_id)
            .order(CREATED_AT, false);
        decode_rows(TABLE, db.select(TABLE, &query).await?)
    }

    /// Insert a new document. Omitted `ai_generated` / `signature_required`
    /// flags are stored as `false`.
    pub async fn create(
        db: &dyn TableBackend,
        creator_id: RecordId,
        input: &CreateLegalDocument,
    ) -> Result<LegalDocument, RemoteError> {
        let row = encode(&NewLegalDocument::from_create(creator_id, input))?;
        decode_row(TABLE, db.insert(TABLE, row).await?)
    }

    /// Patch a document by id, returning the stored row.
    pub async fn update(
        db: &dyn TableBackend,
        id: RecordId,
        input: &UpdateLegalDocument,
    ) -> Result<LegalDocument, RemoteError> {
        let patch = encode(input)?;
        decode_row(TABLE, db.update(TABLE, &Query::by_id(id), patch).await?)
    }
}

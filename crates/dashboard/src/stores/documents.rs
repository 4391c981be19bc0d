use std::sync::Arc;

use innovalex_core::types::RecordId;
use innovalex_db::models::legal_document::{
    CreateLegalDocument, LegalDocument, UpdateLegalDocument,
};
use innovalex_db::repositories::LegalDocumentRepo;
use innovalex_db::{RemoteError, TableBackend};
use innovalex_events::EventBus;

use super::{EntityList, FetchOutcome, Messages, StoreCore, ToastCopy};
use crate::error::StoreError;
use crate::session::SessionContext;

const MESSAGES: Messages = Messages {
    fetch_failed: "Failed to fetch documents",
    create: Some(ToastCopy {
        success: "Document created successfully",
        failure: "Failed to create document",
    }),
    update: ToastCopy {
        success: "Document updated successfully",
        failure: "Failed to update document",
    },
    delete: None,
};

/// Legal documents created by the signed-in user.
pub struct DocumentStore {
    core: StoreCore<LegalDocument>,
}

impl DocumentStore {
    pub fn new(db: Arc<dyn TableBackend>, session: SessionContext, bus: Arc<EventBus>) -> Self {
        Self {
            core: StoreCore::new("legal_document", MESSAGES, db, session, bus),
        }
    }

    pub fn snapshot(&self) -> EntityList<LegalDocument> {
        self.core.snapshot()
    }

    pub fn documents(&self) -> Vec<LegalDocument> {
        self.core.items()
    }

    pub fn is_loading(&self) -> bool {
        self.core.is_loading()
    }

    pub async fn sync_identity(&self) -> FetchOutcome {
        self.core.sync_identity(load).await
    }

    pub async fn refetch(&self) -> FetchOutcome {
        self.core.refetch(load).await
    }

    pub async fn create(&self, input: CreateLegalDocument) -> Result<LegalDocument, StoreError> {
        self.core
            .create(|db, creator_id| async move {
                LegalDocumentRepo::create(db.as_ref(), creator_id, &input).await
            })
            .await
    }

    pub async fn update(
        &self,
        id: RecordId,
        patch: UpdateLegalDocument,
    ) -> Result<LegalDocument, StoreError> {
        self.core
            .update(id, |db| async move {
                LegalDocumentRepo::update(db.as_ref(), id, &patch).await
            })
            .await
    }
}

async fn load(
    db: Arc<dyn TableBackend>,
    creator_id: RecordId,
) -> Result<Vec<LegalDocument>, RemoteError> {
    LegalDocumentRepo::list_for_creator(db.as_ref(), creator_id).await
}

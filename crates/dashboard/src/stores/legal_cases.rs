use std::sync::Arc;

use innovalex_core::legal_case::generate_case_number;
use innovalex_core::types::RecordId;
use innovalex_db::models::legal_case::{CreateLegalCase, LegalCase, UpdateLegalCase};
use innovalex_db::repositories::LegalCaseRepo;
use innovalex_db::{RemoteError, TableBackend};
use innovalex_events::EventBus;

use super::{EntityList, FetchOutcome, Messages, StoreCore, ToastCopy};
use crate::error::StoreError;
use crate::session::SessionContext;

const MESSAGES: Messages = Messages {
    fetch_failed: "Failed to fetch legal cases",
    create: Some(ToastCopy {
        success: "Legal case created successfully",
        failure: "Failed to create legal case",
    }),
    update: ToastCopy {
        success: "Legal case updated successfully",
        failure: "Failed to update legal case",
    },
    delete: None,
};

/// Legal cases where the signed-in user is the client.
pub struct LegalCaseStore {
    core: StoreCore<LegalCase>,
}

impl LegalCaseStore {
    pub fn new(db: Arc<dyn TableBackend>, session: SessionContext, bus: Arc<EventBus>) -> Self {
        Self {
            core: StoreCore::new("legal_case", MESSAGES, db, session, bus),
        }
    }

    pub fn snapshot(&self) -> EntityList<LegalCase> {
        self.core.snapshot()
    }

    pub fn cases(&self) -> Vec<LegalCase> {
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

    /// Open a case with a freshly generated `LC-<year>-<nnnn>` number.
    /// The number is not checked against existing cases.
    pub async fn create(&self, input: CreateLegalCase) -> Result<LegalCase, StoreError> {
        self.core
            .create(|db, client_id| async move {
                let case_number = generate_case_number();
                LegalCaseRepo::create(db.as_ref(), client_id, &case_number, &input).await
            })
            .await
    }

    pub async fn update(
        &self,
        id: RecordId,
        patch: UpdateLegalCase,
    ) -> Result<LegalCase, StoreError> {
        self.core
            .update(id, |db| async move {
                LegalCaseRepo::update(db.as_ref(), id, &patch).await
            })
            .await
    }
}

async fn load(db: Arc<dyn TableBackend>, client_id: RecordId) -> Result<Vec<LegalCase>, RemoteError> {
    LegalCaseRepo::list_for_client(db.as_ref(), client_id).await
}

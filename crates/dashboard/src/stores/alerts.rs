use std::sync::Arc;

use chrono::Utc;
use innovalex_core::types::RecordId;
use innovalex_db::models::misinformation_alert::{
    MisinformationAlert, UpdateMisinformationAlert,
};
use innovalex_db::repositories::MisinformationAlertRepo;
use innovalex_db::{RemoteError, TableBackend};
use innovalex_events::EventBus;

use super::{EntityList, FetchOutcome, Messages, StoreCore, ToastCopy};
use crate::error::StoreError;
use crate::session::SessionContext;

// Alerts are raised by the monitoring side, never created or deleted here.
const MESSAGES: Messages = Messages {
    fetch_failed: "Failed to fetch misinformation alerts",
    create: None,
    update: ToastCopy {
        success: "Alert updated successfully",
        failure: "Failed to update alert",
    },
    delete: None,
};

/// Misinformation alerts on the signed-in user's assets, each carrying the
/// title of its asset.
pub struct AlertStore {
    core: StoreCore<MisinformationAlert>,
}

impl AlertStore {
    pub fn new(db: Arc<dyn TableBackend>, session: SessionContext, bus: Arc<EventBus>) -> Self {
        Self {
            core: StoreCore::new("misinformation_alert", MESSAGES, db, session, bus),
        }
    }

    pub fn snapshot(&self) -> EntityList<MisinformationAlert> {
        self.core.snapshot()
    }

    pub fn alerts(&self) -> Vec<MisinformationAlert> {
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

    /// Patch an alert. The cached entry keeps its asset title.
    pub async fn update(
        &self,
        id: RecordId,
        patch: UpdateMisinformationAlert,
    ) -> Result<MisinformationAlert, StoreError> {
        self.core
            .update(id, |db| async move {
                MisinformationAlertRepo::update(db.as_ref(), id, &patch).await
            })
            .await
    }

    /// Mark an alert resolved with `response_action`, stamped now.
    pub async fn resolve_alert(
        &self,
        id: RecordId,
        response_action: &str,
    ) -> Result<MisinformationAlert, StoreError> {
        self.update(id, UpdateMisinformationAlert::resolve(response_action, Utc::now()))
            .await
    }
}

async fn load(
    db: Arc<dyn TableBackend>,
    owner_id: RecordId,
) -> Result<Vec<MisinformationAlert>, RemoteError> {
    MisinformationAlertRepo::list_for_owner(db.as_ref(), owner_id).await
}

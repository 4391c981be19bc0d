use std::sync::Arc;

use innovalex_core::types::RecordId;
use innovalex_db::models::ip_asset::{CreateIpAsset, IpAsset, UpdateIpAsset};
use innovalex_db::repositories::IpAssetRepo;
use innovalex_db::TableBackend;
use innovalex_events::EventBus;

use super::{EntityList, FetchOutcome, Messages, StoreCore, ToastCopy};
use crate::error::StoreError;
use crate::session::SessionContext;

const MESSAGES: Messages = Messages {
    fetch_failed: "Failed to fetch IP assets",
    create: Some(ToastCopy {
        success: "IP asset created successfully",
        failure: "Failed to create IP asset",
    }),
    update: ToastCopy {
        success: "IP asset updated successfully",
        failure: "Failed to update IP asset",
    },
    delete: Some(ToastCopy {
        success: "IP asset deleted successfully",
        failure: "Failed to delete IP asset",
    }),
};

/// The signed-in user's IP assets. The only entity that can be deleted.
pub struct IpAssetStore {
    core: StoreCore<IpAsset>,
}

impl IpAssetStore {
    pub fn new(db: Arc<dyn TableBackend>, session: SessionContext, bus: Arc<EventBus>) -> Self {
        Self {
            core: StoreCore::new("ip_asset", MESSAGES, db, session, bus),
        }
    }

    pub fn snapshot(&self) -> EntityList<IpAsset> {
        self.core.snapshot()
    }

    pub fn assets(&self) -> Vec<IpAsset> {
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

    pub async fn create(&self, input: CreateIpAsset) -> Result<IpAsset, StoreError> {
        self.core
            .create(|db, owner_id| async move {
                IpAssetRepo::create(db.as_ref(), owner_id, &input).await
            })
            .await
    }

    pub async fn update(&self, id: RecordId, patch: UpdateIpAsset) -> Result<IpAsset, StoreError> {
        self.core
            .update(id, |db| async move {
                IpAssetRepo::update(db.as_ref(), id, &patch).await
            })
            .await
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), StoreError> {
        self.core
            .delete(id, |db| async move { IpAssetRepo::delete(db.as_ref(), id).await })
            .await
    }
}

async fn load(
    db: Arc<dyn TableBackend>,
    owner_id: RecordId,
) -> Result<Vec<IpAsset>, innovalex_db::RemoteError> {
    IpAssetRepo::list_for_owner(db.as_ref(), owner_id).await
}

//! Per-entity stores.
//!
//! Each store owns the signed-in user's list of one entity type and
//! exposes the remote operations on it. Lists are caches: they are loaded
//! by [`refetch`](StoreCore::refetch) or [`sync_identity`](StoreCore::sync_identity)
//! and patched in place after every successful mutation. Every outcome is
//! reported on the [`EventBus`] as a toast; failures are also returned to
//! the caller.
//!
//! Fetches are guarded by a per-store sequence token. A result is applied
//! only while its token is still the newest, so a slow fetch for a
//! previous identity never overwrites a later one.

pub mod alerts;
pub mod documents;
pub mod ip_assets;
pub mod legal_cases;

pub use alerts::AlertStore;
pub use documents::DocumentStore;
pub use ip_assets::IpAssetStore;
pub use legal_cases::LegalCaseStore;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use innovalex_core::types::RecordId;
use innovalex_db::models::Record;
use innovalex_db::{RemoteError, TableBackend};
use innovalex_events::{EventBus, Toast};

use crate::error::StoreError;
use crate::session::SessionContext;

// ---------------------------------------------------------------------------
// EntityList
// ---------------------------------------------------------------------------

/// Snapshot of a store's list.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityList<T> {
    /// Newest first.
    pub items: Vec<T>,
    /// `true` until the first fetch for the current identity settles.
    pub loading: bool,
}

impl<T> EntityList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

/// How a fetch ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The list was replaced with this many rows.
    Loaded(usize),
    /// Nobody is signed in; the list was cleared without a remote call.
    Skipped,
    /// A newer fetch started, or the signed-in user changed, before this
    /// one finished; its result was discarded.
    Superseded,
    /// The identity has not changed since the last fetch.
    Unchanged,
    /// The remote call failed; the list was left as it was.
    Failed(StoreError),
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Success and failure descriptions for one mutation.
#[derive(Debug, Clone, Copy)]
pub struct ToastCopy {
    pub success: &'static str,
    pub failure: &'static str,
}

/// Toast descriptions for one entity type. Operations a store does not
/// expose carry no copy.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub fetch_failed: &'static str,
    pub create: Option<ToastCopy>,
    pub update: ToastCopy,
    pub delete: Option<ToastCopy>,
}

// ---------------------------------------------------------------------------
// StoreCore
// ---------------------------------------------------------------------------

/// State and operations shared by every entity store.
pub struct StoreCore<T: Record> {
    entity: &'static str,
    messages: Messages,
    db: Arc<dyn TableBackend>,
    session: SessionContext,
    bus: Arc<EventBus>,
    list: Mutex<EntityList<T>>,
    sequence: AtomicU64,
    /// Identity of the last fetch; `None` before the first sync.
    synced_user: Mutex<Option<Option<RecordId>>>,
}

impl<T: Record> StoreCore<T> {
    pub fn new(
        entity: &'static str,
        messages: Messages,
        db: Arc<dyn TableBackend>,
        session: SessionContext,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            entity,
            messages,
            db,
            session,
            bus,
            list: Mutex::new(EntityList::default()),
            sequence: AtomicU64::new(0),
            synced_user: Mutex::new(None),
        }
    }

    pub fn snapshot(&self) -> EntityList<T> {
        self.lock_list().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.lock_list().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_list().loading
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Fetch again if the signed-in user differs from the one the list
    /// was last loaded for (or if it was never loaded).
    pub async fn sync_identity<F, Fut>(&self, load: F) -> FetchOutcome
    where
        F: FnOnce(Arc<dyn TableBackend>, RecordId) -> Fut,
        Fut: Future<Output = Result<Vec<T>, RemoteError>>,
    {
        let current = self.session.user_id();
        if *lock(&self.synced_user) == Some(current) {
            return FetchOutcome::Unchanged;
        }
        self.refetch(load).await
    }

    /// Load the list for the current user, replacing the cached one.
    pub async fn refetch<F, Fut>(&self, load: F) -> FetchOutcome
    where
        F: FnOnce(Arc<dyn TableBackend>, RecordId) -> Fut,
        Fut: Future<Output = Result<Vec<T>, RemoteError>>,
    {
        let token = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let user = self.session.user_id();
        *lock(&self.synced_user) = Some(user);

        let Some(user_id) = user else {
            let mut list = self.lock_list();
            list.items.clear();
            list.loading = false;
            return FetchOutcome::Skipped;
        };

        self.lock_list().loading = true;
        tracing::debug!(entity = self.entity, %user_id, token, "Fetching");
        let result = load(Arc::clone(&self.db), user_id).await;

        if self.sequence.load(Ordering::SeqCst) != token {
            tracing::debug!(entity = self.entity, token, "Discarding superseded fetch");
            return FetchOutcome::Superseded;
        }
        if self.session.user_id() != Some(user_id) {
            // The rows belong to a user who is no longer signed in.
            tracing::debug!(
                entity = self.entity,
                token,
                "Discarding fetch for previous identity"
            );
            *lock(&self.synced_user) = None;
            let mut list = self.lock_list();
            list.items.clear();
            list.loading = self.session.is_signed_in();
            return FetchOutcome::Superseded;
        }

        let mut list = self.lock_list();
        list.loading = false;
        match result {
            Ok(items) => {
                let count = items.len();
                list.items = items;
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                drop(list);
                tracing::error!(error = %e, entity = self.entity, "Failed to fetch");
                self.bus.publish(Toast::error(self.messages.fetch_failed));
                FetchOutcome::Failed(e.into())
            }
        }
    }

    /// Insert a row owned by the signed-in user and prepend it.
    pub async fn create<F, Fut>(&self, insert: F) -> Result<T, StoreError>
    where
        F: FnOnce(Arc<dyn TableBackend>, RecordId) -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        let user_id = self.session.user_id().ok_or(StoreError::NotSignedIn)?;

        match insert(Arc::clone(&self.db), user_id).await {
            Ok(row) => {
                // The list now belongs to someone else; their fetch owns it.
                if self.session.user_id() == Some(user_id) {
                    self.lock_list().items.insert(0, row.clone());
                }
                tracing::info!(entity = self.entity, id = %row.id(), "Created");
                self.notify_success(self.messages.create);
                Ok(row)
            }
            Err(e) => Err(self.fail(e, "Failed to create", self.messages.create)),
        }
    }

    /// Patch a row by id and merge the stored row into the list in place.
    pub async fn update<F, Fut>(&self, id: RecordId, patch: F) -> Result<T, StoreError>
    where
        F: FnOnce(Arc<dyn TableBackend>) -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        match patch(Arc::clone(&self.db)).await {
            Ok(row) => {
                let merged = {
                    let mut list = self.lock_list();
                    match list.items.iter_mut().find(|item| item.id() == id) {
                        Some(item) => {
                            item.merge_from(row.clone());
                            item.clone()
                        }
                        None => row,
                    }
                };
                tracing::info!(entity = self.entity, %id, "Updated");
                self.notify_success(Some(self.messages.update));
                Ok(merged)
            }
            Err(e) => Err(self.fail(e, "Failed to update", Some(self.messages.update))),
        }
    }

    /// Delete a row by id and drop it from the list.
    pub async fn delete<F, Fut>(&self, id: RecordId, remove: F) -> Result<(), StoreError>
    where
        F: FnOnce(Arc<dyn TableBackend>) -> Fut,
        Fut: Future<Output = Result<(), RemoteError>>,
    {
        match remove(Arc::clone(&self.db)).await {
            Ok(()) => {
                self.lock_list().items.retain(|item| item.id() != id);
                tracing::info!(entity = self.entity, %id, "Deleted");
                self.notify_success(self.messages.delete);
                Ok(())
            }
            Err(e) => Err(self.fail(e, "Failed to delete", self.messages.delete)),
        }
    }

    fn notify_success(&self, copy: Option<ToastCopy>) {
        if let Some(copy) = copy {
            self.bus.publish(Toast::success(copy.success));
        }
    }

    fn fail(&self, err: RemoteError, log: &'static str, copy: Option<ToastCopy>) -> StoreError {
        tracing::error!(error = %err, entity = self.entity, "{log}");
        if let Some(copy) = copy {
            self.bus.publish(Toast::error(copy.failure));
        }
        err.into()
    }

    fn lock_list(&self) -> MutexGuard<'_, EntityList<T>> {
        lock(&self.list)
    }
}

/// Lock a store mutex, recovering the data if a holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

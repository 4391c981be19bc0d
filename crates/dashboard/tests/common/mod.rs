//! Shared fixtures for the dashboard integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use innovalex_core::types::RecordId;
use innovalex_dashboard::app::Dashboard;
use innovalex_dashboard::session::SessionContext;
use innovalex_db::models::session::AuthUser;
use innovalex_db::{MemoryBackend, Query, RemoteError, TableBackend};
use innovalex_events::{EventBus, Toast};
use serde_json::Value;
use tokio::sync::{broadcast, oneshot};

pub fn user(email: &str) -> AuthUser {
    AuthUser {
        id: RecordId::new_v4(),
        email: Some(email.to_string()),
    }
}

/// Wraps the in-memory backend so tests can count calls, force failures
/// and hold the next read until released.
pub struct ScriptedBackend {
    pub inner: MemoryBackend,
    fail: AtomicBool,
    calls: AtomicUsize,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            inner: MemoryBackend::with_default_schema(),
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
            gate: Mutex::new(None),
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make the next `select` wait until the returned sender fires.
    pub fn hold_next_select(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    fn enter(&self) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Api {
                status: 503,
                code: None,
                message: "service unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TableBackend for ScriptedBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, RemoteError> {
        self.enter()?;
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.select(table, query).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError> {
        self.enter()?;
        self.inner.insert(table, row).await
    }

    async fn update(&self, table: &str, filter: &Query, patch: Value) -> Result<Value, RemoteError> {
        self.enter()?;
        self.inner.update(table, filter, patch).await
    }

    async fn delete(&self, table: &str, filter: &Query) -> Result<(), RemoteError> {
        self.enter()?;
        self.inner.delete(table, filter).await
    }
}

pub struct Harness {
    pub db: Arc<ScriptedBackend>,
    pub session: SessionContext,
    pub bus: Arc<EventBus>,
    pub dashboard: Dashboard,
    pub toasts: broadcast::Receiver<Toast>,
}

impl Harness {
    pub fn new() -> Self {
        let db = Arc::new(ScriptedBackend::new());
        let session = SessionContext::new();
        let bus = Arc::new(EventBus::default());
        let toasts = bus.subscribe();
        let dashboard = Dashboard::new(db.clone(), session.clone(), Arc::clone(&bus));
        Self {
            db,
            session,
            bus,
            dashboard,
            toasts,
        }
    }

    /// A harness with `email` signed in and every store loaded.
    pub async fn signed_in(email: &str) -> (Self, AuthUser) {
        let harness = Self::new();
        let user = user(email);
        harness.session.set_user(Some(user.clone()));
        harness.dashboard.sync_identity().await;
        (harness, user)
    }

    /// Every toast published since the last call.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        let mut out = Vec::new();
        while let Ok(toast) = self.toasts.try_recv() {
            out.push(toast);
        }
        out
    }
}

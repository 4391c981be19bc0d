//! In-memory toast capture.
//!
//! [`ToastHistory`] collects every toast published on a bus. The console
//! host prints it after each command; tests assert on it.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::bus::{EventBus, Toast};

/// Shared, append-only list of received toasts.
#[derive(Debug, Clone, Default)]
pub struct ToastHistory {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `bus` and spawn the collecting loop.
    ///
    /// Subscription happens before this returns, so every toast published
    /// afterwards is captured.
    pub fn attach(&self, bus: &EventBus) -> JoinHandle<()> {
        tokio::spawn(self.clone().run(bus.subscribe()))
    }

    /// Collect toasts until the channel closes.
    pub async fn run(self, mut receiver: broadcast::Receiver<Toast>) {
        loop {
            match receiver.recv().await {
                Ok(toast) => self.push(toast),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Toast history lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    pub fn push(&self, toast: Toast) {
        self.lock().push(toast);
    }

    /// Snapshot of every toast received so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn last(&self) -> Option<Toast> {
        self.lock().last().cloned()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        // A poisoned history still holds valid toasts.
        self.toasts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

//! In-process toast bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` between every store of a
//! dashboard session and the host's consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Toast
// ---------------------------------------------------------------------------

/// Title used for every success toast.
pub const SUCCESS_TITLE: &str = "Success";

/// Title used for every failure toast.
pub const ERROR_TITLE: &str = "Error";

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A fire-and-forget user notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    /// When the toast was raised (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
            timestamp: Utc::now(),
        }
    }

    /// A `"Success"` toast with the default variant.
    pub fn success(description: impl Into<String>) -> Self {
        Self::new(SUCCESS_TITLE, description, ToastVariant::Default)
    }

    /// An `"Error"` toast with the destructive variant.
    pub fn error(description: impl Into<String>) -> Self {
        Self::new(ERROR_TITLE, description, ToastVariant::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out toast bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`Toast`].
///
/// # Usage
///
/// ```rust
/// use innovalex_events::bus::{EventBus, Toast};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(Toast::success("IP asset created successfully"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<Toast>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed toasts are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a toast to all current subscribers.
    ///
    /// With no subscribers the toast is silently dropped.
    pub fn publish(&self, toast: Toast) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(toast);
    }

    /// Subscribe to every toast published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! InnovaLex notification surface.
//!
//! Stores report the outcome of every remote operation as a [`Toast`]
//! published on an [`EventBus`]. Hosts decide what to do with them:
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`Toast`]: a transient title/description message with a variant.
//! - [`ToastLogger`]: background consumer writing every toast to `tracing`.
//! - [`ToastHistory`]: background consumer keeping toasts in memory.

pub mod bus;
pub mod history;
pub mod logger;

pub use bus::{EventBus, Toast, ToastVariant};
pub use history::ToastHistory;
pub use logger::ToastLogger;

//! Toast logging service.
//!
//! [`ToastLogger`] subscribes to the [`EventBus`](crate::bus::EventBus) and
//! writes every toast to `tracing`: destructive toasts at `warn`, the rest
//! at `info`. It runs as a long-lived background task and stops when the
//! bus is dropped.

use tokio::sync::broadcast;

use crate::bus::Toast;

/// Background service that logs toasts.
pub struct ToastLogger;

impl ToastLogger {
    /// Run the logging loop until the channel closes.
    pub async fn run(mut receiver: broadcast::Receiver<Toast>) {
        loop {
            match receiver.recv().await {
                Ok(toast) => Self::log(&toast),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Toast logger lagged, some toasts were not logged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Event bus closed, toast logger shutting down");
                    break;
                }
            }
        }
    }

    fn log(toast: &Toast) {
        if toast.is_destructive() {
            tracing::warn!(title = %toast.title, description = %toast.description, "Toast");
        } else {
            tracing::info!(title = %toast.title, description = %toast.description, "Toast");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::EventBus;

    use super::*;

    #[tokio::test]
    async fn stops_when_bus_is_dropped() {
        let bus = EventBus::default();
        let handle = tokio::spawn(ToastLogger::run(bus.subscribe()));

        bus.publish(Toast::success("done"));
        bus.publish(Toast::error("failed"));
        drop(bus);

        handle.await.expect("logger task should finish cleanly");
    }
}

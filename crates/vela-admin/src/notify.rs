//! # Notification Hub
//!
//! The process-wide toast list, shared by every controller.
//!
//! ## Sharing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Notification Hub                                  │
//! │                                                                         │
//! │   ProductsController ──┐                                                │
//! │   OrdersController   ──┼──► NotificationHub ──► NotificationList        │
//! │   AuthController     ──┘         │                (vela-core)           │
//! │                                  │                                      │
//! │                                  └── duration > 0: spawned timer        │
//! │                                      removes the id after expiry        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hub is handed to each controller at construction rather than read
//! from a global, so tests can observe one isolated list per case. Each
//! notification gets an independent dismissal timer; removal stays
//! idempotent, so a timer firing after an explicit dismissal is harmless.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::debug;

use vela_core::{Notification, NotificationList, Severity, DEFAULT_DURATION_MS};

/// Shared handle to the process-wide notification list.
#[derive(Debug, Clone, Default)]
pub struct NotificationHub {
    list: Arc<Mutex<NotificationList>>,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and schedules its dismissal.
    ///
    /// A `duration_ms` of 0 means the notification persists until removed
    /// explicitly. Timers need a tokio runtime; without one the
    /// notification simply persists.
    pub fn notify(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> String {
        let id = self.lock().push(message, severity, duration_ms);

        if duration_ms > 0 {
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                let hub = self.clone();
                let timer_id = id.clone();
                handle.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(duration_ms)).await;
                    if hub.remove(&timer_id) {
                        debug!(id = %timer_id, "notification expired");
                    }
                });
            }
        }

        id
    }

    /// Success toast with the default duration.
    pub fn success(&self, message: impl Into<String>) -> String {
        self.notify(message, Severity::Success, DEFAULT_DURATION_MS)
    }

    /// Error toast with the default duration.
    pub fn error(&self, message: impl Into<String>) -> String {
        self.notify(message, Severity::Error, DEFAULT_DURATION_MS)
    }

    /// Warning toast with the default duration.
    pub fn warning(&self, message: impl Into<String>) -> String {
        self.notify(message, Severity::Warning, DEFAULT_DURATION_MS)
    }

    /// Info toast with the default duration.
    pub fn info(&self, message: impl Into<String>) -> String {
        self.notify(message, Severity::Info, DEFAULT_DURATION_MS)
    }

    /// Removes a notification by id. Idempotent.
    pub fn remove(&self, id: &str) -> bool {
        self.lock().remove(id)
    }

    /// Removes every notification.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// A point-in-time copy of the visible notifications.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().items().to_vec()
    }

    /// Number of visible notifications.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no notifications are visible.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, NotificationList> {
        self.list.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_appends_and_reports_severity() {
        let hub = NotificationHub::new();
        hub.success("Saved.");
        hub.error("Failed.");

        let items = hub.snapshot();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].severity, Severity::Success);
        assert_eq!(items[1].severity, Severity::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_dismissal() {
        let hub = NotificationHub::new();
        hub.notify("bye", Severity::Info, 5_000);
        assert_eq!(hub.len(), 1);

        tokio::time::sleep(Duration::from_millis(5_050)).await;
        tokio::task::yield_now().await;
        assert!(hub.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_notification_outlives_timers() {
        let hub = NotificationHub::new();
        hub.notify("stay", Severity::Warning, 0);

        tokio::time::sleep(Duration::from_secs(60)).await;
        tokio::task::yield_now().await;
        assert_eq!(hub.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_dismissal_beats_timer() {
        let hub = NotificationHub::new();
        let id = hub.notify("bye", Severity::Info, 5_000);

        assert!(hub.remove(&id));
        // The timer firing later finds nothing to remove
        tokio::time::sleep(Duration::from_millis(5_050)).await;
        tokio::task::yield_now().await;
        assert!(hub.is_empty());
    }
}

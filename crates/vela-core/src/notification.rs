//! # Notification List
//!
//! The ordered, process-wide list of toast notifications.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Notification Lifecycle                               │
//! │                                                                         │
//! │  push("Saved!", Success, 5000) ──► appended to ordered list            │
//! │       │                                                                 │
//! │       ├── duration_ms > 0: auto-removed after duration                  │
//! │       │   (the timer lives in the async layer, not here)                │
//! │       │                                                                 │
//! │       └── duration_ms == 0: persists until removed explicitly           │
//! │                                                                         │
//! │  remove(id) ──► idempotent (removing a missing id is a no-op)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This module is pure bookkeeping: ids, ordering, removal. Timers and
//! sharing live in `vela-admin`'s notification hub.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::Serialize;
use ts_rs::TS;

/// Default auto-dismiss duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Severity of a notification, mapped to toast styling by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// A single toast notification.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Notification {
    /// Unique, time-derived identifier.
    pub id: String,

    /// Message shown to the user.
    pub message: String,

    /// Styling/severity class.
    pub severity: Severity,

    /// Auto-dismiss delay in milliseconds. 0 means persist indefinitely.
    pub duration_ms: u64,
}

/// Process-wide counter disambiguating ids created in the same millisecond.
static NOTIFICATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generates a unique, time-derived notification id.
fn next_id() -> String {
    let seq = NOTIFICATION_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}

/// The ordered notification list.
///
/// Append-only except for explicit or timed removal. Shared across all
/// containers through the hub in `vela-admin`.
#[derive(Debug, Default)]
pub struct NotificationList {
    items: Vec<Notification>,
}

impl NotificationList {
    /// Creates an empty list.
    pub fn new() -> Self {
        NotificationList { items: Vec::new() }
    }

    /// Appends a notification and returns its id.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> String {
        let notification = Notification {
            id: next_id(),
            message: message.into(),
            severity,
            duration_ms,
        };
        let id = notification.id.clone();
        self.items.push(notification);
        id
    }

    /// Removes a notification by id. Removing a missing id is a no-op.
    ///
    /// Returns whether anything was removed, so timed removal can tell an
    /// expiry apart from an earlier explicit dismissal.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The notifications in display order.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Number of notifications currently shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no notifications are shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

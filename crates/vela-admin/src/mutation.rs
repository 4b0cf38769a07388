//! # Mutation Helper
//!
//! Specializes [`Resource`] for fire-and-forget writes: one call, one
//! outcome notification.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      run(operation)                                     │
//! │                                                                         │
//! │   Ok(value)  ──► container holds value ──► one success toast            │
//! │                                            (unless silenced)            │
//! │   Err(error) ──► container holds error ──► one error toast, None        │
//! │                                                                         │
//! │   No retry, no optimistic update, no rollback.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::future::Future;

use vela_core::ResourceState;

use crate::notify::NotificationHub;
use crate::resource::{ExecuteOptions, Resource};

/// Toast shown when a mutation succeeds and no custom message is set.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully.";

/// Notification behavior for one mutation call.
pub struct MutationOptions {
    /// Show a success toast. Defaults to true.
    pub show_success_notification: bool,
    /// Success toast text; falls back to [`DEFAULT_SUCCESS_MESSAGE`].
    pub success_message: Option<String>,
}

impl Default for MutationOptions {
    fn default() -> Self {
        MutationOptions {
            show_success_notification: true,
            success_message: None,
        }
    }
}

impl MutationOptions {
    /// Success toast with a custom message.
    pub fn message(text: impl Into<String>) -> Self {
        MutationOptions {
            show_success_notification: true,
            success_message: Some(text.into()),
        }
    }

    /// No success toast. Errors still notify.
    pub fn silent() -> Self {
        MutationOptions {
            show_success_notification: false,
            success_message: None,
        }
    }
}

/// A write operation modeled through the resource container contract.
#[derive(Debug, Clone)]
pub struct Mutation<T> {
    resource: Resource<T>,
    hub: NotificationHub,
}

impl<T: Clone + 'static> Mutation<T> {
    /// Creates a mutation reporting through `hub`.
    pub fn new(hub: NotificationHub) -> Self {
        Mutation {
            resource: Resource::new(),
            hub,
        }
    }

    /// Runs the write with default notification behavior.
    pub async fn run<F, Fut, E>(&self, operation: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run_with(operation, MutationOptions::default()).await
    }

    /// Runs the write; exactly one toast reports the outcome.
    ///
    /// Returns `Some(value)` on success, `None` on failure. Failures never
    /// propagate; the durable message stays readable via [`Self::error`].
    pub async fn run_with<F, Fut, E>(&self, operation: F, options: MutationOptions) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let success_hub = self.hub.clone();
        let error_hub = self.hub.clone();
        let show_success = options.show_success_notification;
        let success_message = options
            .success_message
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());

        self.resource
            .execute_with(
                operation,
                ExecuteOptions::default()
                    .on_success(move |_| {
                        if show_success {
                            success_hub.success(success_message);
                        }
                    })
                    .on_error(move |message| {
                        error_hub.error(message.to_string());
                    }),
            )
            .await
    }

    /// Whether the write is in flight.
    pub fn is_loading(&self) -> bool {
        self.resource.is_loading()
    }

    /// The durable error message, if the last write failed.
    pub fn error(&self) -> Option<String> {
        self.resource.error()
    }

    /// The last successful result.
    pub fn data(&self) -> Option<T> {
        self.resource.data()
    }

    /// A point-in-time copy of the container.
    pub fn state(&self) -> ResourceState<T> {
        self.resource.snapshot()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::Severity;

    #[derive(Debug, Clone, PartialEq)]
    struct Created {
        id: i64,
        name: String,
    }

    #[tokio::test]
    async fn test_successful_mutation_shows_one_success_toast() {
        let hub = NotificationHub::new();
        let mutation: Mutation<Created> = Mutation::new(hub.clone());

        let result = mutation
            .run(|| async {
                Ok::<_, String>(Created {
                    id: 7,
                    name: "X".to_string(),
                })
            })
            .await;

        assert_eq!(
            result,
            Some(Created {
                id: 7,
                name: "X".to_string()
            })
        );
        assert_eq!(mutation.data().map(|c| c.id), Some(7));

        let toasts = hub.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_failed_mutation_shows_one_error_toast_and_sentinel() {
        let hub = NotificationHub::new();
        let mutation: Mutation<Created> = Mutation::new(hub.clone());

        let result = mutation
            .run(|| async { Err::<Created, _>("The name field is required.".to_string()) })
            .await;

        assert!(result.is_none());
        assert_eq!(
            mutation.error().as_deref(),
            Some("The name field is required.")
        );

        let toasts = hub.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Error);
        assert_eq!(toasts[0].message, "The name field is required.");
    }

    #[tokio::test]
    async fn test_silent_mutation_skips_success_toast() {
        let hub = NotificationHub::new();
        let mutation: Mutation<i32> = Mutation::new(hub.clone());

        mutation
            .run_with(|| async { Ok::<_, String>(1) }, MutationOptions::silent())
            .await;

        assert!(hub.is_empty());
    }

    #[tokio::test]
    async fn test_custom_success_message() {
        let hub = NotificationHub::new();
        let mutation: Mutation<i32> = Mutation::new(hub.clone());

        mutation
            .run_with(
                || async { Ok::<_, String>(1) },
                MutationOptions::message("Product created."),
            )
            .await;

        assert_eq!(hub.snapshot()[0].message, "Product created.");
    }
}

//! # Async Resource Executor
//!
//! Wraps [`ResourceState`] with the `execute` orchestration: one method
//! that runs an async operation and drives the container through its
//! transitions.
//!
//! ## Execute Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      execute(operation)                                 │
//! │                                                                         │
//! │  1. reset()                  (when reset_on_start, the default)         │
//! │  2. set_loading(true)                                                   │
//! │  3. await operation()        ← the only suspension point                │
//! │  4a. Ok(value)  ──► set_data(value) ──► on_success(value) ──► Some      │
//! │  4b. Err(error) ──► set_error(msg)  ──► on_error(msg)    ──► None       │
//! │                                                                         │
//! │  Failures never propagate past execute; callers branch on the           │
//! │  Option sentinel or read the durable error off the container.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overlapping Calls
//! Each `execute` takes a fresh generation number before suspending. A
//! completion whose generation is no longer current is discarded without
//! touching the container, so the last *started* call wins regardless of
//! response arrival order. Discarded calls return the same `None` sentinel
//! as failures.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use vela_core::ResourceState;

/// Callback/behavior options for [`Resource::execute_with`].
pub struct ExecuteOptions<T> {
    /// Reset the container before starting. Defaults to true.
    pub reset_on_start: bool,
    /// Invoked exactly once with the value on success.
    pub on_success: Option<Box<dyn FnOnce(&T) + Send>>,
    /// Invoked exactly once with the message on failure.
    pub on_error: Option<Box<dyn FnOnce(&str) + Send>>,
}

impl<T> Default for ExecuteOptions<T> {
    fn default() -> Self {
        ExecuteOptions {
            reset_on_start: true,
            on_success: None,
            on_error: None,
        }
    }
}

impl<T> ExecuteOptions<T> {
    /// Keeps the previous data/error visible while the operation runs.
    pub fn keep_state(mut self) -> Self {
        self.reset_on_start = false;
        self
    }

    pub fn on_success(mut self, callback: impl FnOnce(&T) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl FnOnce(&str) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }
}

/// A [`ResourceState`] paired with the async `execute` orchestration.
///
/// Cloning yields a handle to the same container.
#[derive(Debug)]
pub struct Resource<T> {
    state: Arc<Mutex<ResourceState<T>>>,
    generation: Arc<AtomicU64>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Resource {
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<T: Clone> Default for Resource<T> {
    fn default() -> Self {
        Resource::new()
    }
}

impl<T: Clone> Resource<T> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Resource {
            state: Arc::new(Mutex::new(ResourceState::new())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Creates a container that starts with (and resets to) `initial`.
    pub fn with_initial(initial: T) -> Self {
        Resource {
            state: Arc::new(Mutex::new(ResourceState::with_initial(initial))),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Runs `operation` with default options.
    pub async fn execute<F, Fut, E>(&self, operation: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.execute_with(operation, ExecuteOptions::default()).await
    }

    /// Runs `operation`, driving the container through
    /// reset → loading → data/error.
    ///
    /// Returns `Some(value)` on success, `None` on failure or when a
    /// newer call superseded this one while it was in flight.
    pub async fn execute_with<F, Fut, E>(
        &self,
        operation: F,
        options: ExecuteOptions<T>,
    ) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let generation = self.begin(options.reset_on_start);

        let result = operation().await;

        match result {
            Ok(value) => {
                if !self.complete_ok(generation, value.clone()) {
                    debug!(generation, "discarding stale completion");
                    return None;
                }
                if let Some(on_success) = options.on_success {
                    on_success(&value);
                }
                Some(value)
            }
            Err(error) => {
                let message = error.to_string();
                if !self.complete_err(generation, &message) {
                    debug!(generation, "discarding stale failure");
                    return None;
                }
                if let Some(on_error) = options.on_error {
                    on_error(&message);
                }
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Split orchestration, for wrappers with extra bookkeeping
    // -------------------------------------------------------------------------

    /// Starts a call: bumps the generation and enters the loading state.
    pub(crate) fn begin(&self, reset_on_start: bool) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.lock();
        if reset_on_start {
            state.reset();
        }
        state.set_loading(true);
        generation
    }

    /// Lands a successful result. Returns false when the call went stale.
    pub(crate) fn complete_ok(&self, generation: u64, value: T) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.lock().set_data(value);
        true
    }

    /// Lands a failure. Returns false when the call went stale.
    pub(crate) fn complete_err(&self, generation: u64, message: &str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.lock().set_error(message);
        true
    }

    /// Records a failure without generation bookkeeping.
    ///
    /// Used by incremental loads that run outside the execute pipeline.
    pub(crate) fn fail(&self, message: &str) {
        self.lock().set_error(message);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    // -------------------------------------------------------------------------
    // Container views and direct mutation
    // -------------------------------------------------------------------------

    /// A point-in-time copy of the whole container.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.lock().clone()
    }

    /// Whether an operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// The durable error message, if the last operation failed.
    pub fn error(&self) -> Option<String> {
        self.lock().error().map(String::from)
    }

    /// Clones the current value out of the container.
    pub fn data(&self) -> Option<T> {
        self.lock().data_cloned()
    }

    /// Whether the container holds data.
    pub fn has_data(&self) -> bool {
        self.lock().has_data()
    }

    /// Restores the initial state.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Mutates the stored value in place, if present.
    ///
    /// List controllers use this to splice created/updated/deleted entries
    /// without a full reload.
    pub fn update_data<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        self.lock().update_data(f);
    }

    fn lock(&self) -> MutexGuard<'_, ResourceState<T>> {
        // A poisoned lock only means a panic mid-update elsewhere; the
        // container's state is still a valid snapshot
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

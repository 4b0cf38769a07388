//! # Resource State Container
//!
//! The minimal unit tracking one async operation's loading/error/data.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Resource State Transitions                           │
//! │                                                                         │
//! │                    set_loading(true)                                    │
//! │        Idle ──────────────────────────────► Loading                     │
//! │         ▲                                      │                        │
//! │         │                        ┌─────────────┴────────────┐           │
//! │         │                        ▼                          ▼           │
//! │         │                  Success(data)               Error(msg)       │
//! │         │                        │                          │           │
//! │         └────────────────────────┴──────────────────────────┘           │
//! │                        reset() / next execute                           │
//! │                                                                         │
//! │  INVARIANTS:                                                            │
//! │  • is_loading == true  ⇒  error == None                                 │
//! │  • set_data clears error AND loading                                    │
//! │  • set_error clears loading but KEEPS data (stale-while-error)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no terminal state: a container can be re-executed indefinitely
//! while its owning scope is alive.

/// Tracks the loading/error/data triple for a single async operation.
///
/// ## Ownership
/// Each feature controller owns exactly one container (or one paginated
/// wrapper around one); containers are never shared across controllers.
///
/// ## Stale-While-Error
/// `set_error` deliberately preserves the previous `data` so consumers can
/// keep rendering the last known good value next to an inline error.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    is_loading: bool,
    error: Option<String>,
    data: Option<T>,
    /// Value restored by `reset()`.
    initial: Option<T>,
}

impl<T: Clone> ResourceState<T> {
    /// Creates an empty container (no initial data).
    pub fn new() -> Self {
        ResourceState {
            is_loading: false,
            error: None,
            data: None,
            initial: None,
        }
    }

    /// Creates a container that starts with (and resets to) `initial`.
    pub fn with_initial(initial: T) -> Self {
        ResourceState {
            is_loading: false,
            error: None,
            data: Some(initial.clone()),
            initial: Some(initial),
        }
    }

    /// Sets the loading flag.
    ///
    /// Entering the loading state clears any previous error (the invariant
    /// `is_loading ⇒ error == None`), but leaves data untouched so the
    /// stale value stays visible during a refresh.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        if loading {
            self.error = None;
        }
    }

    /// Records an error message and clears the loading flag.
    ///
    /// Does NOT clear `data` - the last known good value remains visible.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }

    /// Stores a value, clearing both error and loading.
    pub fn set_data(&mut self, value: T) {
        self.data = Some(value);
        self.error = None;
        self.is_loading = false;
    }

    /// Mutates the stored value in place, if present.
    ///
    /// Used by list controllers to append/replace/remove entries after a
    /// mutation without going through a full reload.
    pub fn update_data<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Some(data) = self.data.as_mut() {
            f(data);
        }
    }

    /// Restores `{ is_loading: false, error: None, data: initial }`.
    ///
    /// Idempotent: calling `reset()` twice yields the same state as once.
    pub fn reset(&mut self) {
        self.is_loading = false;
        self.error = None;
        self.data = self.initial.clone();
    }

    // -------------------------------------------------------------------------
    // Read-only views
    // -------------------------------------------------------------------------

    /// Whether an operation is currently in flight.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The durable error message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The stored value, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Clones the stored value out of the container.
    pub fn data_cloned(&self) -> Option<T> {
        self.data.clone()
    }

    /// Whether the container holds an error.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the container holds data.
    #[inline]
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Whether the container holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

impl<T: Clone> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_container_is_idle() {
        let state: ResourceState<i32> = ResourceState::new();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.is_empty());
        assert!(!state.has_data());
        assert!(!state.has_error());
    }

    #[test]
    fn test_loading_clears_error() {
        let mut state: ResourceState<i32> = ResourceState::new();
        state.set_error("boom");
        assert!(state.has_error());

        // Invariant: is_loading == true implies error == None
        state.set_loading(true);
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_loading_repeatedly_keeps_error_clear() {
        let mut state: ResourceState<i32> = ResourceState::new();
        for _ in 0..3 {
            state.set_error("boom");
            state.set_loading(true);
            assert!(state.error().is_none());
        }
    }

    #[test]
    fn test_set_data_clears_error_and_loading() {
        let mut state: ResourceState<i32> = ResourceState::new();
        state.set_loading(true);
        state.set_data(42);

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.data(), Some(&42));
    }

    #[test]
    fn test_error_preserves_stale_data() {
        let mut state: ResourceState<i32> = ResourceState::new();
        state.set_data(42);
        state.set_loading(true);
        state.set_error("request failed");

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("request failed"));
        // Stale-while-error: the old value is still there
        assert_eq!(state.data(), Some(&42));
    }

    #[test]
    fn test_reset_restores_initial_and_is_idempotent() {
        let mut state = ResourceState::with_initial(vec![1, 2]);
        state.set_data(vec![3]);
        state.set_error("boom");

        state.reset();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.data(), Some(&vec![1, 2]));

        // Second reset yields the exact same state
        state.reset();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_reset_without_initial_clears_data() {
        let mut state: ResourceState<i32> = ResourceState::new();
        state.set_data(7);
        state.reset();
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_data_in_place() {
        let mut state = ResourceState::with_initial(vec![1, 2]);
        state.update_data(|items| items.push(3));
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));

        // No-op when empty
        let mut empty: ResourceState<Vec<i32>> = ResourceState::new();
        empty.update_data(|items| items.push(1));
        assert!(empty.is_empty());
    }
}

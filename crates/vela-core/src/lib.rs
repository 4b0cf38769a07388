//! # vela-core: Pure State Logic for the Vela Admin SDK
//!
//! This crate is the **heart** of the Vela Admin SDK. It contains all state
//! logic as pure data structures with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vela Admin SDK Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Admin UI (web frontend)                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vela-admin (controllers)                        │   │
//! │  │    Resource / PagedResource / FeedResource / Mutation          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vela-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌──────────────┐ ┌─────────┐ │   │
//! │  │   │ resource  │  │ pagination │  │ notification │ │  types  │ │   │
//! │  │   │  loading  │  │  envelope  │  │  list + ids  │ │  User   │ │   │
//! │  │   │ error/data│  │ feed buffer│  │  severity    │ │ Product │ │   │
//! │  │   └───────────┘  └────────────┘  └──────────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE STATE TRANSITIONS     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vela-client (HTTP layer)                        │   │
//! │  │            reqwest client, typed services, session              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`resource`] - The resource state container (loading/error/data)
//! - [`pagination`] - Pagination state, page envelopes, feed accumulation
//! - [`notification`] - Notification list with time-derived ids
//! - [`types`] - View models of the REST API (User, Product, Order, ...)
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every state change is a deterministic method call
//! 2. **No I/O**: Network, file system and timer access is FORBIDDEN here
//! 3. **Stale-While-Error**: An error never destroys the last good data
//! 4. **Explicit Invariants**: `is_loading == true` implies `error == None`
//!
//! ## Example Usage
//!
//! ```rust
//! use vela_core::resource::ResourceState;
//!
//! let mut state: ResourceState<Vec<String>> = ResourceState::new();
//!
//! state.set_loading(true);
//! assert!(state.is_loading());
//!
//! state.set_data(vec!["first".to_string()]);
//! assert!(!state.is_loading());
//! assert!(state.has_data());
//!
//! // An error keeps the previous data visible (stale-while-error)
//! state.set_error("request failed");
//! assert!(state.has_error());
//! assert!(state.has_data());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod notification;
pub mod pagination;
pub mod resource;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vela_core::ResourceState` instead of
// `use vela_core::resource::ResourceState`

pub use notification::{Notification, NotificationList, Severity, DEFAULT_DURATION_MS};
pub use pagination::{FeedBuffer, PageEnvelope, PaginationState};
pub use resource::ResourceState;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tenant ID sent in the `X-Tenant-ID` header when none is configured.
///
/// ## Why a constant?
/// Development backends seed tenant 1 by default. Production deployments
/// always override this via configuration.
pub const DEFAULT_TENANT_ID: &str = "1";

/// Default page size for list endpoints.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Page size used when a caller wants "everything" from a list endpoint.
///
/// The backend caps list responses, so "all" is modelled as one very large
/// page rather than an unpaginated endpoint.
pub const ALL_ITEMS_PER_PAGE: u32 = 1000;

/// Minimum query length before a search request is issued.
///
/// ## Why
/// One-character queries match nearly everything and hammer the backend
/// while the user is still typing.
pub const MIN_SEARCH_LEN: usize = 2;

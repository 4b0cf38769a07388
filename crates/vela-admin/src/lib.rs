//! # vela-admin: Async Resource Controllers for the Vela Admin SDK
//!
//! This crate turns the pure containers of vela-core and the typed
//! services of vela-client into ready-to-drive feature controllers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vela Admin SDK Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host UI / CLI (apps/console)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vela-admin (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌──────────────┐  │   │
//! │  │   │ resource  │ │   paged   │ │ mutation  │ │    notify    │  │   │
//! │  │   │  execute  │ │ pages +   │ │ one toast │ │ shared hub + │  │   │
//! │  │   │ + stale   │ │ feeds     │ │ per write │ │ dismiss      │  │   │
//! │  │   │  discard  │ │           │ │           │ │ timers       │  │   │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   controllers: auth, categories, products, customers,           │   │
//! │  │                orders, users, reports, dashboard                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │         vela-core (state)  +  vela-client (HTTP)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`resource`] - The async `execute` pipeline with stale-call discard
//! - [`paged`] - Page navigation and "load more" feed accumulation
//! - [`mutation`] - Writes with one outcome notification per call
//! - [`notify`] - The shared notification hub with dismissal timers
//! - [`controllers`] - One controller per feature area
//!
//! ## Design Principles
//!
//! 1. **Failures never propagate**: `execute` converts every error to a
//!    stored message plus a `None` sentinel
//! 2. **Last started wins**: a stale in-flight completion is discarded,
//!    never applied over a newer call's result
//! 3. **One toast per outcome**: loads and writes each notify at most once
//! 4. **Injected collaborators**: the API handle and notification hub are
//!    passed in, never read from globals

// =============================================================================
// Module Declarations
// =============================================================================

pub mod controllers;
pub mod mutation;
pub mod notify;
pub mod paged;
pub mod resource;

// =============================================================================
// Re-exports
// =============================================================================

pub use mutation::{Mutation, MutationOptions, DEFAULT_SUCCESS_MESSAGE};
pub use notify::NotificationHub;
pub use paged::{FeedResource, PagedResource};
pub use resource::{ExecuteOptions, Resource};

// Controller re-exports for convenience
pub use controllers::{
    AuthController, CategoriesController, CustomerDirectoryController, CustomerSearchController,
    CustomersController, DashboardController, OrdersController, ProductsController,
    ReportsController, UsersController,
};

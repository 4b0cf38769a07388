//! # Feature Controllers
//!
//! One controller per feature area, each owning its resource containers
//! and reporting through the shared notification hub.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Controller Pattern                                 │
//! │                                                                         │
//! │   Controller = Api handle + NotificationHub + containers                │
//! │                                                                         │
//! │   reads    ──► PagedResource / FeedResource / Resource                  │
//! │   writes   ──► Mutation (one outcome toast per call)                    │
//! │   lists    ──► spliced in place after writes, no full reload            │
//! │                                                                         │
//! │   Constructors take an `auto_load` flag through `open`; `new` never     │
//! │   issues requests on its own.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;
pub mod reports;
pub mod users;

pub use auth::AuthController;
pub use categories::CategoriesController;
pub use customers::{CustomerDirectoryController, CustomerSearchController, CustomersController};
pub use orders::OrdersController;
pub use products::ProductsController;
pub use reports::{DashboardController, ReportsController};
pub use users::UsersController;

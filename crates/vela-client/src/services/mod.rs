//! # Typed Services
//!
//! One service per backend resource. Services are thin: they know their
//! endpoint paths and response shapes, and delegate everything else to
//! [`crate::http::HttpClient`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Service Layout                                    │
//! │                                                                         │
//! │   auth        /login /register /logout /me                              │
//! │   categories  /categories[/{id}]                                        │
//! │   products    /products[/{id}]                                          │
//! │   customers   /customers[/{id}] /customers/identify                     │
//! │   orders      /orders[/{id}] /orders/bulk-status                        │
//! │   reports     /reports/{sales,financial,customers,products,dashboard}   │
//! │   users       /users[/{id}]                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;
pub mod reports;
pub mod users;

pub use auth::AuthService;
pub use categories::CategoryService;
pub use customers::CustomerService;
pub use orders::OrderService;
pub use products::ProductService;
pub use reports::ReportService;
pub use users::UserService;

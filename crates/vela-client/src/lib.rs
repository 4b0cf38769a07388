//! # vela-client: HTTP Layer for the Vela Admin SDK
//!
//! This crate talks to the REST backend. It owns the reqwest client, the
//! header policy and the typed services; state logic stays in vela-core.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vela Admin SDK Data Flow                           │
//! │                                                                         │
//! │  Controller (vela-admin)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vela-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │      Api      │    │   Services    │    │  HttpClient  │  │   │
//! │  │   │  (aggregate)  │    │ (auth, orders │    │  (http.rs)   │  │   │
//! │  │   │               │───►│  products, ..)│───►│              │  │   │
//! │  │   │ api.orders()  │    │ typed methods │    │ headers      │  │   │
//! │  │   │ api.auth()    │    │ per endpoint  │    │ error map    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              REST Backend (Laravel-style JSON API)              │   │
//! │  │              http://localhost:8000/api  (default)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Base URL, tenant id, timeout
//! - [`session`] - Credential storage trait and in-memory impl
//! - [`http`] - The shared transport (headers, error mapping)
//! - [`error`] - API error types with user-facing messages
//! - [`services`] - One typed service per backend resource
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vela_client::{Api, ApiConfig, MemorySession};
//!
//! let api = Api::new(ApiConfig::default(), MemorySession::shared())?;
//!
//! api.auth().login(&credentials).await?;
//! let page = api.products().list(&Default::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use session::{MemorySession, Session};

// Service re-exports for convenience
pub use services::{
    AuthService, CategoryService, CustomerService, OrderService, ProductService, ReportService,
    UserService,
};

use std::sync::Arc;

/// Entry point aggregating every typed service over one shared transport.
///
/// Cloning is cheap; clones share the connection pool and session.
#[derive(Debug, Clone)]
pub struct Api {
    client: HttpClient,
}

impl Api {
    /// Builds the API client from a config and an injected session store.
    pub fn new(config: ApiConfig, session: Arc<dyn Session>) -> ApiResult<Self> {
        Ok(Api {
            client: HttpClient::new(config, session)?,
        })
    }

    /// The underlying transport, for callers needing raw access.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Authentication endpoints.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    /// Category endpoints.
    pub fn categories(&self) -> CategoryService {
        CategoryService::new(self.client.clone())
    }

    /// Product endpoints.
    pub fn products(&self) -> ProductService {
        ProductService::new(self.client.clone())
    }

    /// Customer endpoints.
    pub fn customers(&self) -> CustomerService {
        CustomerService::new(self.client.clone())
    }

    /// Order endpoints.
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.client.clone())
    }

    /// Report and dashboard endpoints.
    pub fn reports(&self) -> ReportService {
        ReportService::new(self.client.clone())
    }

    /// User management endpoints.
    pub fn users(&self) -> UserService {
        UserService::new(self.client.clone())
    }
}

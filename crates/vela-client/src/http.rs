//! # HTTP Transport
//!
//! The single place requests are built, sent and decoded.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request Pipeline                                   │
//! │                                                                         │
//! │  service call (typed)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build request ── Accept: application/json                              │
//! │       │           X-Tenant-ID: <config.tenant_id>                       │
//! │       │           Authorization: Bearer <session.token()>  (if any)     │
//! │       │           Idempotency-Key: <uuid v4>               (POST only)  │
//! │       ▼                                                                 │
//! │  send ──transport error──► ApiError::{Network,Timeout}                  │
//! │       │                                                                 │
//! │       ├── 2xx ──► decode JSON ──decode error──► ApiError::Decode        │
//! │       │                                                                 │
//! │       └── non-2xx ──► parse error body ──► ApiError::Http               │
//! │                └── 401 additionally clears the session token            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Idempotency
//! Every POST carries a fresh `Idempotency-Key` header so a retried create
//! (user double-click, flaky network) cannot produce duplicate entities.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::session::Session;

/// The shared HTTP transport behind every service.
///
/// Cheap to clone; clones share the connection pool and session.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
    session: Arc<dyn Session>,
}

impl HttpClient {
    /// Builds the transport from a config and an injected session store.
    pub fn new(config: ApiConfig, session: Arc<dyn Session>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::from)?;
        Ok(HttpClient {
            http,
            config: Arc::new(config),
            session,
        })
    }

    /// The session store this transport reads credentials from.
    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// The active configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Typed verbs
    // -------------------------------------------------------------------------

    /// GET with query-string pairs.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let builder = self.request(Method::GET, path).query(query);
        self.dispatch(Method::GET, path, builder).await
    }

    /// POST with a JSON body. Carries an idempotency key.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::POST, path).json(body);
        self.dispatch(Method::POST, path, builder).await
    }

    /// PUT with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::PUT, path).json(body);
        self.dispatch(Method::PUT, path, builder).await
    }

    /// PATCH with a JSON body, for partial updates.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::PATCH, path).json(body);
        self.dispatch(Method::PATCH, path, builder).await
    }

    /// DELETE.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let builder = self.request(Method::DELETE, path);
        self.dispatch(Method::DELETE, path, builder).await
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Builds a request with the standard header set.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method.clone(), self.config.url(path))
            .header("Accept", "application/json")
            .header("X-Tenant-ID", &self.config.tenant_id);

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        // One fresh key per POST; retries at higher layers get a new one,
        // which is what we want for user-initiated retries
        if method == Method::POST {
            builder = builder.header("Idempotency-Key", Uuid::new_v4().to_string());
        }

        builder
    }

    /// Sends the request and decodes the response.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        debug!(%method, path, "api request");

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(ApiError::Decode);
        }

        if status.as_u16() == 401 {
            // The token is dead; stop sending it
            self.session.clear_token();
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        let error = ApiError::from_status(status.as_u16(), body);
        warn!(%method, path, status = status.as_u16(), %error, "api request failed");
        Err(error)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("tenant_id", &self.config.tenant_id)
            .finish_non_exhaustive()
    }
}

//! # Client Configuration
//!
//! Connection settings for the HTTP layer.
//!
//! ## Resolution Order
//! ```text
//! explicit value  >  environment variable  >  built-in default
//!
//! base_url    VELA_API_URL      http://localhost:8000/api
//! tenant_id   VELA_TENANT_ID    "1"
//! timeout                       30 seconds
//! ```

use std::time::Duration;

use vela_core::DEFAULT_TENANT_ID;

/// Default backend URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`crate::Api`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash.
    pub base_url: String,

    /// Tenant sent in the `X-Tenant-ID` header on every request.
    pub tenant_id: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config from explicit values, environment variables, or
    /// defaults, in that order.
    pub fn from_env_or(base_url: Option<String>, tenant_id: Option<String>) -> Self {
        Self {
            base_url: base_url
                .or_else(|| std::env::var("VELA_API_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            tenant_id: tenant_id
                .or_else(|| std::env::var("VELA_TENANT_ID").ok())
                .unwrap_or_else(|| DEFAULT_TENANT_ID.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Config pointing at an explicit base URL, defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::from_env_or(Some(base_url.into()), None)
    }

    /// Full URL for an endpoint path like `/products`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env_or(None, None)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let config = ApiConfig::from_env_or(
            Some("https://api.example.com/v1/".to_string()),
            Some("42".to_string()),
        );
        // Trailing slash is stripped so url() never doubles it
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.tenant_id, "42");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_url_joins_path() {
        let config = ApiConfig::with_base_url("http://localhost:8000/api");
        assert_eq!(config.url("/products"), "http://localhost:8000/api/products");
        assert_eq!(
            config.url("/orders/7"),
            "http://localhost:8000/api/orders/7"
        );
    }
}

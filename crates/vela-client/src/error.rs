//! # API Error Types
//!
//! Error types for HTTP operations against the backend.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport error (reqwest::Error)      Non-2xx response                 │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  Network / Timeout / Decode          Http { status, message, .. }       │
//! │       │                                     │                           │
//! │       └──────────────┬──────────────────────┘                           │
//! │                      ▼                                                  │
//! │         ApiError (this module) ← One user-facing message per error      │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │         Resource container stores `error.to_string()`                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` form of every variant is already phrased for end users;
//! the state layer stores it verbatim.

use std::collections::HashMap;

use thiserror::Error;

/// Errors from HTTP operations.
///
/// Each variant renders to a single message suitable for direct display.
/// Raw status codes and per-field validation errors stay available for
/// callers that want to branch on them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    ///
    /// ## When This Occurs
    /// - 401: session expired or token revoked
    /// - 403: role lacks permission
    /// - 404: entity deleted or id mistyped
    /// - 422: validation failed (see `field_errors`)
    /// - 5xx: backend fault
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Validation errors keyed by field name (422 responses).
        field_errors: HashMap<String, Vec<String>>,
    },

    /// The request never produced a response.
    ///
    /// ## When This Occurs
    /// - Backend down or unreachable
    /// - DNS failure
    /// - Connection reset mid-request
    #[error("Connection failed. Check your network and try again.")]
    Network(#[source] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("The request timed out. Please try again.")]
    Timeout,

    /// The response body did not match the expected shape.
    ///
    /// ## When This Occurs
    /// - Backend/SDK version skew
    /// - Proxy returning HTML instead of JSON
    #[error("Received an unexpected response from the server.")]
    Decode(#[source] reqwest::Error),

    /// Anything that does not fit the variants above.
    #[error("{0}")]
    Other(String),
}

/// Shape of the backend's JSON error body.
///
/// Laravel-style: `{ "message": "...", "errors": { "field": ["..."] } }`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Builds the error for a non-2xx response.
    ///
    /// ## Message Selection
    /// ```text
    /// 401  → "Your session has expired. Please log in again."
    /// 403  → "You don't have permission to perform this action."
    /// 404  → "The requested resource was not found."
    /// 422  → first field error, else body message, else generic
    /// 5xx  → "A server error occurred. Please try again later."
    /// else → body message, else "Request failed (status N)."
    /// ```
    pub fn from_status(status: u16, body: ErrorBody) -> Self {
        let field_errors = body.errors.unwrap_or_default();
        let message = match status {
            401 => "Your session has expired. Please log in again.".to_string(),
            403 => "You don't have permission to perform this action.".to_string(),
            404 => "The requested resource was not found.".to_string(),
            422 => first_field_error(&field_errors)
                .or(body.message)
                .unwrap_or_else(|| "The submitted data is invalid.".to_string()),
            500..=599 => "A server error occurred. Please try again later.".to_string(),
            _ => body
                .message
                .unwrap_or_else(|| format!("Request failed (status {status}).")),
        };
        ApiError::Http {
            status,
            message,
            field_errors,
        }
    }

    /// The HTTP status, when the backend responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error means the session token is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Validation errors keyed by field, for inline form display.
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            ApiError::Http { field_errors, .. } if !field_errors.is_empty() => Some(field_errors),
            _ => None,
        }
    }
}

/// Picks the first message of the first field, in stable field order.
fn first_field_error(errors: &HashMap<String, Vec<String>>) -> Option<String> {
    let mut fields: Vec<&String> = errors.keys().collect();
    fields.sort();
    fields
        .into_iter()
        .find_map(|field| errors.get(field).and_then(|msgs| msgs.first().cloned()))
}

/// Convert transport errors to ApiError.
///
/// ## Error Mapping
/// ```text
/// err.is_timeout()  → ApiError::Timeout
/// err.is_decode()   → ApiError::Decode
/// Other             → ApiError::Network
/// ```
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Result type for HTTP operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================

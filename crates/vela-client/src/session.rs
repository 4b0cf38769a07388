//! # Session Store
//!
//! Where the bearer token and role live between requests.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Abstraction                                │
//! │                                                                         │
//! │   HttpClient ──reads token──► Session (trait)                           │
//! │       │                          ▲                                      │
//! │       │ 401 response             │                                      │
//! │       └──────clear_token─────────┤                                      │
//! │                                  │                                      │
//! │   AuthService ──login stores────┤                                      │
//! │                                  │                                      │
//! │          ┌───────────────────────┴───────────────────────┐             │
//! │          │ MemorySession (tests, CLI)                    │             │
//! │          │ host-provided impl (cookie jar, keychain, ..) │             │
//! │          └───────────────────────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP layer never decides where credentials persist; hosts inject a
//! `Session` implementation and the client only reads/clears through it.

use std::sync::{Arc, RwLock};

/// Credential storage injected into the HTTP layer.
///
/// Implementations must be cheap to call; the client reads the token on
/// every request.
pub trait Session: Send + Sync {
    /// The current bearer token, if logged in.
    fn token(&self) -> Option<String>;

    /// Stores a new bearer token after login/register.
    fn set_token(&self, token: &str);

    /// Forgets the token. Called on logout and on any 401 response.
    fn clear_token(&self);

    /// The current user's role string, if known.
    fn role(&self) -> Option<String>;

    /// Stores the role alongside the token.
    fn set_role(&self, role: &str);
}

/// In-memory session for tests and short-lived CLI processes.
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: RwLock<SessionData>,
}

#[derive(Debug, Default)]
struct SessionData {
    token: Option<String>,
    role: Option<String>,
}

impl MemorySession {
    /// Creates an empty (logged-out) session behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a session pre-loaded with a token, for tests.
    pub fn with_token(token: &str) -> Arc<Self> {
        let session = Self::default();
        session.set_token(token);
        Arc::new(session)
    }
}

impl Session for MemorySession {
    fn token(&self) -> Option<String> {
        self.inner.read().ok().and_then(|d| d.token.clone())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut data) = self.inner.write() {
            data.token = Some(token.to_string());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut data) = self.inner.write() {
            data.token = None;
            data.role = None;
        }
    }

    fn role(&self) -> Option<String> {
        self.inner.read().ok().and_then(|d| d.role.clone())
    }

    fn set_role(&self, role: &str) {
        if let Ok(mut data) = self.inner.write() {
            data.role = Some(role.to_string());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Auth Controller
//!
//! Login, registration, logout and the session validity check.
//!
//! Token/role storage lives in the injected `Session`; this controller
//! only tracks the current `User` as a resource container.

use vela_client::Api;
use vela_core::{LoginRequest, RegisterRequest, ResourceState, User};

use crate::notify::NotificationHub;
use crate::resource::{ExecuteOptions, Resource};

/// Current-user state for the login and account screens.
#[derive(Debug, Clone)]
pub struct AuthController {
    api: Api,
    hub: NotificationHub,
    user: Resource<User>,
}

impl AuthController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        AuthController {
            api,
            hub,
            user: Resource::new(),
        }
    }

    /// Exchanges credentials for a session. Failures show one error toast.
    pub async fn login(&self, email: &str, password: &str) -> Option<User> {
        let service = self.api.auth();
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let hub = self.hub.clone();
        self.user
            .execute_with(
                || async move { service.login(&request).await.map(|r| r.user) },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Creates an account and logs straight in.
    pub async fn register(&self, request: RegisterRequest) -> Option<User> {
        let service = self.api.auth();
        let hub = self.hub.clone();
        self.user
            .execute_with(
                || async move { service.register(&request).await.map(|r| r.user) },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Validates the stored token by fetching the account behind it.
    ///
    /// With no token stored this resets to logged-out without a request.
    /// A rejected token is cleared by the HTTP layer; no toast is shown,
    /// the caller redirects to login instead.
    pub async fn check_auth(&self) -> Option<User> {
        if !self.api.auth().is_authenticated() {
            self.user.reset();
            return None;
        }
        let service = self.api.auth();
        self.user
            .execute(|| async move { service.me().await })
            .await
    }

    /// Ends the session server-side and locally.
    pub async fn logout(&self) {
        let _ = self.api.auth().logout().await;
        self.user.reset();
    }

    /// Whether a token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.api.auth().is_authenticated()
    }

    /// The logged-in user, if known.
    pub fn user(&self) -> Option<User> {
        self.user.data()
    }

    /// A point-in-time copy of the user container.
    pub fn state(&self) -> ResourceState<User> {
        self.user.snapshot()
    }
}

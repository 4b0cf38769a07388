//! # Authentication Service
//!
//! Login, registration, logout and the current-user lookup.
//!
//! Successful login/register stores the bearer token and role in the
//! injected session; logout and 401 responses clear it again. No other
//! code touches credentials.

use tracing::info;

use vela_core::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest, User};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// Auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: HttpClient,
}

impl AuthService {
    pub(crate) fn new(client: HttpClient) -> Self {
        AuthService { client }
    }

    /// Exchanges credentials for a token and stores it in the session.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self.client.post("/login", request).await?;
        self.store_session(&response);
        info!(user_id = response.user.id, "logged in");
        Ok(response)
    }

    /// Creates an account and stores the returned token in the session.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self.client.post("/register", request).await?;
        self.store_session(&response);
        info!(user_id = response.user.id, "registered");
        Ok(response)
    }

    /// Invalidates the token server-side and clears the session.
    ///
    /// The session is cleared even when the request fails; a token the
    /// backend already rejected is not worth keeping.
    pub async fn logout(&self) -> ApiResult<MessageResponse> {
        let result = self
            .client
            .post("/logout", &serde_json::json!({}))
            .await;
        self.client.session().clear_token();
        result
    }

    /// Fetches the account behind the current token.
    ///
    /// Doubles as the session validity check on app start: a 401 here
    /// clears the stored token.
    pub async fn me(&self) -> ApiResult<User> {
        self.client.get("/me", &[]).await
    }

    /// Whether a token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.session().token().is_some()
    }

    fn store_session(&self, response: &AuthResponse) {
        let session = self.client.session();
        session.set_token(&response.token);
        session.set_role(response.user.role.as_str());
    }
}

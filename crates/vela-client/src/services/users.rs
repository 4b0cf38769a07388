//! # User Service
//!
//! Staff account management. Restricted to admin/tenant-owner roles
//! server-side; a 403 here is surfaced like any other error.

use vela_core::{
    CreateUserRequest, MessageResponse, PageEnvelope, UpdateUserRequest, User, UserFilters,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// `/users` endpoints.
#[derive(Debug, Clone)]
pub struct UserService {
    client: HttpClient,
}

impl UserService {
    pub(crate) fn new(client: HttpClient) -> Self {
        UserService { client }
    }

    /// Lists user accounts, paginated and filtered.
    pub async fn list(&self, filters: &UserFilters) -> ApiResult<PageEnvelope<User>> {
        self.client.get("/users", &filters.to_query()).await
    }

    /// Fetches one user by id.
    pub async fn get(&self, id: i64) -> ApiResult<User> {
        self.client.get(&format!("/users/{id}"), &[]).await
    }

    /// Creates a user account.
    pub async fn create(&self, request: &CreateUserRequest) -> ApiResult<User> {
        self.client.post("/users", request).await
    }

    /// Updates a user account. Absent fields are left unchanged.
    pub async fn update(&self, id: i64, request: &UpdateUserRequest) -> ApiResult<User> {
        self.client.put(&format!("/users/{id}"), request).await
    }

    /// Deletes a user account.
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("/users/{id}")).await
    }
}

//! # Category Service
//!
//! CRUD for product categories.

use vela_core::{
    Category, CategoryFilters, CreateCategoryRequest, MessageResponse, PageEnvelope,
    UpdateCategoryRequest, ALL_ITEMS_PER_PAGE,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// `/categories` endpoints.
#[derive(Debug, Clone)]
pub struct CategoryService {
    client: HttpClient,
}

impl CategoryService {
    pub(crate) fn new(client: HttpClient) -> Self {
        CategoryService { client }
    }

    /// Lists categories, paginated and filtered.
    pub async fn list(&self, filters: &CategoryFilters) -> ApiResult<PageEnvelope<Category>> {
        self.client.get("/categories", &filters.to_query()).await
    }

    /// Fetches every category as one oversized page.
    pub async fn all(&self) -> ApiResult<Vec<Category>> {
        let filters = CategoryFilters {
            per_page: Some(ALL_ITEMS_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Fetches every active category.
    pub async fn all_active(&self) -> ApiResult<Vec<Category>> {
        let filters = CategoryFilters {
            is_active: Some(true),
            per_page: Some(ALL_ITEMS_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Fetches one category by id.
    pub async fn get(&self, id: i64) -> ApiResult<Category> {
        self.client.get(&format!("/categories/{id}"), &[]).await
    }

    /// Creates a category.
    pub async fn create(&self, request: &CreateCategoryRequest) -> ApiResult<Category> {
        self.client.post("/categories", request).await
    }

    /// Updates a category. Absent fields are left unchanged.
    pub async fn update(&self, id: i64, request: &UpdateCategoryRequest) -> ApiResult<Category> {
        self.client.put(&format!("/categories/{id}"), request).await
    }

    /// Deletes a category.
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("/categories/{id}")).await
    }
}

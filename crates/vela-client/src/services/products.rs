//! # Product Service
//!
//! CRUD plus stock/active toggles for products.

use vela_core::{
    CreateProductRequest, MessageResponse, PageEnvelope, Product, ProductFilters,
    UpdateProductRequest, ALL_ITEMS_PER_PAGE,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// Page size used by [`ProductService::search`].
const SEARCH_PER_PAGE: u32 = 50;

/// `/products` endpoints.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: HttpClient,
}

impl ProductService {
    pub(crate) fn new(client: HttpClient) -> Self {
        ProductService { client }
    }

    /// Lists products, paginated and filtered.
    pub async fn list(&self, filters: &ProductFilters) -> ApiResult<PageEnvelope<Product>> {
        self.client.get("/products", &filters.to_query()).await
    }

    /// Fetches every product of one category as one oversized page.
    pub async fn by_category(&self, category_id: i64) -> ApiResult<Vec<Product>> {
        let filters = ProductFilters {
            category_id: Some(category_id),
            per_page: Some(ALL_ITEMS_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Fetches every active product as one oversized page.
    pub async fn all_active(&self) -> ApiResult<Vec<Product>> {
        let filters = ProductFilters {
            is_active: Some(true),
            per_page: Some(ALL_ITEMS_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Searches products by name/SKU fragment.
    pub async fn search(&self, term: &str) -> ApiResult<Vec<Product>> {
        let filters = ProductFilters {
            search: Some(term.to_string()),
            per_page: Some(SEARCH_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Active products at or below `threshold` stock.
    ///
    /// The backend has no low-stock endpoint; the active set is fetched
    /// and filtered locally.
    pub async fn low_stock(&self, threshold: i64) -> ApiResult<Vec<Product>> {
        let products = self.all_active().await?;
        Ok(products
            .into_iter()
            .filter(|product| product.is_low_stock(threshold))
            .collect())
    }

    /// Fetches one product by id.
    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.client.get(&format!("/products/{id}"), &[]).await
    }

    /// Creates a product.
    pub async fn create(&self, request: &CreateProductRequest) -> ApiResult<Product> {
        self.client.post("/products", request).await
    }

    /// Updates a product. Absent fields are left unchanged.
    pub async fn update(&self, id: i64, request: &UpdateProductRequest) -> ApiResult<Product> {
        self.client.put(&format!("/products/{id}"), request).await
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("/products/{id}")).await
    }

    /// Flips the active flag without touching other fields.
    pub async fn set_active(&self, id: i64, is_active: bool) -> ApiResult<Product> {
        self.client
            .patch(
                &format!("/products/{id}"),
                &UpdateProductRequest::set_active(is_active),
            )
            .await
    }

    /// Sets the stock level without touching other fields.
    pub async fn set_stock(&self, id: i64, stock_quantity: i64) -> ApiResult<Product> {
        self.client
            .patch(
                &format!("/products/{id}"),
                &UpdateProductRequest::set_stock(stock_quantity),
            )
            .await
    }
}

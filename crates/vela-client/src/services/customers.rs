//! # Customer Service
//!
//! CRUD plus phone-based identification for customers.
//!
//! `identify` backs the order-taking flow: the operator types a phone
//! number and gets either the existing customer or a freshly created one,
//! flagged with `is_new`.

use serde::Deserialize;

use vela_core::{
    CreateCustomerRequest, Customer, CustomerFilters, CustomerIdentifyRequest,
    CustomerIdentifyResponse, MenuResponse, MessageResponse, Order, PageEnvelope,
    UpdateCustomerRequest, ALL_ITEMS_PER_PAGE,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// Page size used by [`CustomerService::search`].
const SEARCH_PER_PAGE: u32 = 50;

/// `/customers` endpoints.
#[derive(Debug, Clone)]
pub struct CustomerService {
    client: HttpClient,
}

/// `{ "orders": [...] }` envelope of the customer-orders endpoint.
#[derive(Debug, Deserialize)]
struct OrdersEnvelope {
    orders: Vec<Order>,
}

impl CustomerService {
    pub(crate) fn new(client: HttpClient) -> Self {
        CustomerService { client }
    }

    /// Lists customers, paginated and filtered.
    pub async fn list(&self, filters: &CustomerFilters) -> ApiResult<PageEnvelope<Customer>> {
        self.client.get("/customers", &filters.to_query()).await
    }

    /// Fetches every active customer as one oversized page.
    pub async fn all_active(&self) -> ApiResult<Vec<Customer>> {
        let filters = CustomerFilters {
            is_active: Some(true),
            per_page: Some(ALL_ITEMS_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Searches customers by name/email/phone fragment.
    pub async fn search(&self, term: &str) -> ApiResult<Vec<Customer>> {
        let filters = CustomerFilters {
            search: Some(term.to_string()),
            per_page: Some(SEARCH_PER_PAGE),
            ..Default::default()
        };
        Ok(self.list(&filters).await?.data)
    }

    /// Fetches one customer by id.
    pub async fn get(&self, id: i64) -> ApiResult<Customer> {
        self.client.get(&format!("/customers/{id}"), &[]).await
    }

    /// Creates a customer.
    pub async fn create(&self, request: &CreateCustomerRequest) -> ApiResult<Customer> {
        self.client.post("/customers", request).await
    }

    /// Updates a customer. Absent fields are left unchanged.
    pub async fn update(&self, id: i64, request: &UpdateCustomerRequest) -> ApiResult<Customer> {
        self.client.put(&format!("/customers/{id}"), request).await
    }

    /// Deletes a customer.
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("/customers/{id}")).await
    }

    /// Flips the active flag. Reads the current value first.
    pub async fn toggle_active(&self, id: i64) -> ApiResult<Customer> {
        let customer = self.get(id).await?;
        let request = UpdateCustomerRequest {
            is_active: Some(!customer.is_active),
            ..Default::default()
        };
        self.client.patch(&format!("/customers/{id}"), &request).await
    }

    /// Fetches the digital menu shown to customers.
    pub async fn menu(&self) -> ApiResult<MenuResponse> {
        self.client.get("/customers/menu", &[]).await
    }

    /// Finds a customer by phone, creating one on the fly if unknown.
    pub async fn identify(
        &self,
        request: &CustomerIdentifyRequest,
    ) -> ApiResult<CustomerIdentifyResponse> {
        self.client.post("/customers/identify", request).await
    }

    /// Fetches a customer's order history.
    pub async fn orders(&self, customer_id: i64) -> ApiResult<Vec<Order>> {
        let envelope: OrdersEnvelope = self
            .client
            .get(&format!("/customers/{customer_id}/orders"), &[])
            .await?;
        Ok(envelope.orders)
    }
}

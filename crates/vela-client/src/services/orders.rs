//! # Order Service
//!
//! CRUD, status transitions and bulk status updates for orders.
//!
//! Status changes go through the regular update endpoint with a body of
//! `{ "status": ... }`; the backend validates the transition and stamps
//! `confirmed_at` / `shipped_at` / `delivered_at` as appropriate.

use std::collections::HashMap;

use vela_core::{
    BulkStatusUpdateRequest, BulkStatusUpdateResponse, CreateOrderRequest, CreateOrderResponse,
    MessageResponse, Order, OrderFilters, OrderStatus, PageEnvelope, TimePeriod,
    TimePeriodsResponse, UpdateOrderRequest,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// `/orders` endpoints.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: HttpClient,
}

impl OrderService {
    pub(crate) fn new(client: HttpClient) -> Self {
        OrderService { client }
    }

    /// Lists orders, paginated and filtered.
    pub async fn list(&self, filters: &OrderFilters) -> ApiResult<PageEnvelope<Order>> {
        self.client.get("/orders", &filters.to_query()).await
    }

    /// Fetches one order by id, line items included.
    pub async fn get(&self, id: i64) -> ApiResult<Order> {
        self.client.get(&format!("/orders/{id}"), &[]).await
    }

    /// Creates an order. The idempotency key on the POST guards against
    /// duplicate submissions.
    pub async fn create(&self, request: &CreateOrderRequest) -> ApiResult<CreateOrderResponse> {
        self.client.post("/orders", request).await
    }

    /// Updates an order. Absent fields are left unchanged.
    pub async fn update(&self, id: i64, request: &UpdateOrderRequest) -> ApiResult<Order> {
        self.client.put(&format!("/orders/{id}"), request).await
    }

    /// Deletes an order.
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("/orders/{id}")).await
    }

    /// Moves an order to `status`.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> ApiResult<Order> {
        let request = UpdateOrderRequest {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &request).await
    }

    /// Cancels an order.
    pub async fn cancel(&self, id: i64) -> ApiResult<Order> {
        self.update_status(id, OrderStatus::Cancelled).await
    }

    /// Confirms an order.
    pub async fn confirm(&self, id: i64) -> ApiResult<Order> {
        self.update_status(id, OrderStatus::Confirmed).await
    }

    /// Fetches the named time ranges the list endpoint accepts as
    /// `time_range` values.
    pub async fn time_periods(&self) -> ApiResult<HashMap<String, TimePeriod>> {
        let response: TimePeriodsResponse =
            self.client.get("/orders/time-periods", &[]).await?;
        Ok(response.time_periods)
    }

    /// Moves many orders to one status in a single request.
    ///
    /// Partial failure is normal: the response lists updated and failed
    /// orders separately and the call succeeds either way.
    pub async fn bulk_update_status(
        &self,
        request: &BulkStatusUpdateRequest,
    ) -> ApiResult<BulkStatusUpdateResponse> {
        self.client.post("/orders/bulk-status", request).await
    }
}

//! # Orders Controller
//!
//! Accumulating order feed ("load more") with status transitions and bulk
//! updates. Orders arrive newest-first from the backend; the feed appends
//! pages in request order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use vela_client::{Api, ApiError, OrderService};
use vela_core::{
    BulkStatusUpdateRequest, BulkStatusUpdateResponse, CreateOrderRequest, Order, OrderFilters,
    OrderStatus, PageEnvelope, PaginationState, ResourceState, TimePeriod, DEFAULT_PER_PAGE,
};

use crate::mutation::{Mutation, MutationOptions};
use crate::notify::NotificationHub;
use crate::paged::FeedResource;
use crate::resource::Resource;

/// Order feed + status writes.
#[derive(Debug, Clone)]
pub struct OrdersController {
    api: Api,
    hub: NotificationHub,
    feed: FeedResource<Order>,
    filters: Arc<Mutex<OrderFilters>>,
    /// Named ranges the backend accepts as `time_range` filter values.
    periods: Resource<HashMap<String, TimePeriod>>,
    save: Mutation<Order>,
    bulk: Mutation<BulkStatusUpdateResponse>,
    create: Mutation<Order>,
}

async fn fetch_page(
    service: OrderService,
    hub: NotificationHub,
    mut filters: OrderFilters,
    page: u32,
    per_page: u32,
) -> Result<PageEnvelope<Order>, ApiError> {
    filters.page = Some(page);
    filters.per_page = Some(per_page);
    service.list(&filters).await.map_err(|error| {
        hub.error(error.to_string());
        error
    })
}

impl OrdersController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        OrdersController {
            save: Mutation::new(hub.clone()),
            bulk: Mutation::new(hub.clone()),
            create: Mutation::new(hub.clone()),
            feed: FeedResource::new(DEFAULT_PER_PAGE),
            filters: Arc::new(Mutex::new(OrderFilters::default())),
            periods: Resource::new(),
            api,
            hub,
        }
    }

    /// Creates the controller, loading the first page when `auto_load` is set.
    pub async fn open(api: Api, hub: NotificationHub, auto_load: bool) -> Self {
        let controller = Self::new(api, hub);
        if auto_load {
            controller.load().await;
        }
        controller
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Loads the first page, replacing the accumulated feed.
    pub async fn load(&self) -> Option<Vec<Order>> {
        let (service, hub, filters) = self.fetch_args();
        self.feed
            .load(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Appends the next page to the feed. No-op when exhausted or when
    /// another incremental load is running.
    pub async fn load_more(&self) -> Option<Vec<Order>> {
        let (service, hub, filters) = self.fetch_args();
        self.feed
            .load_more(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Replaces the filters and reloads the feed from the top.
    pub async fn set_filters(&self, filters: OrderFilters) -> Option<Vec<Order>> {
        *self.lock_filters() = filters;
        self.load().await
    }

    /// Filters by status and reloads.
    pub async fn filter_by_status(&self, status: Option<OrderStatus>) -> Option<Vec<Order>> {
        self.lock_filters().status = status;
        self.load().await
    }

    /// Filters by a named time range ("today", "last_week", ...) and
    /// reloads. `None` drops the range filter.
    pub async fn filter_by_time_range(&self, time_range: Option<String>) -> Option<Vec<Order>> {
        self.lock_filters().time_range = time_range;
        self.load().await
    }

    /// Loads the named time ranges offered by the backend.
    pub async fn load_time_periods(&self) -> Option<HashMap<String, TimePeriod>> {
        let service = self.api.orders();
        let hub = self.hub.clone();
        self.periods
            .execute(|| async move {
                service.time_periods().await.map_err(|error| {
                    hub.error(error.to_string());
                    error
                })
            })
            .await
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Creates an order and prepends it to the feed (newest first).
    pub async fn create(&self, request: CreateOrderRequest) -> Option<Order> {
        let service = self.api.orders();
        let created = self
            .create
            .run_with(
                || async move { service.create(&request).await.map(|r| r.order) },
                MutationOptions::message("Order created."),
            )
            .await?;

        let order = created.clone();
        self.feed.update_items(|items| items.insert(0, order));
        Some(created)
    }

    /// Moves an order to `status` and replaces it in the feed.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Option<Order> {
        let service = self.api.orders();
        let updated = self
            .save
            .run_with(
                || async move { service.update_status(id, status).await },
                MutationOptions::message("Order updated."),
            )
            .await?;

        self.replace_in_feed(updated.clone());
        Some(updated)
    }

    /// Cancels an order and replaces it in the feed.
    pub async fn cancel(&self, id: i64) -> Option<Order> {
        self.update_status(id, OrderStatus::Cancelled).await
    }

    /// Moves many orders to one status; the backend's own summary line
    /// becomes the success toast. Feed entries for updated orders get the
    /// new status without a reload.
    pub async fn bulk_update_status(
        &self,
        request: BulkStatusUpdateRequest,
    ) -> Option<BulkStatusUpdateResponse> {
        let service = self.api.orders();
        let body = request.clone();
        let response = self
            .bulk
            .run_with(
                || async move { service.bulk_update_status(&body).await },
                MutationOptions::silent(),
            )
            .await?;

        self.hub.success(response.message.clone());
        let updated = response.updated_orders.clone();
        self.feed.update_items(|items| {
            for summary in &updated {
                if let Some(order) = items.iter_mut().find(|o| o.id == summary.id) {
                    order.status = summary.status;
                }
            }
        });
        Some(response)
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ResourceState<Vec<Order>> {
        self.feed.state()
    }

    pub fn pagination(&self) -> PaginationState {
        self.feed.pagination()
    }

    /// The accumulated feed, if loaded.
    pub fn items(&self) -> Option<Vec<Order>> {
        self.feed.items()
    }

    /// Whether the initial load is in flight.
    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    /// Whether an incremental load is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.feed.is_loading_more()
    }

    /// Whether pages beyond the accumulated ones exist.
    pub fn has_more_pages(&self) -> bool {
        self.feed.has_more_pages()
    }

    /// The loaded time ranges, if any.
    pub fn time_periods(&self) -> Option<HashMap<String, TimePeriod>> {
        self.periods.data()
    }

    fn fetch_args(&self) -> (OrderService, NotificationHub, OrderFilters) {
        (
            self.api.orders(),
            self.hub.clone(),
            self.lock_filters().clone(),
        )
    }

    fn replace_in_feed(&self, order: Order) {
        self.feed.update_items(|items| {
            if let Some(slot) = items.iter_mut().find(|o| o.id == order.id) {
                *slot = order;
            }
        });
    }

    fn lock_filters(&self) -> MutexGuard<'_, OrderFilters> {
        self.filters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

//! # Customers Controllers
//!
//! Two controllers share this module:
//!
//! - [`CustomersController`]: the paginated customer directory with CRUD
//!   writes, phone identification and per-customer order history.
//! - [`CustomerSearchController`]: the incremental search box used in the
//!   order-taking flow, with a minimum-length guard so one-character
//!   queries never hit the backend.

use std::sync::{Arc, Mutex, MutexGuard};

use vela_client::{Api, ApiError, CustomerService};
use vela_core::{
    CreateCustomerRequest, Customer, CustomerFilters, CustomerIdentifyRequest,
    CustomerIdentifyResponse, MessageResponse, Order, PageEnvelope, PaginationState,
    ResourceState, UpdateCustomerRequest, DEFAULT_PER_PAGE, MIN_SEARCH_LEN,
};

use crate::mutation::{Mutation, MutationOptions};
use crate::notify::NotificationHub;
use crate::paged::{FeedResource, PagedResource};
use crate::resource::Resource;

// =============================================================================
// Directory
// =============================================================================

/// Customer directory + writes.
#[derive(Debug, Clone)]
pub struct CustomersController {
    api: Api,
    hub: NotificationHub,
    list: PagedResource<Customer>,
    filters: Arc<Mutex<CustomerFilters>>,
    save: Mutation<Customer>,
    removal: Mutation<MessageResponse>,
    identify: Mutation<CustomerIdentifyResponse>,
    /// Order history of the customer currently being inspected.
    orders: Resource<Vec<Order>>,
}

async fn fetch_page(
    service: CustomerService,
    hub: NotificationHub,
    mut filters: CustomerFilters,
    page: u32,
    per_page: u32,
) -> Result<PageEnvelope<Customer>, ApiError> {
    filters.page = Some(page);
    filters.per_page = Some(per_page);
    service.list(&filters).await.map_err(|error| {
        hub.error(error.to_string());
        error
    })
}

impl CustomersController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        CustomersController {
            save: Mutation::new(hub.clone()),
            removal: Mutation::new(hub.clone()),
            identify: Mutation::new(hub.clone()),
            list: PagedResource::new(DEFAULT_PER_PAGE),
            filters: Arc::new(Mutex::new(CustomerFilters::default())),
            orders: Resource::new(),
            api,
            hub,
        }
    }

    /// Creates the controller, loading page 1 when `auto_load` is set.
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

    /// Loads page 1 under the current filters.
    pub async fn load(&self) -> Option<Vec<Customer>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .load_page(1, move |page, per_page| {
                fetch_page(service, hub, filters, page, per_page)
            })
            .await
    }

    /// Reloads the current page.
    pub async fn refresh(&self) -> Option<Vec<Customer>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .refresh(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Advances one page. No-op on the last page.
    pub async fn next_page(&self) -> Option<Vec<Customer>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .next_page(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Goes back one page. No-op on the first page.
    pub async fn prev_page(&self) -> Option<Vec<Customer>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .prev_page(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Replaces the filters and reloads from page 1.
    pub async fn set_filters(&self, filters: CustomerFilters) -> Option<Vec<Customer>> {
        *self.lock_filters() = filters;
        self.load().await
    }

    /// Loads one customer's order history.
    pub async fn load_orders(&self, customer_id: i64) -> Option<Vec<Order>> {
        let service = self.api.customers();
        let hub = self.hub.clone();
        self.orders
            .execute(|| async move {
                service.orders(customer_id).await.map_err(|error| {
                    hub.error(error.to_string());
                    error
                })
            })
            .await
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Creates a customer and appends it to the loaded page.
    pub async fn create(&self, request: CreateCustomerRequest) -> Option<Customer> {
        let service = self.api.customers();
        let created = self
            .save
            .run_with(
                || async move { service.create(&request).await },
                MutationOptions::message("Customer created."),
            )
            .await?;

        let customer = created.clone();
        self.list.update_items(|items| items.push(customer));
        Some(created)
    }

    /// Updates a customer and replaces it in the loaded page.
    pub async fn update(&self, id: i64, request: UpdateCustomerRequest) -> Option<Customer> {
        let service = self.api.customers();
        let updated = self
            .save
            .run_with(
                || async move { service.update(id, &request).await },
                MutationOptions::message("Customer updated."),
            )
            .await?;

        self.replace_in_list(updated.clone());
        Some(updated)
    }

    /// Flips the active flag and replaces the entry in the loaded page.
    pub async fn toggle_active(&self, id: i64) -> Option<Customer> {
        let service = self.api.customers();
        let updated = self
            .save
            .run_with(
                || async move { service.toggle_active(id).await },
                MutationOptions::message("Customer updated."),
            )
            .await?;

        self.replace_in_list(updated.clone());
        Some(updated)
    }

    /// Deletes a customer and drops it from the loaded page.
    pub async fn delete(&self, id: i64) -> bool {
        let service = self.api.customers();
        let deleted = self
            .removal
            .run_with(
                || async move { service.delete(id).await },
                MutationOptions::message("Customer deleted."),
            )
            .await
            .is_some();

        if deleted {
            self.list.update_items(|items| items.retain(|c| c.id != id));
        }
        deleted
    }

    /// Looks a customer up by phone, creating one on the fly if unknown.
    ///
    /// No success toast: the result feeds straight into the order flow.
    pub async fn identify(
        &self,
        request: CustomerIdentifyRequest,
    ) -> Option<CustomerIdentifyResponse> {
        let service = self.api.customers();
        self.identify
            .run_with(
                || async move { service.identify(&request).await },
                MutationOptions::silent(),
            )
            .await
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ResourceState<Vec<Customer>> {
        self.list.state()
    }

    pub fn pagination(&self) -> PaginationState {
        self.list.pagination()
    }

    pub fn items(&self) -> Option<Vec<Customer>> {
        self.list.items()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    /// The inspected customer's order history, if loaded.
    pub fn orders(&self) -> Option<Vec<Order>> {
        self.orders.data()
    }

    fn fetch_args(&self) -> (CustomerService, NotificationHub, CustomerFilters) {
        (
            self.api.customers(),
            self.hub.clone(),
            self.lock_filters().clone(),
        )
    }

    fn replace_in_list(&self, customer: Customer) {
        self.list.update_items(|items| {
            if let Some(slot) = items.iter_mut().find(|c| c.id == customer.id) {
                *slot = customer;
            }
        });
    }

    fn lock_filters(&self) -> MutexGuard<'_, CustomerFilters> {
        self.filters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// =============================================================================
// Incremental search
// =============================================================================

/// Search box state for the order-taking flow.
#[derive(Debug, Clone)]
pub struct CustomerSearchController {
    api: Api,
    hub: NotificationHub,
    results: Resource<Vec<Customer>>,
}

impl CustomerSearchController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        CustomerSearchController {
            api,
            hub,
            results: Resource::with_initial(Vec::new()),
        }
    }

    /// Runs a search, or clears the results for queries shorter than
    /// the minimum length.
    ///
    /// Sub-minimum queries are not errors: the box just shows nothing
    /// while the user is still typing. A failed search toasts once and
    /// keeps the durable error on the container.
    pub async fn search(&self, term: &str) -> Option<Vec<Customer>> {
        let term = term.trim();
        if term.chars().count() < MIN_SEARCH_LEN {
            self.results.reset();
            return None;
        }

        let service = self.api.customers();
        let hub = self.hub.clone();
        let query = term.to_string();
        self.results
            .execute(|| async move {
                service.search(&query).await.map_err(|error| {
                    hub.error(error.to_string());
                    error
                })
            })
            .await
    }

    /// Empties the result list.
    pub fn clear(&self) {
        self.results.reset();
    }

    /// The current matches.
    pub fn results(&self) -> Vec<Customer> {
        self.results.data().unwrap_or_default()
    }

    /// Whether a search is in flight.
    pub fn is_searching(&self) -> bool {
        self.results.is_loading()
    }

    /// A point-in-time copy of the result container.
    pub fn state(&self) -> ResourceState<Vec<Customer>> {
        self.results.snapshot()
    }
}

// =============================================================================
// Accumulating directory
// =============================================================================

/// Accumulating customer feed for long scrolling directories.
///
/// Unlike [`CustomerSearchController`] (one page, replaced per
/// keystroke), this keeps appending pages under a fixed term until the
/// backend runs out.
#[derive(Debug, Clone)]
pub struct CustomerDirectoryController {
    api: Api,
    hub: NotificationHub,
    feed: FeedResource<Customer>,
    filters: Arc<Mutex<CustomerFilters>>,
}

impl CustomerDirectoryController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        CustomerDirectoryController {
            feed: FeedResource::new(DEFAULT_PER_PAGE),
            filters: Arc::new(Mutex::new(CustomerFilters::default())),
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

    /// Loads the first page, replacing the accumulated feed.
    pub async fn load(&self) -> Option<Vec<Customer>> {
        let (service, hub, filters) = self.fetch_args();
        self.feed
            .load(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Appends the next page. No-op when exhausted or already loading more.
    pub async fn load_more(&self) -> Option<Vec<Customer>> {
        let (service, hub, filters) = self.fetch_args();
        self.feed
            .load_more(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Sets the search term and reloads the feed from the top.
    pub async fn search(&self, term: impl Into<String>) -> Option<Vec<Customer>> {
        let term = term.into();
        self.lock_filters().search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self.load().await
    }

    /// Replaces the filters and reloads the feed from the top.
    pub async fn set_filters(&self, filters: CustomerFilters) -> Option<Vec<Customer>> {
        *self.lock_filters() = filters;
        self.load().await
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ResourceState<Vec<Customer>> {
        self.feed.state()
    }

    pub fn pagination(&self) -> PaginationState {
        self.feed.pagination()
    }

    /// The accumulated feed, if loaded.
    pub fn items(&self) -> Option<Vec<Customer>> {
        self.feed.items()
    }

    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    pub fn is_loading_more(&self) -> bool {
        self.feed.is_loading_more()
    }

    pub fn has_more_pages(&self) -> bool {
        self.feed.has_more_pages()
    }

    fn fetch_args(&self) -> (CustomerService, NotificationHub, CustomerFilters) {
        (
            self.api.customers(),
            self.hub.clone(),
            self.lock_filters().clone(),
        )
    }

    fn lock_filters(&self) -> MutexGuard<'_, CustomerFilters> {
        self.filters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

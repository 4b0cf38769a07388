//! # Products Controller
//!
//! Paginated product list with filters, plus create/update/delete writes
//! that keep the loaded page coherent without a full reload.

use std::sync::{Arc, Mutex, MutexGuard};

use vela_client::{Api, ApiError, ProductService};
use vela_core::{
    CreateProductRequest, MessageResponse, PageEnvelope, PaginationState, Product, ProductFilters,
    ResourceState, UpdateProductRequest, DEFAULT_PER_PAGE,
};

use crate::mutation::{Mutation, MutationOptions};
use crate::notify::NotificationHub;
use crate::paged::PagedResource;

/// Product list + writes for the catalog screens.
#[derive(Debug, Clone)]
pub struct ProductsController {
    api: Api,
    hub: NotificationHub,
    list: PagedResource<Product>,
    filters: Arc<Mutex<ProductFilters>>,
    save: Mutation<Product>,
    removal: Mutation<MessageResponse>,
}

/// Fetches one page under the given filters, notifying on failure.
async fn fetch_page(
    service: ProductService,
    hub: NotificationHub,
    mut filters: ProductFilters,
    page: u32,
    per_page: u32,
) -> Result<PageEnvelope<Product>, ApiError> {
    filters.page = Some(page);
    filters.per_page = Some(per_page);
    service.list(&filters).await.map_err(|error| {
        hub.error(error.to_string());
        error
    })
}

impl ProductsController {
    /// Creates the controller without issuing any request.
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        ProductsController {
            save: Mutation::new(hub.clone()),
            removal: Mutation::new(hub.clone()),
            list: PagedResource::new(DEFAULT_PER_PAGE),
            filters: Arc::new(Mutex::new(ProductFilters::default())),
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
    pub async fn load(&self) -> Option<Vec<Product>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .load_page(1, move |page, per_page| {
                fetch_page(service, hub, filters, page, per_page)
            })
            .await
    }

    /// Reloads the current page.
    pub async fn refresh(&self) -> Option<Vec<Product>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .refresh(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Advances one page. No-op on the last page.
    pub async fn next_page(&self) -> Option<Vec<Product>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .next_page(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Goes back one page. No-op on the first page.
    pub async fn prev_page(&self) -> Option<Vec<Product>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .prev_page(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Jumps to a page. Out-of-range targets are silent no-ops.
    pub async fn go_to_page(&self, page: u32) -> Option<Vec<Product>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .go_to_page(page, move |p, per_page| {
                fetch_page(service, hub, filters, p, per_page)
            })
            .await
    }

    /// Changes the page size and reloads from page 1.
    pub async fn change_per_page(&self, per_page: u32) -> Option<Vec<Product>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .change_per_page(per_page, move |page, pp| {
                fetch_page(service, hub, filters, page, pp)
            })
            .await
    }

    /// Replaces the filters and reloads from page 1.
    pub async fn set_filters(&self, filters: ProductFilters) -> Option<Vec<Product>> {
        *self.lock_filters() = filters;
        self.load().await
    }

    /// Filters by search term and reloads.
    pub async fn search(&self, term: impl Into<String>) -> Option<Vec<Product>> {
        self.lock_filters().search = Some(term.into());
        self.load().await
    }

    /// Filters by category and reloads.
    pub async fn filter_by_category(&self, category_id: Option<i64>) -> Option<Vec<Product>> {
        self.lock_filters().category_id = category_id;
        self.load().await
    }

    // -------------------------------------------------------------------------
    // Writes (each shows exactly one outcome toast)
    // -------------------------------------------------------------------------

    /// Creates a product and appends it to the loaded page.
    pub async fn create(&self, request: CreateProductRequest) -> Option<Product> {
        let service = self.api.products();
        let created = self
            .save
            .run_with(
                || async move { service.create(&request).await },
                MutationOptions::message("Product created."),
            )
            .await?;

        let product = created.clone();
        self.list.update_items(|items| items.push(product));
        Some(created)
    }

    /// Updates a product and replaces it in the loaded page.
    pub async fn update(&self, id: i64, request: UpdateProductRequest) -> Option<Product> {
        let service = self.api.products();
        let updated = self
            .save
            .run_with(
                || async move { service.update(id, &request).await },
                MutationOptions::message("Product updated."),
            )
            .await?;

        self.replace_in_list(updated.clone());
        Some(updated)
    }

    /// Flips the active flag and replaces the entry in the loaded page.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Option<Product> {
        self.update(id, UpdateProductRequest::set_active(is_active))
            .await
    }

    /// Adjusts the stock level and replaces the entry in the loaded page.
    pub async fn set_stock(&self, id: i64, stock_quantity: i64) -> Option<Product> {
        self.update(id, UpdateProductRequest::set_stock(stock_quantity))
            .await
    }

    /// Deletes a product and drops it from the loaded page.
    pub async fn delete(&self, id: i64) -> bool {
        let service = self.api.products();
        let deleted = self
            .removal
            .run_with(
                || async move { service.delete(id).await },
                MutationOptions::message("Product deleted."),
            )
            .await
            .is_some();

        if deleted {
            self.list.update_items(|items| items.retain(|p| p.id != id));
        }
        deleted
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// A point-in-time copy of the list container.
    pub fn state(&self) -> ResourceState<Vec<Product>> {
        self.list.state()
    }

    /// A point-in-time copy of the pagination bookkeeping.
    pub fn pagination(&self) -> PaginationState {
        self.list.pagination()
    }

    /// Clones the loaded items, if any.
    pub fn items(&self) -> Option<Vec<Product>> {
        self.list.items()
    }

    /// Whether a list load is in flight.
    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    /// Whether a write is in flight.
    pub fn is_saving(&self) -> bool {
        self.save.is_loading() || self.removal.is_loading()
    }

    /// The current filter set.
    pub fn filters(&self) -> ProductFilters {
        self.lock_filters().clone()
    }

    fn fetch_args(&self) -> (ProductService, NotificationHub, ProductFilters) {
        (self.api.products(), self.hub.clone(), self.filters())
    }

    fn replace_in_list(&self, product: Product) {
        self.list.update_items(|items| {
            if let Some(slot) = items.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
        });
    }

    fn lock_filters(&self) -> MutexGuard<'_, ProductFilters> {
        self.filters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

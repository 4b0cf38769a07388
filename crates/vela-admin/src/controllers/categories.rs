//! # Categories Controller
//!
//! Paginated category list plus CRUD writes. Also exposes the flat
//! active-category list the product form's dropdown needs.

use std::sync::{Arc, Mutex, MutexGuard};

use vela_client::{Api, ApiError, CategoryService};
use vela_core::{
    Category, CategoryFilters, CreateCategoryRequest, MessageResponse, PageEnvelope,
    PaginationState, ResourceState, UpdateCategoryRequest, DEFAULT_PER_PAGE,
};

use crate::mutation::{Mutation, MutationOptions};
use crate::notify::NotificationHub;
use crate::paged::PagedResource;
use crate::resource::Resource;

/// Category list + writes for the catalog screens.
#[derive(Debug, Clone)]
pub struct CategoriesController {
    api: Api,
    hub: NotificationHub,
    list: PagedResource<Category>,
    /// Flat list of active categories for selection dropdowns.
    options: Resource<Vec<Category>>,
    filters: Arc<Mutex<CategoryFilters>>,
    save: Mutation<Category>,
    removal: Mutation<MessageResponse>,
}

async fn fetch_page(
    service: CategoryService,
    hub: NotificationHub,
    mut filters: CategoryFilters,
    page: u32,
    per_page: u32,
) -> Result<PageEnvelope<Category>, ApiError> {
    filters.page = Some(page);
    filters.per_page = Some(per_page);
    service.list(&filters).await.map_err(|error| {
        hub.error(error.to_string());
        error
    })
}

impl CategoriesController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        CategoriesController {
            save: Mutation::new(hub.clone()),
            removal: Mutation::new(hub.clone()),
            list: PagedResource::new(DEFAULT_PER_PAGE),
            options: Resource::new(),
            filters: Arc::new(Mutex::new(CategoryFilters::default())),
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
    pub async fn load(&self) -> Option<Vec<Category>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .load_page(1, move |page, per_page| {
                fetch_page(service, hub, filters, page, per_page)
            })
            .await
    }

    /// Reloads the current page.
    pub async fn refresh(&self) -> Option<Vec<Category>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .refresh(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Jumps to a page. Out-of-range targets are silent no-ops.
    pub async fn go_to_page(&self, page: u32) -> Option<Vec<Category>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .go_to_page(page, move |p, per_page| {
                fetch_page(service, hub, filters, p, per_page)
            })
            .await
    }

    /// Replaces the filters and reloads from page 1.
    pub async fn set_filters(&self, filters: CategoryFilters) -> Option<Vec<Category>> {
        *self.lock_filters() = filters;
        self.load().await
    }

    /// Loads the flat active-category list for dropdowns.
    pub async fn load_options(&self) -> Option<Vec<Category>> {
        let service = self.api.categories();
        self.options
            .execute(|| async move { service.all_active().await })
            .await
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Creates a category and appends it to the loaded page.
    pub async fn create(&self, request: CreateCategoryRequest) -> Option<Category> {
        let service = self.api.categories();
        let created = self
            .save
            .run_with(
                || async move { service.create(&request).await },
                MutationOptions::message("Category created."),
            )
            .await?;

        let category = created.clone();
        self.list.update_items(|items| items.push(category));
        Some(created)
    }

    /// Updates a category and replaces it in the loaded page.
    pub async fn update(&self, id: i64, request: UpdateCategoryRequest) -> Option<Category> {
        let service = self.api.categories();
        let updated = self
            .save
            .run_with(
                || async move { service.update(id, &request).await },
                MutationOptions::message("Category updated."),
            )
            .await?;

        let category = updated.clone();
        self.list.update_items(|items| {
            if let Some(slot) = items.iter_mut().find(|c| c.id == category.id) {
                *slot = category;
            }
        });
        Some(updated)
    }

    /// Deletes a category and drops it from the loaded page.
    pub async fn delete(&self, id: i64) -> bool {
        let service = self.api.categories();
        let deleted = self
            .removal
            .run_with(
                || async move { service.delete(id).await },
                MutationOptions::message("Category deleted."),
            )
            .await
            .is_some();

        if deleted {
            self.list.update_items(|items| items.retain(|c| c.id != id));
        }
        deleted
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ResourceState<Vec<Category>> {
        self.list.state()
    }

    pub fn pagination(&self) -> PaginationState {
        self.list.pagination()
    }

    pub fn items(&self) -> Option<Vec<Category>> {
        self.list.items()
    }

    /// The flat active-category list, if loaded.
    pub fn options(&self) -> Option<Vec<Category>> {
        self.options.data()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    fn fetch_args(&self) -> (CategoryService, NotificationHub, CategoryFilters) {
        (
            self.api.categories(),
            self.hub.clone(),
            self.lock_filters().clone(),
        )
    }

    fn lock_filters(&self) -> MutexGuard<'_, CategoryFilters> {
        self.filters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

//! # Users Controller
//!
//! Staff account management. Same list/write pattern as the catalog
//! controllers; role checks stay server-side, a 403 surfaces as a toast
//! like any other failure.

use std::sync::{Arc, Mutex, MutexGuard};

use vela_client::{Api, ApiError, UserService};
use vela_core::{
    CreateUserRequest, MessageResponse, PageEnvelope, PaginationState, ResourceState, Role,
    UpdateUserRequest, User, UserFilters, DEFAULT_PER_PAGE,
};

use crate::mutation::{Mutation, MutationOptions};
use crate::notify::NotificationHub;
use crate::paged::PagedResource;

/// User account list + writes.
#[derive(Debug, Clone)]
pub struct UsersController {
    api: Api,
    hub: NotificationHub,
    list: PagedResource<User>,
    filters: Arc<Mutex<UserFilters>>,
    save: Mutation<User>,
    removal: Mutation<MessageResponse>,
}

async fn fetch_page(
    service: UserService,
    hub: NotificationHub,
    mut filters: UserFilters,
    page: u32,
    per_page: u32,
) -> Result<PageEnvelope<User>, ApiError> {
    filters.page = Some(page);
    filters.per_page = Some(per_page);
    service.list(&filters).await.map_err(|error| {
        hub.error(error.to_string());
        error
    })
}

impl UsersController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        UsersController {
            save: Mutation::new(hub.clone()),
            removal: Mutation::new(hub.clone()),
            list: PagedResource::new(DEFAULT_PER_PAGE),
            filters: Arc::new(Mutex::new(UserFilters::default())),
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
    pub async fn load(&self) -> Option<Vec<User>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .load_page(1, move |page, per_page| {
                fetch_page(service, hub, filters, page, per_page)
            })
            .await
    }

    /// Reloads the current page.
    pub async fn refresh(&self) -> Option<Vec<User>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .refresh(move |page, per_page| fetch_page(service, hub, filters, page, per_page))
            .await
    }

    /// Jumps to a page. Out-of-range targets are silent no-ops.
    pub async fn go_to_page(&self, page: u32) -> Option<Vec<User>> {
        let (service, hub, filters) = self.fetch_args();
        self.list
            .go_to_page(page, move |p, per_page| {
                fetch_page(service, hub, filters, p, per_page)
            })
            .await
    }

    /// Filters by role and reloads from page 1.
    pub async fn filter_by_role(&self, role: Option<Role>) -> Option<Vec<User>> {
        self.lock_filters().role = role;
        self.load().await
    }

    /// Replaces the filters and reloads from page 1.
    pub async fn set_filters(&self, filters: UserFilters) -> Option<Vec<User>> {
        *self.lock_filters() = filters;
        self.load().await
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Creates a user account and appends it to the loaded page.
    pub async fn create(&self, request: CreateUserRequest) -> Option<User> {
        let service = self.api.users();
        let created = self
            .save
            .run_with(
                || async move { service.create(&request).await },
                MutationOptions::message("User created."),
            )
            .await?;

        let user = created.clone();
        self.list.update_items(|items| items.push(user));
        Some(created)
    }

    /// Updates a user account and replaces it in the loaded page.
    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> Option<User> {
        let service = self.api.users();
        let updated = self
            .save
            .run_with(
                || async move { service.update(id, &request).await },
                MutationOptions::message("User updated."),
            )
            .await?;

        let user = updated.clone();
        self.list.update_items(|items| {
            if let Some(slot) = items.iter_mut().find(|u| u.id == user.id) {
                *slot = user;
            }
        });
        Some(updated)
    }

    /// Deletes a user account and drops it from the loaded page.
    pub async fn delete(&self, id: i64) -> bool {
        let service = self.api.users();
        let deleted = self
            .removal
            .run_with(
                || async move { service.delete(id).await },
                MutationOptions::message("User deleted."),
            )
            .await
            .is_some();

        if deleted {
            self.list.update_items(|items| items.retain(|u| u.id != id));
        }
        deleted
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ResourceState<Vec<User>> {
        self.list.state()
    }

    pub fn pagination(&self) -> PaginationState {
        self.list.pagination()
    }

    pub fn items(&self) -> Option<Vec<User>> {
        self.list.items()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    fn fetch_args(&self) -> (UserService, NotificationHub, UserFilters) {
        (
            self.api.users(),
            self.hub.clone(),
            self.lock_filters().clone(),
        )
    }

    fn lock_filters(&self) -> MutexGuard<'_, UserFilters> {
        self.filters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

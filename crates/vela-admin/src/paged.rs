//! # Paginated Resources
//!
//! Two wrappers over [`Resource`] for list endpoints:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PagedResource  - classic page navigation (tables)                      │
//! │                                                                         │
//! │    load_page(3) ──► items = page 3 only                                 │
//! │    next/prev/go_to_page: silent no-ops at the edges                     │
//! │    change_per_page: rewinds to page 1 and reloads                       │
//! │                                                                         │
//! │  FeedResource   - accumulating "load more" (feeds)                      │
//! │                                                                         │
//! │    load()      ──► items = page 1            (replaces)                 │
//! │    load_more() ──► items += next page        (appends, in order)        │
//! │    guarded by is_loading_more, separate from is_loading so the          │
//! │    initial spinner and the bottom-of-list spinner can differ            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both take the fetch function per call as `(page, per_page) -> envelope`;
//! controllers pass a closure capturing their service and current filters.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use vela_core::{FeedBuffer, PageEnvelope, PaginationState, ResourceState};

use crate::resource::Resource;

// =============================================================================
// Page navigation
// =============================================================================

/// A list container with page navigation bookkeeping.
#[derive(Debug)]
pub struct PagedResource<T> {
    resource: Resource<Vec<T>>,
    pagination: Arc<Mutex<PaginationState>>,
}

impl<T> Clone for PagedResource<T> {
    fn clone(&self) -> Self {
        PagedResource {
            resource: self.resource.clone(),
            pagination: Arc::clone(&self.pagination),
        }
    }
}

impl<T: Clone> PagedResource<T> {
    /// Creates an empty paged list with the given page size.
    pub fn new(per_page: u32) -> Self {
        PagedResource {
            resource: Resource::new(),
            pagination: Arc::new(Mutex::new(PaginationState::new(per_page))),
        }
    }

    /// Loads one page, replacing the item list on success.
    ///
    /// The target page is recorded before the fetch; the envelope then
    /// confirms or re-clamps it. Previous items stay visible while the
    /// load is in flight.
    pub async fn load_page<F, Fut, E>(&self, page: u32, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        let per_page = {
            let mut pagination = self.lock_pagination();
            pagination.record_page(page);
            pagination.per_page()
        };

        let generation = self.resource.begin(false);
        match loader(page.max(1), per_page).await {
            Ok(envelope) => {
                if !self.resource.complete_ok(generation, envelope.data.clone()) {
                    return None;
                }
                let mut pagination = self.lock_pagination();
                pagination.record_page(envelope.current_page);
                pagination.apply_envelope(envelope.last_page, envelope.total);
                Some(envelope.data)
            }
            Err(error) => {
                self.resource.complete_err(generation, &error.to_string());
                None
            }
        }
    }

    /// Loads the page after the current one. No-op on the last page.
    pub async fn next_page<F, Fut, E>(&self, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        let target = {
            let pagination = self.lock_pagination();
            if !pagination.has_next() {
                return None;
            }
            pagination.current_page() + 1
        };
        self.load_page(target, loader).await
    }

    /// Loads the page before the current one. No-op on the first page.
    pub async fn prev_page<F, Fut, E>(&self, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        let target = {
            let pagination = self.lock_pagination();
            if !pagination.has_prev() {
                return None;
            }
            pagination.current_page() - 1
        };
        self.load_page(target, loader).await
    }

    /// Jumps to an arbitrary page. Out-of-range targets are silent no-ops.
    pub async fn go_to_page<F, Fut, E>(&self, page: u32, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        if !self.lock_pagination().in_range(page) {
            return None;
        }
        self.load_page(page, loader).await
    }

    /// Reloads the current page.
    pub async fn refresh<F, Fut, E>(&self, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        let current = self.lock_pagination().current_page();
        self.load_page(current, loader).await
    }

    /// Changes the page size and reloads from page 1.
    ///
    /// A zero page size is rejected as a silent no-op.
    pub async fn change_per_page<F, Fut, E>(&self, per_page: u32, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        if !self.lock_pagination().set_per_page(per_page) {
            return None;
        }
        self.load_page(1, loader).await
    }

    // -------------------------------------------------------------------------
    // Views and list coherence
    // -------------------------------------------------------------------------

    /// A point-in-time copy of the container.
    pub fn state(&self) -> ResourceState<Vec<T>> {
        self.resource.snapshot()
    }

    /// A point-in-time copy of the pagination bookkeeping.
    pub fn pagination(&self) -> PaginationState {
        self.lock_pagination().clone()
    }

    /// Clones the current items, if loaded.
    pub fn items(&self) -> Option<Vec<T>> {
        self.resource.data()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.resource.is_loading()
    }

    /// The durable error message, if the last load failed.
    pub fn error(&self) -> Option<String> {
        self.resource.error()
    }

    /// Splices the loaded items in place (after create/update/delete),
    /// avoiding a full reload.
    pub fn update_items<F>(&self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        self.resource.update_data(f);
    }

    fn lock_pagination(&self) -> MutexGuard<'_, PaginationState> {
        self.pagination
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// =============================================================================
// Feed accumulation
// =============================================================================

/// An accumulating list container for "load more" flows.
///
/// The accumulation bookkeeping lives in the core [`FeedBuffer`]; this
/// wrapper adds the async loading state, the durable error and the
/// `is_loading_more` guard. The buffer is the authority for items and
/// pagination; the resource mirrors its items for snapshots.
#[derive(Debug)]
pub struct FeedResource<T> {
    resource: Resource<Vec<T>>,
    buffer: Arc<Mutex<FeedBuffer<T>>>,
    is_loading_more: Arc<AtomicBool>,
}

impl<T> Clone for FeedResource<T> {
    fn clone(&self) -> Self {
        FeedResource {
            resource: self.resource.clone(),
            buffer: Arc::clone(&self.buffer),
            is_loading_more: Arc::clone(&self.is_loading_more),
        }
    }
}

impl<T: Clone> FeedResource<T> {
    /// Creates an empty feed with the given page size.
    pub fn new(per_page: u32) -> Self {
        FeedResource {
            resource: Resource::new(),
            buffer: Arc::new(Mutex::new(FeedBuffer::new(per_page))),
            is_loading_more: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Loads page 1, replacing the accumulated items on success.
    pub async fn load<F, Fut, E>(&self, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        let per_page = self.lock_buffer().pagination().per_page();
        let generation = self.resource.begin(false);
        match loader(1, per_page).await {
            Ok(envelope) => {
                if !self.resource.complete_ok(generation, envelope.data.clone()) {
                    return None;
                }
                let page_items = envelope.data.clone();
                self.lock_buffer().apply(envelope, true);
                Some(page_items)
            }
            Err(error) => {
                self.resource.complete_err(generation, &error.to_string());
                None
            }
        }
    }

    /// Appends the next page to the accumulated items.
    ///
    /// No-op when no more pages exist or another `load_more` is already
    /// in flight. Uses the dedicated `is_loading_more` flag so the
    /// initial-load spinner stays untouched.
    pub async fn load_more<F, Fut, E>(&self, loader: F) -> Option<Vec<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>, E>>,
        E: Display,
    {
        if self.is_loading_more.swap(true, Ordering::SeqCst) {
            // Another incremental load is already running
            return None;
        }

        let target = {
            let buffer = self.lock_buffer();
            if !buffer.has_more_pages() {
                drop(buffer);
                self.is_loading_more.store(false, Ordering::SeqCst);
                return None;
            }
            (buffer.next_page(), buffer.pagination().per_page())
        };

        let result = loader(target.0, target.1).await;
        self.is_loading_more.store(false, Ordering::SeqCst);

        match result {
            Ok(envelope) => {
                let page_items = envelope.data.clone();
                let accumulated = {
                    let mut buffer = self.lock_buffer();
                    buffer.apply(envelope, false);
                    buffer.items().to_vec()
                };
                self.resource.update_data(|items| *items = accumulated);
                Some(page_items)
            }
            Err(error) => {
                self.resource.fail(&error.to_string());
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// A point-in-time copy of the container.
    pub fn state(&self) -> ResourceState<Vec<T>> {
        self.resource.snapshot()
    }

    /// A point-in-time copy of the pagination bookkeeping.
    pub fn pagination(&self) -> PaginationState {
        self.lock_buffer().pagination().clone()
    }

    /// Clones the accumulated items, if loaded.
    pub fn items(&self) -> Option<Vec<T>> {
        self.resource.data()
    }

    /// Whether the initial load is in flight.
    pub fn is_loading(&self) -> bool {
        self.resource.is_loading()
    }

    /// Whether an incremental load is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more.load(Ordering::SeqCst)
    }

    /// Whether pages beyond the accumulated ones exist.
    pub fn has_more_pages(&self) -> bool {
        self.lock_buffer().has_more_pages()
    }

    /// The durable error message, if the last load failed.
    pub fn error(&self) -> Option<String> {
        self.resource.error()
    }

    /// Splices the accumulated items in place, no-op before the first load.
    pub fn update_items<F>(&self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        if !self.resource.has_data() {
            return;
        }
        let spliced = {
            let mut buffer = self.lock_buffer();
            buffer.update_items(f);
            buffer.items().to_vec()
        };
        self.resource.update_data(|items| *items = spliced);
    }

    fn lock_buffer(&self) -> MutexGuard<'_, FeedBuffer<T>> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Pagination State & Envelopes
//!
//! Bookkeeping for paginated list endpoints.
//!
//! ## How List Endpoints Paginate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pagination Data Flow                                 │
//! │                                                                         │
//! │  GET /products?page=2&per_page=20                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │ PageEnvelope (backend response)          │                          │
//! │  │   data: [ 20 items ]                     │                          │
//! │  │   current_page: 2                        │                          │
//! │  │   last_page: 5      ──► total_pages      │                          │
//! │  │   total: 95         ──► total            │                          │
//! │  └──────────────────────────────────────────┘                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaginationState { current_page: 2, per_page: 20,                      │
//! │                    total_pages: 5, total: 95 }                         │
//! │                                                                         │
//! │  Derived: has_next=true  has_prev=true  from=21  to=40                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Out-of-range navigation is a silent no-op, never an error: the UI asks
//! `in_range` before loading and simply does nothing at the edges.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_PER_PAGE;

// =============================================================================
// Page Envelope
// =============================================================================

/// The list-endpoint response wrapper carrying items plus pagination metadata.
///
/// Only `data`, `last_page` and `total` feed the local bookkeeping; the
/// remaining fields are carried for completeness and TS bindings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageEnvelope<T> {
    /// Items on this page.
    pub data: Vec<T>,

    /// Page number the backend says this is.
    pub current_page: u32,

    /// Highest page number available.
    pub last_page: u32,

    /// Page size the backend applied.
    pub per_page: u32,

    /// Total items across all pages.
    pub total: u64,

    /// 1-based index of the first item on this page (None when empty).
    #[serde(default)]
    pub from: Option<u64>,

    /// 1-based index of the last item on this page (None when empty).
    #[serde(default)]
    pub to: Option<u64>,
}

impl<T> PageEnvelope<T> {
    /// Whether pages beyond this one exist.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

// =============================================================================
// Pagination State
// =============================================================================

/// Local pagination bookkeeping for one list endpoint.
///
/// ## Invariants
/// - `current_page >= 1`
/// - `per_page >= 1`
/// - `current_page <= max(total_pages, 1)` after an envelope is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PaginationState {
    current_page: u32,
    per_page: u32,
    total_pages: u32,
    total: u64,
}

impl PaginationState {
    /// Creates pagination state for a given page size.
    ///
    /// A zero `per_page` is coerced to 1 to uphold the invariant.
    pub fn new(per_page: u32) -> Self {
        PaginationState {
            current_page: 1,
            per_page: per_page.max(1),
            total_pages: 0,
            total: 0,
        }
    }

    /// The page currently displayed (1-based).
    #[inline]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Items per page.
    #[inline]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Total pages reported by the last envelope (0 before any load).
    #[inline]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total items reported by the last envelope.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether a next page exists.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether a previous page exists.
    #[inline]
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// 1-based index of the first item on the current page, clipped to total.
    ///
    /// Returns 0 when the list is empty.
    pub fn from(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let start = (self.current_page as u64 - 1) * self.per_page as u64 + 1;
        start.min(self.total)
    }

    /// 1-based index of the last item on the current page, clipped to total.
    pub fn to(&self) -> u64 {
        (self.current_page as u64 * self.per_page as u64).min(self.total)
    }

    /// Whether `page` is a valid navigation target.
    pub fn in_range(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Records the page a load was issued for (used by `load_page`).
    ///
    /// Unguarded by design: the backend clamps out-of-range requests and
    /// the following envelope re-clamps local state.
    pub fn record_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Advances to the next page (used by feed accumulation).
    pub fn advance(&mut self) {
        self.current_page += 1;
    }

    /// Copies the totals a page envelope reported.
    ///
    /// Re-clamps `current_page` so the invariant
    /// `current_page <= max(total_pages, 1)` holds even if the backend
    /// shrank between loads.
    pub fn apply_envelope(&mut self, last_page: u32, total: u64) {
        self.total_pages = last_page;
        self.total = total;
        self.current_page = self.current_page.min(self.total_pages.max(1));
    }

    /// Updates the page size. Returns false (and changes nothing) for 0.
    ///
    /// A successful change rewinds to page 1; the caller reloads from there.
    pub fn set_per_page(&mut self, per_page: u32) -> bool {
        if per_page == 0 {
            return false;
        }
        self.per_page = per_page;
        self.current_page = 1;
        true
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState::new(DEFAULT_PER_PAGE)
    }
}

// =============================================================================
// Feed Buffer (accumulating variant)
// =============================================================================

/// Accumulating list buffer for "load more" flows.
///
/// ## Behaviour
/// - `apply(envelope, reset=true)` replaces the item list (fresh search)
/// - `apply(envelope, reset=false)` appends the page's items in request
///   order and keeps `current_page` at the page the envelope reported
///
/// The in-flight guard (`is_loading_more`) lives in the async layer, not
/// here: this buffer is pure bookkeeping.
#[derive(Debug, Clone)]
pub struct FeedBuffer<T> {
    items: Vec<T>,
    pagination: PaginationState,
}

impl<T> FeedBuffer<T> {
    /// Creates an empty buffer for a given page size.
    pub fn new(per_page: u32) -> Self {
        FeedBuffer {
            items: Vec::new(),
            pagination: PaginationState::new(per_page),
        }
    }

    /// Folds a page envelope into the buffer.
    pub fn apply(&mut self, envelope: PageEnvelope<T>, reset: bool) {
        if reset {
            self.items = envelope.data;
        } else {
            self.items.extend(envelope.data);
        }
        self.pagination.record_page(envelope.current_page);
        self.pagination
            .apply_envelope(envelope.last_page, envelope.total);
    }

    /// Splices the accumulated items in place (after create/update/delete).
    ///
    /// Pagination totals are left alone: the backend's `total` is only
    /// trusted from envelopes, not recomputed locally.
    pub fn update_items<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        f(&mut self.items);
    }

    /// Drops all items and rewinds to page 1, keeping the page size.
    pub fn clear(&mut self) {
        self.items.clear();
        let per_page = self.pagination.per_page();
        self.pagination = PaginationState::new(per_page);
    }

    /// Whether pages beyond the accumulated ones exist.
    #[inline]
    pub fn has_more_pages(&self) -> bool {
        self.pagination.has_next()
    }

    /// The page to request for the next `load_more` call.
    #[inline]
    pub fn next_page(&self) -> u32 {
        self.pagination.current_page() + 1
    }

    /// All accumulated items, in request order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The underlying pagination bookkeeping.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Number of accumulated items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for FeedBuffer<T> {
    fn default() -> Self {
        FeedBuffer::new(DEFAULT_PER_PAGE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(page: u32, per_page: u32, total: u64) -> PageEnvelope<u64> {
        let last_page = ((total + per_page as u64 - 1) / per_page as u64) as u32;
        let start = (page as u64 - 1) * per_page as u64;
        let end = (start + per_page as u64).min(total);
        PageEnvelope {
            data: (start..end).collect(),
            current_page: page,
            last_page,
            per_page,
            total,
            from: Some(start + 1),
            to: Some(end),
        }
    }

    #[test]
    fn test_95_items_at_20_per_page_is_5_pages() {
        let mut p = PaginationState::new(20);
        p.apply_envelope(5, 95);
        assert_eq!(p.total_pages(), 5);
        assert_eq!(p.total(), 95);
    }

    #[test]
    fn test_out_of_range_pages_are_rejected() {
        let mut p = PaginationState::new(20);
        p.apply_envelope(5, 95);

        assert!(!p.in_range(0));
        assert!(!p.in_range(6));
        assert!(p.in_range(1));
        assert!(p.in_range(5));
    }

    #[test]
    fn test_no_next_on_last_page() {
        let mut p = PaginationState::new(20);
        p.record_page(5);
        p.apply_envelope(5, 95);
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn test_from_to_clipped_to_total() {
        let mut p = PaginationState::new(20);
        p.record_page(5);
        p.apply_envelope(5, 95);
        // Page 5 of 95 at 20/page holds items 81..=95
        assert_eq!(p.from(), 81);
        assert_eq!(p.to(), 95);
    }

    #[test]
    fn test_from_is_zero_for_empty_list() {
        let mut p = PaginationState::new(20);
        p.apply_envelope(0, 0);
        assert_eq!(p.from(), 0);
        assert_eq!(p.to(), 0);
    }

    #[test]
    fn test_apply_envelope_reclamps_current_page() {
        let mut p = PaginationState::new(20);
        p.record_page(5);
        p.apply_envelope(5, 95);
        // Backend shrank between loads
        p.apply_envelope(3, 44);
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_set_per_page_rewinds_and_rejects_zero() {
        let mut p = PaginationState::new(20);
        p.record_page(4);
        p.apply_envelope(5, 95);

        assert!(!p.set_per_page(0));
        assert_eq!(p.per_page(), 20);
        assert_eq!(p.current_page(), 4);

        assert!(p.set_per_page(50));
        assert_eq!(p.per_page(), 50);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_feed_accumulates_in_request_order() {
        let mut feed: FeedBuffer<u64> = FeedBuffer::new(20);

        feed.apply(envelope(1, 20, 95), true);
        feed.apply(envelope(2, 20, 95), false);
        feed.apply(envelope(3, 20, 95), false);

        assert_eq!(feed.len(), 60);
        assert!(feed.has_more_pages());
        // Items arrive in request order with no duplicates
        let expected: Vec<u64> = (0..60).collect();
        assert_eq!(feed.items(), expected.as_slice());
    }

    #[test]
    fn test_feed_exhausts_on_last_page() {
        let mut feed: FeedBuffer<u64> = FeedBuffer::new(20);
        feed.apply(envelope(1, 20, 95), true);
        for page in 2..=5 {
            assert!(feed.has_more_pages());
            assert_eq!(feed.next_page(), page);
            feed.apply(envelope(page, 20, 95), false);
        }
        assert_eq!(feed.len(), 95);
        assert!(!feed.has_more_pages());
    }

    #[test]
    fn test_feed_reset_replaces_items() {
        let mut feed: FeedBuffer<u64> = FeedBuffer::new(20);
        feed.apply(envelope(1, 20, 95), true);
        feed.apply(envelope(2, 20, 95), false);
        assert_eq!(feed.len(), 40);

        // A reset load starts over from page 1
        feed.apply(envelope(1, 20, 95), true);
        assert_eq!(feed.len(), 20);
        assert_eq!(feed.pagination().current_page(), 1);
    }

    #[test]
    fn test_feed_update_items_splices_in_place() {
        let mut feed: FeedBuffer<u64> = FeedBuffer::new(20);
        feed.apply(envelope(1, 20, 95), true);

        feed.update_items(|items| {
            items.insert(0, 999);
            items.retain(|&v| v != 5);
        });

        assert_eq!(feed.items()[0], 999);
        assert!(!feed.items().contains(&5));
        // Totals still reflect the last envelope
        assert_eq!(feed.pagination().total(), 95);
    }

    #[test]
    fn test_feed_clear() {
        let mut feed: FeedBuffer<u64> = FeedBuffer::new(20);
        feed.apply(envelope(1, 20, 95), true);
        feed.clear();
        assert!(feed.is_empty());
        assert_eq!(feed.pagination().per_page(), 20);
        assert!(!feed.has_more_pages());
    }

    #[test]
    fn test_envelope_has_more() {
        assert!(envelope(1, 20, 95).has_more());
        assert!(!envelope(5, 20, 95).has_more());
    }
}

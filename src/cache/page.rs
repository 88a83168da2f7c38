//! Pagination Envelope Module
//!
//! The generic envelope returned by every paginated listing, plus the key
//! type the cache indexes envelopes by.

use serde::Serialize;

// == Page Key ==
/// Cache key for a stored envelope. The entity kind is implicit: each kind
/// owns its own `PageCache` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    /// 1-based page number
    pub page_number: u32,
    /// Items per page
    pub page_size: u32,
}

// == Page Envelope ==
/// One page of results together with the pagination arithmetic the client
/// needs to render paging controls.
///
/// Invariant: `items.len() == min(page_size, max(0, total_count -
/// (page_number - 1) * page_size))`, with items ordered by entity id
/// ascending. The item slice is supplied by the store; the derived fields
/// are computed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    /// The page-sized slice of items
    pub items: Vec<T>,
    /// Total items across all pages
    pub total_count: u64,
    /// 1-based page number this envelope describes
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
    /// ceil(total_count / page_size)
    pub total_pages: u32,
    /// True when a later page exists
    pub has_next_page: bool,
    /// True when an earlier page exists
    pub has_previous_page: bool,
}

impl<T> PageEnvelope<T> {
    // == Constructor ==
    /// Builds an envelope from a page slice and the total count, deriving
    /// `total_pages` and the navigation flags.
    ///
    /// A page number beyond `total_pages` is not an error: the caller passes
    /// the (empty) slice the store produced and the flags come out correct.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = total_count.div_ceil(page_size as u64) as u32;

        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_next_page: page_number < total_pages,
            has_previous_page: page_number > 1,
        }
    }

    /// The expected item count for this envelope's parameters.
    pub fn expected_len(&self) -> usize {
        let skipped = (self.page_number as u64 - 1) * self.page_size as u64;
        let remaining = self.total_count.saturating_sub(skipped);
        remaining.min(self.page_size as u64) as usize
    }
}

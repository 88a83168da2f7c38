//! Pagination Cache Module
//!
//! Provides an in-memory, per-entity-kind cache for precomputed pagination
//! envelopes with TTL expiration, idempotent invalidation and a generation
//! stamp guarding against stale repopulation.

mod entry;
mod page;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CachedEnvelope;
pub use page::{PageEnvelope, PageKey};
pub use store::PageCache;

// == Public Constants ==
/// Largest page size accepted at the API boundary
pub const MAX_PAGE_SIZE: u32 = 100;

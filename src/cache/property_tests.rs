//! Property-Based Tests for the Pagination Cache
//!
//! Uses proptest to verify the envelope arithmetic invariant and the
//! cache's generation-stamp behavior over arbitrary operation sequences.

use proptest::prelude::*;

use crate::cache::{PageCache, PageEnvelope};

// == Strategies ==
/// Generates a total item count, including the empty-store case.
fn total_count_strategy() -> impl Strategy<Value = u64> {
    0u64..500
}

/// Generates page parameters within the API bounds, deliberately allowing
/// page numbers far past the final page.
fn page_params_strategy() -> impl Strategy<Value = (u32, u32)> {
    (1u32..200, 1u32..=100)
}

/// Builds the page slice the store would return for ids 1..=total.
fn page_slice(total: u64, page_number: u32, page_size: u32) -> Vec<u64> {
    let skip = (page_number as u64 - 1) * page_size as u64;
    (1..=total).skip(skip as usize).take(page_size as usize).collect()
}

/// A sequence of cache operations for the generation-stamp property.
#[derive(Debug, Clone)]
enum CacheOp {
    /// Snapshot the generation, then store under that snapshot
    StoreFresh { total: u64 },
    /// Snapshot the generation, invalidate, then attempt the store
    StoreStale { total: u64 },
    Lookup,
    Invalidate,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        total_count_strategy().prop_map(|total| CacheOp::StoreFresh { total }),
        total_count_strategy().prop_map(|total| CacheOp::StoreStale { total }),
        Just(CacheOp::Lookup),
        Just(CacheOp::Invalidate),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any total count and valid page parameters, the envelope item
    // count equals min(page_size, max(0, total - (page_number-1)*page_size))
    // and the derived fields are mutually consistent.
    #[test]
    fn prop_envelope_length_invariant(
        total in total_count_strategy(),
        (page_number, page_size) in page_params_strategy(),
    ) {
        let items = page_slice(total, page_number, page_size);
        let envelope = PageEnvelope::new(items, total, page_number, page_size);

        prop_assert_eq!(envelope.items.len(), envelope.expected_len(), "Item count mismatch");
        prop_assert_eq!(
            envelope.total_pages as u64,
            total.div_ceil(page_size as u64),
            "total_pages mismatch"
        );
        prop_assert_eq!(envelope.has_next_page, page_number < envelope.total_pages);
        prop_assert_eq!(envelope.has_previous_page, page_number > 1);

        // Items stay ordered ascending
        prop_assert!(envelope.items.windows(2).all(|w| w[0] < w[1]), "Ordering violated");
    }

    // A store stamped before an invalidation is never kept; a store stamped
    // with the current generation always is. After any sequence, a lookup
    // hit reflects the most recent accepted store.
    #[test]
    fn prop_generation_stamp(ops in prop::collection::vec(cache_op_strategy(), 1..40)) {
        let mut cache: PageCache<u64> = PageCache::new(6, 300);
        let mut last_accepted: Option<u64> = None;

        for op in ops {
            match op {
                CacheOp::StoreFresh { total } => {
                    let gen = cache.generation();
                    let envelope = PageEnvelope::new(page_slice(total, 1, 6), total, 1, 6);
                    prop_assert!(cache.store(1, 6, envelope, gen), "Fresh store rejected");
                    last_accepted = Some(total);
                }
                CacheOp::StoreStale { total } => {
                    let gen = cache.generation();
                    cache.invalidate();
                    let envelope = PageEnvelope::new(page_slice(total, 1, 6), total, 1, 6);
                    prop_assert!(!cache.store(1, 6, envelope, gen), "Stale store accepted");
                    last_accepted = None;
                }
                CacheOp::Lookup => {
                    if let Some(hit) = cache.lookup(1, 6) {
                        prop_assert_eq!(
                            Some(hit.total_count),
                            last_accepted,
                            "Hit does not match the last accepted store"
                        );
                    }
                }
                CacheOp::Invalidate => {
                    cache.invalidate();
                    last_accepted = None;
                }
            }
        }
    }

    // The generation counter never decreases and advances exactly once per
    // invalidation.
    #[test]
    fn prop_generation_monotonic(invalidations in 0usize..20) {
        let mut cache: PageCache<u64> = PageCache::new(6, 300);

        for expected in 0..invalidations {
            prop_assert_eq!(cache.generation(), expected as u64);
            cache.invalidate();
        }
        prop_assert_eq!(cache.generation(), invalidations as u64);
    }
}

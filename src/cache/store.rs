//! Page Cache Module
//!
//! Per-entity-kind cache holding precomputed pagination envelopes with TTL
//! expiration checked lazily on lookup. Mutations invalidate the whole cache
//! for the kind; a generation stamp rejects stores computed from a snapshot
//! that predates the latest invalidation.

use std::collections::HashMap;

use crate::cache::{CachedEnvelope, PageEnvelope, PageKey};

// == Page Cache ==
/// Envelope cache for a single entity kind.
///
/// In practice only the distinguished default key (page 1, default page
/// size) is ever populated; the storage stays general over keys so the
/// structure does not bake that policy in.
#[derive(Debug)]
pub struct PageCache<T> {
    /// Cached envelopes by page key
    entries: HashMap<PageKey, CachedEnvelope<T>>,
    /// Bumped on every invalidation; stale stores are rejected against it
    generation: u64,
    /// Page size of the distinguished cached key
    default_page_size: u32,
    /// TTL in seconds applied to stored envelopes
    ttl_secs: u64,
}

impl<T: Clone> PageCache<T> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `default_page_size` - Page size of the distinguished key served from cache
    /// * `ttl_secs` - TTL in seconds for stored envelopes
    pub fn new(default_page_size: u32, ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
            default_page_size,
            ttl_secs,
        }
    }

    /// True when the parameters name the distinguished default key.
    pub fn is_default_key(&self, page_number: u32, page_size: u32) -> bool {
        page_number == 1 && page_size == self.default_page_size
    }

    /// Current invalidation generation. Callers snapshot this before
    /// querying the store and pass it back to [`PageCache::store`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // == Lookup ==
    /// Returns the cached envelope for the distinguished key if present and
    /// unexpired. Non-default keys always miss. An expired entry is dropped
    /// on the way out; a miss has no other side effect.
    pub fn lookup(&mut self, page_number: u32, page_size: u32) -> Option<PageEnvelope<T>> {
        if !self.is_default_key(page_number, page_size) {
            return None;
        }

        let key = PageKey {
            page_number,
            page_size,
        };

        match self.entries.get(&key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(&key);
                None
            }
            Some(entry) => Some(entry.envelope.clone()),
            None => None,
        }
    }

    // == Store ==
    /// Inserts/overwrites the envelope for the key with an absolute
    /// expiration of now + TTL.
    ///
    /// `observed_generation` is the value of [`PageCache::generation`] read
    /// before the caller queried the entity store. If an invalidation
    /// happened in between, the envelope describes pre-mutation state and
    /// the store is refused. Returns whether the envelope was kept.
    pub fn store(
        &mut self,
        page_number: u32,
        page_size: u32,
        envelope: PageEnvelope<T>,
        observed_generation: u64,
    ) -> bool {
        if observed_generation != self.generation {
            return false;
        }

        let key = PageKey {
            page_number,
            page_size,
        };
        self.entries
            .insert(key, CachedEnvelope::new(envelope, self.ttl_secs));
        true
    }

    // == Invalidate ==
    /// Drops every cached envelope for this kind and advances the
    /// generation. Idempotent: invalidating an empty cache is a no-op apart
    /// from the generation bump, which still fences off in-flight stores.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    // == Sweep Expired ==
    /// Removes entries whose TTL has elapsed.
    ///
    /// Correctness never depends on this: `lookup` checks expiry itself.
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of cached envelopes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn envelope(items: Vec<u32>, total: u64) -> PageEnvelope<u32> {
        PageEnvelope::new(items, total, 1, 6)
    }

    #[test]
    fn test_cache_new_is_empty() {
        let cache: PageCache<u32> = PageCache::new(6, 1800);
        assert!(cache.is_empty());
        assert_eq!(cache.generation(), 0);
    }

    #[test]
    fn test_store_and_lookup_default_key() {
        let mut cache = PageCache::new(6, 1800);

        let gen = cache.generation();
        assert!(cache.store(1, 6, envelope(vec![1, 2, 3], 3), gen));

        let hit = cache.lookup(1, 6).unwrap();
        assert_eq!(hit.items, vec![1, 2, 3]);
        assert_eq!(hit.total_count, 3);
    }

    #[test]
    fn test_lookup_non_default_key_misses() {
        let mut cache = PageCache::new(6, 1800);

        let gen = cache.generation();
        cache.store(1, 6, envelope(vec![1, 2, 3], 3), gen);

        assert!(cache.lookup(2, 6).is_none());
        assert!(cache.lookup(1, 10).is_none());
        // The distinguished entry is untouched by the misses
        assert!(cache.lookup(1, 6).is_some());
    }

    #[test]
    fn test_lookup_empty_cache_misses() {
        let mut cache: PageCache<u32> = PageCache::new(6, 1800);
        assert!(cache.lookup(1, 6).is_none());
    }

    #[test]
    fn test_invalidate_drops_entry() {
        let mut cache = PageCache::new(6, 1800);

        let gen = cache.generation();
        cache.store(1, 6, envelope(vec![1], 1), gen);
        cache.invalidate();

        assert!(cache.lookup(1, 6).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let mut cache: PageCache<u32> = PageCache::new(6, 1800);

        cache.invalidate();
        cache.invalidate();

        assert!(cache.is_empty());
        assert_eq!(cache.generation(), 2);
    }

    #[test]
    fn test_stale_store_rejected_after_invalidation() {
        let mut cache = PageCache::new(6, 1800);

        // A reader snapshots the generation, then a mutation invalidates
        let observed = cache.generation();
        cache.invalidate();

        // The reader's envelope describes pre-mutation state: refused
        assert!(!cache.store(1, 6, envelope(vec![1], 1), observed));
        assert!(cache.lookup(1, 6).is_none());

        // A store observing the fresh generation is accepted
        let fresh = cache.generation();
        assert!(cache.store(1, 6, envelope(vec![2], 1), fresh));
        assert_eq!(cache.lookup(1, 6).unwrap().items, vec![2]);
    }

    #[test]
    fn test_overwrite_replaces_envelope() {
        let mut cache = PageCache::new(6, 1800);

        let gen = cache.generation();
        cache.store(1, 6, envelope(vec![1], 1), gen);
        cache.store(1, 6, envelope(vec![1, 2], 2), gen);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup(1, 6).unwrap().total_count, 2);
    }

    #[test]
    fn test_ttl_expiration_on_lookup() {
        let mut cache = PageCache::new(6, 1);

        let gen = cache.generation();
        cache.store(1, 6, envelope(vec![1], 1), gen);
        assert!(cache.lookup(1, 6).is_some());

        sleep(Duration::from_millis(1100));

        // Lazy expiry: the lookup itself drops the stale entry
        assert!(cache.lookup(1, 6).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_sweep_expired() {
        let mut cache = PageCache::new(6, 1);

        let gen = cache.generation();
        cache.store(1, 6, envelope(vec![1], 1), gen);

        sleep(Duration::from_millis(1100));

        assert_eq!(cache.sweep_expired(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.sweep_expired(), 0);
    }
}

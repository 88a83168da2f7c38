//! Cache Entry Module
//!
//! Defines the structure wrapping a cached pagination envelope with its
//! absolute expiration time.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cache::PageEnvelope;

// == Cached Envelope ==
/// A pagination envelope held in the cache together with its lifetime metadata.
#[derive(Debug, Clone)]
pub struct CachedEnvelope<T> {
    /// The precomputed envelope
    pub envelope: PageEnvelope<T>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Absolute expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<T> CachedEnvelope<T> {
    // == Constructor ==
    /// Wraps an envelope with an absolute expiration of now + TTL.
    pub fn new(envelope: PageEnvelope<T>, ttl_secs: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            envelope,
            created_at: now,
            expires_at: now + ttl_secs * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so once the TTL
    /// has fully elapsed the entry is immediately unusable.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 if already expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            0
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn empty_envelope() -> PageEnvelope<u32> {
        PageEnvelope::new(vec![], 0, 1, 6)
    }

    #[test]
    fn test_entry_not_expired_when_fresh() {
        let entry = CachedEnvelope::new(empty_envelope(), 60);

        assert!(!entry.is_expired());
        assert!(entry.expires_at > entry.created_at);
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 1 second TTL
        let entry = CachedEnvelope::new(empty_envelope(), 1);

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CachedEnvelope::new(empty_envelope(), 10);

        let remaining_ms = entry.ttl_remaining_ms();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CachedEnvelope {
            envelope: empty_envelope(),
            created_at: now,
            expires_at: now, // Expires exactly at creation time
        };

        // Entry is expired when current time >= expires_at
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}

//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with size and TTL bookkeeping.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single stored artifact together with its computed size and lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, immutable once inserted
    pub value: V,
    /// Size in bytes as computed by the owning cache's weight function
    pub size: usize,
    /// Insertion instant
    pub created_at: Instant,
    /// Instant from which the entry is treated as absent
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now.
    pub fn new(value: V, size: usize, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            size,
            created_at: now,
            // Far-future TTLs saturate to roughly a century
            expires_at: now
                .checked_add(ttl)
                .unwrap_or_else(|| now + Duration::from_secs(u32::MAX as u64)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`, so a
    /// zero TTL yields an entry that is never observable.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against a caller-supplied instant, used by bulk purges.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

//! Cache Statistics Module
//!
//! Tracks cache occupancy and performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Read-only snapshot of one cache instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Cache instance name ("svg", "png", ...)
    pub name: String,
    /// Current number of live entries
    pub item_count: usize,
    /// Sum of computed entry sizes in bytes
    pub total_bytes: usize,
    /// Configured byte budget
    pub max_bytes: usize,
    /// Configured item cap
    pub max_items: usize,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups (key absent or expired)
    pub misses: u64,
    /// Entries evicted by the LRU policy to make room
    pub evictions: u64,
    /// Entries dropped because their TTL elapsed
    pub expirations: u64,
    /// Values refused because they alone exceed the byte budget
    pub rejected: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty snapshot for the named cache.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn compute_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    // == Occupancy ==
    /// Updates the occupancy figures and refreshes the derived hit rate.
    pub fn set_occupancy(&mut self, item_count: usize, total_bytes: usize) {
        self.item_count = item_count;
        self.total_bytes = total_bytes;
        self.hit_rate = self.compute_hit_rate();
    }
}

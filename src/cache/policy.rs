//! Cache Policy Module
//!
//! Capacity and lifetime limits for a single cache instance.

use std::time::Duration;

/// One mebibyte.
pub const MB: usize = 1024 * 1024;

// == Cache Policy ==
/// Fixed limits applied to one cache instance for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Hard cap on the number of entries
    pub max_items: usize,
    /// Hard cap on the sum of computed entry sizes
    pub max_bytes: usize,
    /// Lifetime of an entry from insertion
    pub ttl: Duration,
}

impl CachePolicy {
    pub const fn new(max_items: usize, max_bytes: usize, ttl: Duration) -> Self {
        Self {
            max_items,
            max_bytes,
            ttl,
        }
    }

    /// SVG markup: 2000 items, 50 MB, 24h.
    pub const fn svg() -> Self {
        Self::new(2000, 50 * MB, Duration::from_secs(24 * 60 * 60))
    }

    /// PNG buffers: 500 items, 100 MB, 24h.
    pub const fn png() -> Self {
        Self::new(500, 100 * MB, Duration::from_secs(24 * 60 * 60))
    }

    /// Icon metadata: 5000 items, 10 MB, 12h.
    pub const fn metadata() -> Self {
        Self::new(5000, 10 * MB, Duration::from_secs(12 * 60 * 60))
    }

    /// Search result pages: 1000 items, 20 MB, 30 min.
    pub const fn search() -> Self {
        Self::new(1000, 20 * MB, Duration::from_secs(30 * 60))
    }

    /// Whether a value of `size` bytes can ever be stored under this policy.
    pub fn admits(&self, size: usize) -> bool {
        self.max_items > 0 && size <= self.max_bytes
    }
}

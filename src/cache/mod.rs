//! Cache Module
//!
//! Provides bounded in-memory caching with TTL expiration, LRU eviction and
//! per-instance byte budgets.

mod entry;
mod facade;
mod lru;
mod policy;
mod stats;
mod store;
mod weight;


// Re-export public types
pub use entry::CacheEntry;
pub use facade::ArtifactCache;
pub use lru::LruTracker;
pub use policy::{CachePolicy, MB};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use weight::{json_weight, Weigh};

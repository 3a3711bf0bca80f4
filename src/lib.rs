//! Icon Cache - bounded in-memory caches for rendered icon artifacts
//!
//! Four independently budgeted LRU caches (SVG, PNG, metadata, search
//! results) with deterministic key derivation, warm-up, invalidation and
//! periodic cleanup.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, Result};
pub use icons::{
    get_cache_stats, invalidate_all_caches, invalidate_icon_cache, invalidate_search_cache,
    warmup_icon_cache, IconCaches,
};
pub use tasks::spawn_cleanup_task;

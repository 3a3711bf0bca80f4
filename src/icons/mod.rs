//! Icon Artifact Caches
//!
//! Key derivation, the four typed caches, and the warm-up, invalidation and
//! statistics routines built on top of them.

mod caches;
mod invalidation;
mod keys;
mod model;
mod renderer;
mod warmup;


pub use caches::{
    get_cache_stats, CacheKind, CacheStatsSnapshot, IconCaches, MetadataCache, PngCache,
    SearchCache, SvgCache,
};
pub use invalidation::{
    invalidate_all_caches, invalidate_cache_kind, invalidate_icon_cache, invalidate_search_cache,
    InvalidationReport,
};
pub use keys::{
    metadata_cache_key, png_cache_key, png_key_prefix, search_cache_key, svg_cache_key,
    svg_key_prefix, DEFAULT_SEARCH_LIMIT,
};
pub use model::{IconMetadata, IconRef, RenderParams, SearchQuery, SearchResults};
pub use renderer::IconRenderer;
pub use warmup::{
    warmup_icon_cache, WarmupOptions, WarmupReport, COMMON_COLORS, COMMON_SIZES,
    DEFAULT_RENDER_TIMEOUT, DEFAULT_WARMUP_LIMIT,
};

//! The four icon artifact caches and the context that owns them.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::{ArtifactCache, CachePolicy, CacheStats};
use crate::config::Config;
use crate::error::CacheError;
use crate::icons::{IconMetadata, SearchResults};

/// Rendered SVG markup.
pub type SvgCache = ArtifactCache<String>;
/// Rasterized PNG buffers.
pub type PngCache = ArtifactCache<Bytes>;
/// Per-icon metadata.
pub type MetadataCache = ArtifactCache<IconMetadata>;
/// Search result pages.
pub type SearchCache = ArtifactCache<SearchResults>;

// == Cache Kind ==
/// Names one of the four artifact classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    Svg,
    Png,
    Metadata,
    Search,
}

impl CacheKind {
    pub const ALL: [CacheKind; 4] = [
        CacheKind::Svg,
        CacheKind::Png,
        CacheKind::Metadata,
        CacheKind::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Svg => "svg",
            CacheKind::Png => "png",
            CacheKind::Metadata => "metadata",
            CacheKind::Search => "search",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(CacheKind::Svg),
            "png" => Ok(CacheKind::Png),
            "metadata" | "meta" => Ok(CacheKind::Metadata),
            "search" => Ok(CacheKind::Search),
            other => Err(CacheError::InvalidRequest(format!(
                "Unknown cache kind '{}', expected one of svg, png, metadata, search",
                other
            ))),
        }
    }
}

// == Icon Caches ==
/// Owns one instance of each artifact cache.
///
/// Built once at startup and handed to whatever needs it. Cloning is cheap
/// and every clone addresses the same four instances; tests build their own
/// isolated set.
#[derive(Debug, Clone)]
pub struct IconCaches {
    pub svg: SvgCache,
    pub png: PngCache,
    pub metadata: MetadataCache,
    pub search: SearchCache,
}

impl IconCaches {
    /// Creates the caches with explicit policies.
    pub fn new(svg: CachePolicy, png: CachePolicy, metadata: CachePolicy, search: CachePolicy) -> Self {
        Self {
            svg: ArtifactCache::new(CacheKind::Svg.as_str(), svg),
            png: ArtifactCache::new(CacheKind::Png.as_str(), png),
            metadata: ArtifactCache::new(CacheKind::Metadata.as_str(), metadata),
            search: ArtifactCache::new(CacheKind::Search.as_str(), search),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.svg, config.png, config.metadata, config.search)
    }

    /// Statistics for one cache.
    pub fn stats(&self, kind: CacheKind) -> CacheStats {
        match kind {
            CacheKind::Svg => self.svg.stats(),
            CacheKind::Png => self.png.stats(),
            CacheKind::Metadata => self.metadata.stats(),
            CacheKind::Search => self.search.stats(),
        }
    }

    /// Empties one cache.
    pub fn clear(&self, kind: CacheKind) {
        match kind {
            CacheKind::Svg => self.svg.clear(),
            CacheKind::Png => self.png.clear(),
            CacheKind::Metadata => self.metadata.clear(),
            CacheKind::Search => self.search.clear(),
        }
    }

    /// Drops expired entries from one cache.
    pub fn purge_expired(&self, kind: CacheKind) -> usize {
        match kind {
            CacheKind::Svg => self.svg.purge_expired(),
            CacheKind::Png => self.png.purge_expired(),
            CacheKind::Metadata => self.metadata.purge_expired(),
            CacheKind::Search => self.search.purge_expired(),
        }
    }

    pub fn len(&self, kind: CacheKind) -> usize {
        match kind {
            CacheKind::Svg => self.svg.len(),
            CacheKind::Png => self.png.len(),
            CacheKind::Metadata => self.metadata.len(),
            CacheKind::Search => self.search.len(),
        }
    }
}

impl Default for IconCaches {
    fn default() -> Self {
        Self::new(
            CachePolicy::svg(),
            CachePolicy::png(),
            CachePolicy::metadata(),
            CachePolicy::search(),
        )
    }
}

// == Stats Snapshot ==
/// Statistics of all four caches at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsSnapshot {
    pub svg: CacheStats,
    pub png: CacheStats,
    pub metadata: CacheStats,
    pub search: CacheStats,
    pub timestamp: DateTime<Utc>,
}

/// Collects a statistics snapshot of every cache.
pub fn get_cache_stats(caches: &IconCaches) -> CacheStatsSnapshot {
    CacheStatsSnapshot {
        svg: caches.svg.stats(),
        png: caches.png.stats(),
        metadata: caches.metadata.stats(),
        search: caches.search.stats(),
        timestamp: Utc::now(),
    }
}

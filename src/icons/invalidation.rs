//! Invalidation Routines
//!
//! Targeted removal of one icon's artifacts and bulk clearing of whole
//! cache classes.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::icons::{metadata_cache_key, png_key_prefix, svg_key_prefix, CacheKind, IconCaches};

// == Invalidation Report ==
/// What a targeted invalidation removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvalidationReport {
    pub svg_removed: usize,
    pub png_removed: usize,
    pub metadata_removed: bool,
}

impl InvalidationReport {
    pub fn total(&self) -> usize {
        self.svg_removed + self.png_removed + usize::from(self.metadata_removed)
    }
}

/// Removes every cached SVG and PNG variant of one icon plus its metadata.
///
/// Render parameters are unknown here, so SVG and PNG keys are matched on
/// their structural `{prefix}:{library}:{icon}:` prefix. Each cache is
/// scanned once under its own lock.
pub fn invalidate_icon_cache(
    caches: &IconCaches,
    icon_name: &str,
    library: &str,
) -> Result<InvalidationReport> {
    let svg_prefix = svg_key_prefix(icon_name, library)?;
    let png_prefix = png_key_prefix(icon_name, library)?;
    let metadata_key = metadata_cache_key(icon_name, library)?;

    let report = InvalidationReport {
        svg_removed: caches.svg.remove_matching(|key| key.starts_with(&svg_prefix)),
        png_removed: caches.png.remove_matching(|key| key.starts_with(&png_prefix)),
        metadata_removed: caches.metadata.delete(&metadata_key),
    };

    info!(
        icon = %icon_name,
        library = %library,
        svg = report.svg_removed,
        png = report.png_removed,
        metadata = report.metadata_removed,
        "Invalidated icon cache"
    );
    Ok(report)
}

/// Clears every cached search page.
///
/// Search results aggregate many icons, so any icon change invalidates all
/// of them.
pub fn invalidate_search_cache(caches: &IconCaches) {
    invalidate_cache_kind(caches, CacheKind::Search);
}

/// Clears one cache class.
pub fn invalidate_cache_kind(caches: &IconCaches, kind: CacheKind) {
    let removed = caches.len(kind);
    caches.clear(kind);
    info!(cache = %kind, removed, "Cleared cache");
}

/// Clears all four caches.
pub fn invalidate_all_caches(caches: &IconCaches) {
    for kind in CacheKind::ALL {
        invalidate_cache_kind(caches, kind);
    }
    info!("All icon caches cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::icons::{
        get_cache_stats, png_cache_key, search_cache_key, svg_cache_key, IconMetadata,
        RenderParams, SearchQuery, SearchResults,
    };
    use bytes::Bytes;

    fn populate(caches: &IconCaches, icon: &str) {
        for size in [16, 24, 32] {
            for color in ["#000", "#fff"] {
                let params = RenderParams::new(size, color);
                caches.svg.set(
                    svg_cache_key(icon, "lucide", &params).unwrap(),
                    format!("<svg>{}</svg>", icon),
                );
                caches.png.set(
                    png_cache_key(icon, "lucide", &params).unwrap(),
                    Bytes::from(icon.as_bytes().to_vec()),
                );
            }
        }
        caches.metadata.set(
            metadata_cache_key(icon, "lucide").unwrap(),
            IconMetadata {
                name: icon.to_string(),
                library: "lucide".to_string(),
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_invalidate_icon_removes_all_variants() {
        let caches = IconCaches::default();
        populate(&caches, "Home");
        populate(&caches, "HomeAlt");

        let report = invalidate_icon_cache(&caches, "Home", "lucide").unwrap();

        assert_eq!(report.svg_removed, 6);
        assert_eq!(report.png_removed, 6);
        assert!(report.metadata_removed);
        assert_eq!(report.total(), 13);

        assert_eq!(caches.svg.len(), 6);
        assert_eq!(caches.png.len(), 6);
        assert!(caches.metadata.has("meta:lucide:HomeAlt"));
        assert!(!caches.metadata.has("meta:lucide:Home"));
    }

    #[test]
    fn test_invalidate_icon_is_library_scoped() {
        let caches = IconCaches::default();
        let params = RenderParams::new(24, "#000");
        caches
            .svg
            .set(svg_cache_key("Home", "lucide", &params).unwrap(), "a".to_string());
        caches
            .svg
            .set(svg_cache_key("Home", "heroicons", &params).unwrap(), "b".to_string());

        invalidate_icon_cache(&caches, "Home", "lucide").unwrap();

        assert_eq!(caches.svg.len(), 1);
        assert!(caches
            .svg
            .has(&svg_cache_key("Home", "heroicons", &params).unwrap()));
    }

    #[test]
    fn test_invalidate_icon_rejects_bad_identity() {
        let caches = IconCaches::default();
        assert!(matches!(
            invalidate_icon_cache(&caches, "", "lucide"),
            Err(CacheError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_invalidate_unknown_icon_is_noop() {
        let caches = IconCaches::default();
        populate(&caches, "Home");

        let report = invalidate_icon_cache(&caches, "Star", "lucide").unwrap();

        assert_eq!(report, InvalidationReport::default());
        assert_eq!(caches.svg.len(), 6);
    }

    #[test]
    fn test_invalidate_search_cache_only_touches_search() {
        let caches = IconCaches::default();
        populate(&caches, "Home");
        caches.search.set(
            search_cache_key(&SearchQuery::new().query("home")),
            SearchResults::default(),
        );

        invalidate_search_cache(&caches);

        assert!(caches.search.is_empty());
        assert_eq!(caches.svg.len(), 6);
        assert_eq!(caches.metadata.len(), 1);
    }

    #[test]
    fn test_invalidate_all_caches_zeroes_stats() {
        let caches = IconCaches::default();
        populate(&caches, "Home");
        caches.search.set(
            search_cache_key(&SearchQuery::new()),
            SearchResults::default(),
        );

        invalidate_all_caches(&caches);

        let snapshot = get_cache_stats(&caches);
        for stats in [snapshot.svg, snapshot.png, snapshot.metadata, snapshot.search] {
            assert_eq!(stats.item_count, 0, "{} not empty", stats.name);
            assert_eq!(stats.total_bytes, 0, "{} still holds bytes", stats.name);
        }
    }
}

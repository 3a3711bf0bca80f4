//! Warm-up Routine
//!
//! Pre-renders common size/color variants of popular icons so the first
//! real requests for them are served from cache.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::icons::{png_cache_key, svg_cache_key, IconCaches, IconRef, IconRenderer, RenderParams};

/// Sizes rendered for every warmed icon.
pub const COMMON_SIZES: [u32; 4] = [16, 24, 32, 48];
/// Colors rendered for every warmed icon: black, white, mid-gray.
pub const COMMON_COLORS: [&str; 3] = ["#000000", "#ffffff", "#6b7280"];
/// How many icons of the popular list are warmed.
pub const DEFAULT_WARMUP_LIMIT: usize = 100;
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(10);

// == Warmup Options ==
#[derive(Debug, Clone)]
pub struct WarmupOptions {
    /// Only the first `limit` icons of the list are warmed
    pub limit: usize,
    pub sizes: Vec<u32>,
    pub colors: Vec<String>,
    /// Upper bound for a single render call
    pub render_timeout: Duration,
}

impl Default for WarmupOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_WARMUP_LIMIT,
            sizes: COMMON_SIZES.to_vec(),
            colors: COMMON_COLORS.iter().map(|c| c.to_string()).collect(),
            render_timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }
}

impl WarmupOptions {
    /// Default variants with the configured icon limit.
    pub fn from_config(config: &Config) -> Self {
        Self::default().with_limit(config.warmup_limit)
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

// == Warmup Report ==
/// Outcome counters of one warm-up run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarmupReport {
    /// Icons considered
    pub icons: usize,
    /// SVG entries rendered and stored
    pub svg_warmed: usize,
    /// PNG entries rendered and stored
    pub png_warmed: usize,
    /// Variants already cached
    pub skipped: usize,
    /// Variants whose key or render failed
    pub failed: usize,
    /// Rendered variants too large for their cache
    pub rejected: usize,
}

impl WarmupReport {
    /// Total number of newly cached entries.
    pub fn warmed(&self) -> usize {
        self.svg_warmed + self.png_warmed
    }
}

/// Renders and caches the common variants of the first `options.limit` icons.
///
/// Variants already present are skipped, so repeated runs render nothing new.
/// A failing variant is logged and counted; it never stops the run. No cache
/// lock is held while a render is in flight, and failed or timed-out renders
/// are never stored.
pub async fn warmup_icon_cache(
    caches: &IconCaches,
    renderer: &dyn IconRenderer,
    icons: &[IconRef],
    options: &WarmupOptions,
) -> WarmupReport {
    let mut report = WarmupReport::default();

    for icon in icons.iter().take(options.limit) {
        report.icons += 1;

        for &size in &options.sizes {
            for color in &options.colors {
                let params = RenderParams::new(size, color.as_str());
                warm_svg(caches, renderer, icon, &params, options.render_timeout, &mut report).await;
                warm_png(caches, renderer, icon, &params, options.render_timeout, &mut report).await;
            }
        }
    }

    info!(
        icons = report.icons,
        svg_warmed = report.svg_warmed,
        png_warmed = report.png_warmed,
        skipped = report.skipped,
        failed = report.failed,
        rejected = report.rejected,
        "Icon cache warm-up finished"
    );
    report
}

async fn warm_svg(
    caches: &IconCaches,
    renderer: &dyn IconRenderer,
    icon: &IconRef,
    params: &RenderParams,
    timeout: Duration,
    report: &mut WarmupReport,
) {
    let key = match svg_cache_key(&icon.icon_name, &icon.library, params) {
        Ok(key) => key,
        Err(e) => return record_failure(report, icon, params, "svg", &e),
    };
    if caches.svg.has(&key) {
        report.skipped += 1;
        return;
    }

    let rendered = render_within(
        timeout,
        renderer.render_svg(&icon.icon_name, &icon.library, params),
    )
    .await;
    match rendered {
        Ok(svg) => {
            if caches.svg.set(key.as_str(), svg) {
                debug!(key = %key, "Warmed SVG");
                report.svg_warmed += 1;
            } else {
                report.rejected += 1;
            }
        }
        Err(e) => record_failure(report, icon, params, "svg", &e),
    }
}

async fn warm_png(
    caches: &IconCaches,
    renderer: &dyn IconRenderer,
    icon: &IconRef,
    params: &RenderParams,
    timeout: Duration,
    report: &mut WarmupReport,
) {
    let key = match png_cache_key(&icon.icon_name, &icon.library, params) {
        Ok(key) => key,
        Err(e) => return record_failure(report, icon, params, "png", &e),
    };
    if caches.png.has(&key) {
        report.skipped += 1;
        return;
    }

    let rendered = render_within(
        timeout,
        renderer.render_png(&icon.icon_name, &icon.library, params),
    )
    .await;
    match rendered {
        Ok(png) => {
            if caches.png.set(key.as_str(), png) {
                debug!(key = %key, "Warmed PNG");
                report.png_warmed += 1;
            } else {
                report.rejected += 1;
            }
        }
        Err(e) => record_failure(report, icon, params, "png", &e),
    }
}

async fn render_within<T, F>(timeout: Duration, render: F) -> Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match tokio::time::timeout(timeout, render).await {
        Ok(Ok(artifact)) => Ok(artifact),
        Ok(Err(e)) => Err(CacheError::Render(format!("{:#}", e))),
        Err(_) => Err(CacheError::Render(format!("timed out after {:?}", timeout))),
    }
}

fn record_failure(
    report: &mut WarmupReport,
    icon: &IconRef,
    params: &RenderParams,
    format: &str,
    error: &CacheError,
) {
    report.failed += 1;
    warn!(
        icon = %icon.icon_name,
        library = %icon.library,
        size = params.size,
        color = %params.color,
        format,
        error = %error,
        "Failed to warm icon variant"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts renders; fails for icons named "Broken", stalls for "Slow".
    #[derive(Default)]
    struct FakeRenderer {
        svg_calls: AtomicUsize,
        png_calls: AtomicUsize,
    }

    impl FakeRenderer {
        fn calls(&self) -> usize {
            self.svg_calls.load(Ordering::SeqCst) + self.png_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IconRenderer for FakeRenderer {
        async fn render_svg(
            &self,
            icon_name: &str,
            library: &str,
            params: &RenderParams,
        ) -> anyhow::Result<String> {
            self.svg_calls.fetch_add(1, Ordering::SeqCst);
            match icon_name {
                "Broken" => anyhow::bail!("unknown icon {}/{}", library, icon_name),
                "Slow" => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(String::new())
                }
                _ => Ok(format!(
                    "<svg width=\"{}\" fill=\"{}\" data-icon=\"{}\"/>",
                    params.size, params.color, icon_name
                )),
            }
        }

        async fn render_png(
            &self,
            icon_name: &str,
            _library: &str,
            params: &RenderParams,
        ) -> anyhow::Result<Bytes> {
            self.png_calls.fetch_add(1, Ordering::SeqCst);
            match icon_name {
                "Broken" => anyhow::bail!("rasterizer crashed"),
                "Slow" => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(Bytes::new())
                }
                _ => Ok(Bytes::from(vec![0u8; params.size as usize])),
            }
        }
    }

    fn icons(names: &[&str]) -> Vec<IconRef> {
        names.iter().map(|n| IconRef::new(*n, "lucide")).collect()
    }

    #[tokio::test]
    async fn test_warmup_populates_all_variants() {
        let caches = IconCaches::default();
        let renderer = FakeRenderer::default();

        let report =
            warmup_icon_cache(&caches, &renderer, &icons(&["Home", "User"]), &WarmupOptions::default())
                .await;

        // 2 icons x 4 sizes x 3 colors
        assert_eq!(report.icons, 2);
        assert_eq!(report.svg_warmed, 24);
        assert_eq!(report.png_warmed, 24);
        assert_eq!(report.warmed(), 48);
        assert_eq!(caches.svg.len(), 24);
        assert_eq!(caches.png.len(), 24);

        let key = svg_cache_key("Home", "lucide", &RenderParams::new(16, "#ffffff")).unwrap();
        assert!(caches.svg.get(&key).unwrap().contains("data-icon=\"Home\""));
    }

    #[tokio::test]
    async fn test_warmup_is_idempotent() {
        let caches = IconCaches::default();
        let renderer = FakeRenderer::default();
        let list = icons(&["Home", "User", "Settings"]);

        let first = warmup_icon_cache(&caches, &renderer, &list, &WarmupOptions::default()).await;
        let calls_after_first = renderer.calls();
        let keys_after_first = {
            let mut keys = caches.svg.keys();
            keys.extend(caches.png.keys());
            keys.sort();
            keys
        };

        let second = warmup_icon_cache(&caches, &renderer, &list, &WarmupOptions::default()).await;
        let mut keys_after_second = caches.svg.keys();
        keys_after_second.extend(caches.png.keys());
        keys_after_second.sort();

        assert_eq!(first.warmed(), 72);
        assert_eq!(second.warmed(), 0);
        assert_eq!(second.skipped, 72);
        assert_eq!(renderer.calls(), calls_after_first);
        assert_eq!(keys_after_first, keys_after_second);
    }

    #[tokio::test]
    async fn test_warmup_tolerates_failures() {
        let caches = IconCaches::default();
        let renderer = FakeRenderer::default();

        let report = warmup_icon_cache(
            &caches,
            &renderer,
            &icons(&["Broken", "Home"]),
            &WarmupOptions::default(),
        )
        .await;

        assert_eq!(report.failed, 24);
        assert_eq!(report.warmed(), 24);
        assert!(caches
            .svg
            .keys()
            .iter()
            .all(|k| k.starts_with("svg:lucide:Home:")));
    }

    #[tokio::test]
    async fn test_warmup_counts_invalid_identity_as_failure() {
        let caches = IconCaches::default();
        let renderer = FakeRenderer::default();

        let report =
            warmup_icon_cache(&caches, &renderer, &icons(&[""]), &WarmupOptions::default()).await;

        assert_eq!(report.failed, 24);
        assert_eq!(renderer.calls(), 0);
    }

    #[tokio::test]
    async fn test_warmup_respects_limit() {
        let caches = IconCaches::default();
        let renderer = FakeRenderer::default();
        let config = Config {
            warmup_limit: 1,
            ..Config::default()
        };
        let options = WarmupOptions::from_config(&config);

        let report =
            warmup_icon_cache(&caches, &renderer, &icons(&["Home", "User"]), &options).await;

        assert_eq!(report.icons, 1);
        assert!(caches.svg.keys().iter().all(|k| k.contains(":Home:")));
    }

    #[tokio::test]
    async fn test_timed_out_render_is_not_cached() {
        let caches = IconCaches::default();
        let renderer = FakeRenderer::default();
        let options = WarmupOptions {
            sizes: vec![24],
            colors: vec!["#000000".to_string()],
            render_timeout: Duration::from_millis(100),
            ..WarmupOptions::default()
        };

        let report = warmup_icon_cache(&caches, &renderer, &icons(&["Slow"]), &options).await;

        assert_eq!(report.failed, 2);
        assert!(caches.svg.is_empty());
        assert!(caches.png.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_render_is_not_counted_as_warmed() {
        use crate::cache::CachePolicy;

        // FakeRenderer PNGs weigh `size` bytes, so only the 16px variant fits
        let tiny_png = CachePolicy::new(10, 20, Duration::from_secs(60));
        let caches = IconCaches::new(
            CachePolicy::svg(),
            tiny_png,
            CachePolicy::metadata(),
            CachePolicy::search(),
        );
        let renderer = FakeRenderer::default();
        let options = WarmupOptions {
            sizes: vec![16, 24],
            colors: vec!["#000000".to_string()],
            ..WarmupOptions::default()
        };

        let report = warmup_icon_cache(&caches, &renderer, &icons(&["Home"]), &options).await;

        assert_eq!(report.svg_warmed, 2);
        assert_eq!(report.png_warmed, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.png_warmed, caches.png.len());
        assert_eq!(caches.png.stats().rejected, 1);
    }
}

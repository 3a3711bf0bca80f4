//! Interface to the external icon renderer.

use async_trait::async_trait;
use bytes::Bytes;

use crate::icons::RenderParams;

/// Produces icon artifacts on a cache miss.
///
/// Implementations live outside this crate. They may be slow; callers never
/// hold a cache lock while awaiting them.
#[async_trait]
pub trait IconRenderer: Send + Sync {
    /// Renders SVG markup.
    async fn render_svg(
        &self,
        icon_name: &str,
        library: &str,
        params: &RenderParams,
    ) -> anyhow::Result<String>;

    /// Rasterizes the icon to PNG bytes.
    async fn render_png(
        &self,
        icon_name: &str,
        library: &str,
        params: &RenderParams,
    ) -> anyhow::Result<Bytes>;
}

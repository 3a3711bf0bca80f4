//! API Handlers
//!
//! HTTP request handlers for each admin endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheStats;
use crate::config::Config;
use crate::error::Result;
use crate::icons::{
    get_cache_stats, invalidate_all_caches, invalidate_cache_kind, invalidate_icon_cache,
    CacheKind, CacheStatsSnapshot, IconCaches,
};
use crate::models::{ClearResponse, HealthResponse, InvalidationResponse};

/// Application state shared across all handlers.
///
/// The caches synchronize internally, so the state needs no lock of its own.
#[derive(Clone)]
pub struct AppState {
    pub caches: IconCaches,
}

impl AppState {
    /// Creates a new AppState around existing caches.
    pub fn new(caches: IconCaches) -> Self {
        Self { caches }
    }

    /// Creates a new AppState with caches sized from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(IconCaches::from_config(config))
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStatsSnapshot> {
    Json(get_cache_stats(&state.caches))
}

/// Handler for GET /stats/:kind
pub async fn cache_stats_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<CacheStats>> {
    let kind: CacheKind = kind.parse()?;
    Ok(Json(state.caches.stats(kind)))
}

/// Handler for DELETE /icons/:library/:name
pub async fn invalidate_icon_handler(
    State(state): State<AppState>,
    Path((library, icon_name)): Path<(String, String)>,
) -> Result<Json<InvalidationResponse>> {
    let report = invalidate_icon_cache(&state.caches, &icon_name, &library)?;
    Ok(Json(InvalidationResponse::new(icon_name, library, report)))
}

/// Handler for DELETE /cache/:kind
pub async fn clear_cache_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ClearResponse>> {
    let kind: CacheKind = kind.parse()?;
    invalidate_cache_kind(&state.caches, kind);
    Ok(Json(ClearResponse::new(vec![kind])))
}

/// Handler for DELETE /cache
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    invalidate_all_caches(&state.caches);
    Json(ClearResponse::new(CacheKind::ALL.to_vec()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{svg_cache_key, RenderParams};

    fn state_with_home() -> (AppState, String) {
        let state = AppState::new(IconCaches::default());
        let key = svg_cache_key("Home", "lucide", &RenderParams::new(24, "#000")).unwrap();
        state.caches.svg.set(key.clone(), "<svg/>".to_string());
        (state, key)
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let (state, _) = state_with_home();

        let response = stats_handler(State(state)).await;

        assert_eq!(response.svg.item_count, 1);
        assert_eq!(response.png.item_count, 0);
    }

    #[tokio::test]
    async fn test_cache_stats_handler_unknown_kind() {
        let state = AppState::new(IconCaches::default());

        let result = cache_stats_handler(State(state), Path("gif".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalidate_icon_handler() {
        let (state, key) = state_with_home();

        let response = invalidate_icon_handler(
            State(state.clone()),
            Path(("lucide".to_string(), "Home".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(response.removed.svg_removed, 1);
        assert!(!state.caches.svg.has(&key));
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let (state, _) = state_with_home();

        let response = clear_cache_handler(State(state.clone()), Path("svg".to_string()))
            .await
            .unwrap();

        assert_eq!(response.cleared, vec![CacheKind::Svg]);
        assert!(state.caches.svg.is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_handler() {
        let (state, _) = state_with_home();

        let response = clear_all_handler(State(state.clone())).await;

        assert_eq!(response.cleared.len(), 4);
        assert!(state.caches.svg.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::icons::{CacheKind, InvalidationReport};

/// Response body for `DELETE /icons/:library/:name`
#[derive(Debug, Clone, Serialize)]
pub struct InvalidationResponse {
    /// Summary message
    pub message: String,
    pub icon_name: String,
    pub library: String,
    /// Per-cache removal counts
    pub removed: InvalidationReport,
}

impl InvalidationResponse {
    pub fn new(icon_name: impl Into<String>, library: impl Into<String>, removed: InvalidationReport) -> Self {
        let icon_name = icon_name.into();
        let library = library.into();
        Self {
            message: format!(
                "Invalidated {} cached entries for '{}/{}'",
                removed.total(),
                library,
                icon_name
            ),
            icon_name,
            library,
            removed,
        }
    }
}

/// Response body for `DELETE /cache` and `DELETE /cache/:kind`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Caches that were cleared
    pub cleared: Vec<CacheKind>,
}

impl ClearResponse {
    pub fn new(cleared: Vec<CacheKind>) -> Self {
        let names: Vec<&str> = cleared.iter().map(|k| k.as_str()).collect();
        Self {
            message: format!("Cleared caches: {}", names.join(", ")),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

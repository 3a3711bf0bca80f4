//! Error types for the icon cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the icon cache.
///
/// A cache miss is never an error; lookups return `Option`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key derivation received incomplete or malformed input
    #[error("Invalid cache key input: {0}")]
    InvalidKey(String),

    /// Invalid admin request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The external renderer failed to produce an artifact
    #[error("Render failed: {0}")]
    Render(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Render(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the icon cache.
pub type Result<T> = std::result::Result<T, CacheError>;

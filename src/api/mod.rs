//! API Module
//!
//! Admin HTTP handlers and routing for inspecting and invalidating the icon caches.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Statistics of all four caches
//! - `GET /stats/:kind` - Statistics of one cache
//! - `DELETE /icons/:library/:name` - Invalidate every cached artifact of one icon
//! - `DELETE /cache/:kind` - Clear one cache
//! - `DELETE /cache` - Clear all caches

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

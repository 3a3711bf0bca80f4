//! Configuration Module
//!
//! Handles loading and managing server and cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CachePolicy;
use crate::icons::DEFAULT_WARMUP_LIMIT;

/// Server and cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// SVG cache limits
    pub svg: CachePolicy,
    /// PNG cache limits
    pub png: CachePolicy,
    /// Metadata cache limits
    pub metadata: CachePolicy,
    /// Search cache limits
    pub search: CachePolicy,
    /// Admin HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Number of popular icons considered by warm-up
    pub warmup_limit: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - Admin HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 3600)
    /// - `WARMUP_LIMIT` - Popular icons to warm (default: 100)
    /// - `{SVG,PNG,METADATA,SEARCH}_CACHE_MAX_ITEMS` - Item cap per cache
    /// - `{SVG,PNG,METADATA,SEARCH}_CACHE_MAX_BYTES` - Byte budget per cache
    /// - `{SVG,PNG,METADATA,SEARCH}_CACHE_TTL` - Entry TTL in seconds per cache
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            svg: policy_from_env("SVG", defaults.svg),
            png: policy_from_env("PNG", defaults.png),
            metadata: policy_from_env("METADATA", defaults.metadata),
            search: policy_from_env("SEARCH", defaults.search),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            warmup_limit: env_or("WARMUP_LIMIT", defaults.warmup_limit),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svg: CachePolicy::svg(),
            png: CachePolicy::png(),
            metadata: CachePolicy::metadata(),
            search: CachePolicy::search(),
            server_port: 3000,
            cleanup_interval: 3600,
            warmup_limit: DEFAULT_WARMUP_LIMIT,
        }
    }
}

fn policy_from_env(prefix: &str, default: CachePolicy) -> CachePolicy {
    CachePolicy {
        max_items: env_or(&format!("{}_CACHE_MAX_ITEMS", prefix), default.max_items),
        max_bytes: env_or(&format!("{}_CACHE_MAX_BYTES", prefix), default.max_bytes),
        ttl: Duration::from_secs(env_or(
            &format!("{}_CACHE_TTL", prefix),
            default.ttl.as_secs(),
        )),
    }
}

// Unset or unparseable values fall back to the default
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

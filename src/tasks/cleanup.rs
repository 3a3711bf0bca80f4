//! Cache Cleanup Task
//!
//! Background task that periodically purges expired icon cache entries and
//! logs per-cache occupancy before and after.

use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::info;

use crate::icons::{CacheKind, IconCaches};

/// Item counts of one cache around a cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupSummary {
    pub cache: CacheKind,
    pub before: usize,
    pub after: usize,
}

impl CleanupSummary {
    /// Entries dropped by the pass. Concurrent writes can make `after` larger.
    pub fn removed(&self) -> usize {
        self.before.saturating_sub(self.after)
    }
}

/// Runs one cleanup pass over all four caches.
///
/// Capacity and TTL are already enforced on every get/set, so this only
/// reclaims memory held by expired entries nobody asked for again.
pub fn run_cleanup(caches: &IconCaches) -> Vec<CleanupSummary> {
    CacheKind::ALL
        .into_iter()
        .map(|kind| {
            let before = caches.len(kind);
            caches.purge_expired(kind);
            let after = caches.len(kind);
            CleanupSummary {
                cache: kind,
                before,
                after,
            }
        })
        .collect()
}

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task sleeps for `cleanup_interval_secs` between passes and runs
/// until aborted through the returned handle.
///
/// # Example
/// ```ignore
/// let caches = IconCaches::default();
/// let cleanup_handle = spawn_cleanup_task(caches.clone(), 3600);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(caches: IconCaches, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            log_cleanup(&run_cleanup(&caches));
        }
    })
}

/// Logs every cache's counts around a pass; returns the total removed.
fn log_cleanup(summaries: &[CleanupSummary]) -> usize {
    for summary in summaries {
        info!(
            cache = %summary.cache,
            before = summary.before,
            after = summary.after,
            "Cache cleanup pass"
        );
    }

    let removed: usize = summaries.iter().map(CleanupSummary::removed).sum();
    info!(removed, "Cache cleanup: removed {} expired entries", removed);
    removed
}

//! Cache Facade Module
//!
//! Thread-safe handle over a single [`CacheStore`] instance.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CachePolicy, CacheStats, CacheStore, Weigh};

// == Artifact Cache ==
/// Cloneable handle to one shared bounded cache.
///
/// Clones share the same underlying store. Every operation takes the store
/// lock exactly once, so the eviction check and the insertion happen
/// atomically and concurrent writers cannot jointly overshoot the budget.
/// The lock is never held across an await point.
#[derive(Debug)]
pub struct ArtifactCache<V> {
    inner: Arc<Mutex<CacheStore<V>>>,
}

impl<V> Clone for ArtifactCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Weigh + Clone> ArtifactCache<V> {
    /// Creates a new, empty cache instance.
    pub fn new(name: &str, policy: CachePolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheStore::new(name, policy))),
        }
    }

    /// Returns the value if present and not expired.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key)
    }

    /// Stores or overwrites a value, evicting LRU entries as needed.
    ///
    /// Returns `false` when the value can never fit and was not stored.
    pub fn set(&self, key: impl Into<String>, value: V) -> bool {
        self.inner.lock().set(key.into(), value).is_some()
    }

    /// Whether a live entry exists. Does not affect recency.
    pub fn has(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    /// Removes one entry, returning whether it existed.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.lock().delete(key)
    }

    /// Removes every entry from this instance only.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Removes every entry whose key satisfies `predicate`.
    pub fn remove_matching<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        self.inner.lock().remove_matching(predicate)
    }

    /// Drops expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.inner.lock().purge_expired()
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn policy(&self) -> CachePolicy {
        *self.inner.lock().policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn cache(max_items: usize, max_bytes: usize) -> ArtifactCache<String> {
        ArtifactCache::new("svg", CachePolicy::new(max_items, max_bytes, Duration::from_secs(60)))
    }

    #[test]
    fn test_facade_roundtrip() {
        let cache = cache(10, 1000);

        assert!(cache.set("svg:lucide:Home:24:#000:none:0", "<svg/>".to_string()));

        assert!(cache.has("svg:lucide:Home:24:#000:none:0"));
        assert_eq!(
            cache.get("svg:lucide:Home:24:#000:none:0"),
            Some("<svg/>".to_string())
        );
        assert!(cache.delete("svg:lucide:Home:24:#000:none:0"));
        assert!(!cache.has("svg:lucide:Home:24:#000:none:0"));
    }

    #[test]
    fn test_set_reports_rejected_value() {
        let cache = cache(10, 8);

        assert!(cache.set("small", "<svg/>".to_string()));
        assert!(!cache.set("large", "<svg width=\"48\"/>".to_string()));

        assert!(!cache.has("large"));
        assert_eq!(cache.stats().rejected, 1);
    }

    #[test]
    fn test_clones_share_state() {
        let cache = cache(10, 1000);
        let other = cache.clone();

        cache.set("k", "v".to_string());

        assert_eq!(other.get("k"), Some("v".to_string()));
        other.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_sets_respect_budget() {
        let cache = cache(50, 400);

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        cache.set(format!("{}:{}", worker, i), "x".repeat(1 + i % 16));
                        let stats = cache.stats();
                        assert!(stats.item_count <= 50);
                        assert!(stats.total_bytes <= 400);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = cache.stats();
        assert!(stats.item_count <= 50);
        assert!(stats.total_bytes <= 400);
    }

    #[test]
    fn test_policy_is_exposed() {
        let cache = cache(7, 70);
        assert_eq!(cache.policy().max_items, 7);
        assert_eq!(cache.stats().max_bytes, 70);
    }
}

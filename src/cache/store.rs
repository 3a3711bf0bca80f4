//! Cache Store Module
//!
//! Bounded cache engine combining HashMap storage with LRU tracking, TTL
//! expiration and a byte budget.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};

use crate::cache::{CacheEntry, CachePolicy, CacheStats, LruTracker, Weigh};

// == Cache Store ==
/// Cache storage bounded by item count and aggregate computed size.
///
/// After every operation `len() <= max_items` and
/// `total_bytes() <= max_bytes` hold.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Limits for this instance
    policy: CachePolicy,
    /// Sum of `size` over all stored entries
    total_bytes: usize,
}

impl<V: Weigh + Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store governed by `policy`.
    pub fn new(name: &str, policy: CachePolicy) -> Self {
        let mut stats = CacheStats::new(name);
        stats.max_bytes = policy.max_bytes;
        stats.max_items = policy.max_items;

        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats,
            policy,
            total_bytes: 0,
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous value for `key`.
    ///
    /// Least recently used entries are evicted until the new entry fits both
    /// limits. A value that could never fit is dropped together with any
    /// previous value for the key. Returns the number of evicted entries, or
    /// `None` when the value was rejected.
    pub fn set(&mut self, key: String, value: V) -> Option<usize> {
        let size = value.weight();

        self.remove_entry(&key);

        if !self.policy.admits(size) {
            self.stats.record_rejection();
            warn!(
                cache = %self.stats.name,
                key = %key,
                size,
                max_bytes = self.policy.max_bytes,
                "Value exceeds cache budget, not stored"
            );
            return None;
        }

        let mut evicted = 0;
        while self.entries.len() + 1 > self.policy.max_items
            || self.total_bytes + size > self.policy.max_bytes
        {
            let Some(oldest) = self.lru.evict_oldest() else {
                break;
            };
            if let Some(entry) = self.entries.remove(&oldest) {
                self.total_bytes -= entry.size;
                self.stats.record_eviction();
                evicted += 1;
                debug!(cache = %self.stats.name, key = %oldest, size = entry.size, "Evicted entry");
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(value, size, self.policy.ttl));
        self.total_bytes += size;
        self.lru.touch(&key);

        Some(evicted)
    }

    // == Get ==
    /// Retrieves a live value by key and marks it most recently used.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Whether a live entry exists. Does not change recency.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == Delete ==
    /// Removes an entry by key, returning whether a live entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.remove_entry(key) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }

    // == Clear ==
    /// Removes every entry, returning how many were stored.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.total_bytes = 0;
        count
    }

    // == Remove Matching ==
    /// Removes every entry whose key satisfies `predicate`.
    ///
    /// Scans all keys, so the cost is linear in the current item count.
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| predicate(key.as_str()))
            .cloned()
            .collect();

        for key in &matching {
            self.remove_entry(key);
        }
        matching.len()
    }

    // == Purge Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Stats ==
    /// Returns a statistics snapshot.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.entries.len(), self.total_bytes);
        stats
    }

    /// Snapshot of all stored keys, live or not yet purged.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Returns the current number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.total_bytes -= entry.size;
        Some(entry)
    }
}

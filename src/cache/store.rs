//! Route Cache Store Module
//!
//! Bounded map from interaction key to route assignment, with FIFO capacity
//! eviction and explicit staleness sweeps.

use std::collections::HashMap;

use crate::cache::{CacheStats, InsertionOrder, RouteAssignment};
use crate::routing::Resolution;

// == Route Cache ==
/// Bounded interaction-to-route map.
///
/// Capacity eviction removes the entry with the smallest `insert_order`.
/// Staleness eviction only happens when `evict_stale` is called.
#[derive(Debug)]
pub struct RouteCache {
    /// Key to assignment storage
    entries: HashMap<String, RouteAssignment>,
    /// FIFO eviction index
    order: InsertionOrder,
    /// Lifetime counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Next `insert_order` to hand out
    next_seq: u64,
}

impl RouteCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `max_entries` keys.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            next_seq: 0,
        }
    }

    // == Upsert ==
    /// Inserts or refreshes the assignment for `key`.
    ///
    /// Existing keys keep their `insert_order`; route and origin follow the
    /// precedence rule and `last_seen` is always refreshed. New keys that push
    /// the cache over capacity evict the oldest-inserted entry.
    pub fn upsert(&mut self, key: &str, resolution: Resolution, seen_at: u64) {
        if let Some(existing) = self.entries.get_mut(key) {
            let overwritten = existing.refresh(resolution, seen_at);
            self.stats.record_refresh(overwritten);
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries
            .insert(key.to_string(), RouteAssignment::new(resolution, seen_at, seq));
        self.order.push(seq, key);
        self.stats.record_insert();

        while self.entries.len() > self.max_entries {
            match self.order.pop_oldest() {
                Some((_, evicted)) => {
                    self.entries.remove(&evicted);
                    self.stats.record_capacity_eviction();
                }
                None => break,
            }
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Pure lookup. Reads never count as liveness.
    pub fn get(&self, key: &str) -> Option<&RouteAssignment> {
        self.entries.get(key)
    }

    #[cfg(test)]
    fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Evict Stale ==
    /// Removes every entry whose `last_seen` is more than `max_age_ms` before `now`.
    ///
    /// Returns the number of entries removed.
    pub fn evict_stale(&mut self, now: u64, max_age_ms: u64) -> usize {
        let stale: Vec<(String, u64)> = self
            .entries
            .iter()
            .filter(|(_, assignment)| assignment.is_stale(now, max_age_ms))
            .map(|(key, assignment)| (key.clone(), assignment.insert_order))
            .collect();

        let count = stale.len();

        for (key, seq) in stale {
            self.entries.remove(&key);
            self.order.remove(seq);
        }

        self.stats.record_stale_evictions(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Clear ==
    /// Empties the cache and resets the insertion counter.
    ///
    /// Lifetime statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.next_seq = 0;
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

//! Cache Statistics Module
//!
//! Counts inserts, refreshes, precedence rejections and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Lifetime counters for a route cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Keys inserted for the first time
    pub inserts: u64,
    /// Re-observations of an existing key
    pub refreshes: u64,
    /// Re-observations whose route lost on origin precedence
    pub overrides_rejected: u64,
    /// Entries removed to enforce the capacity bound
    pub capacity_evictions: u64,
    /// Entries removed by staleness sweeps
    pub stale_evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Records a refresh; `overwritten` is false when precedence kept the old route.
    pub fn record_refresh(&mut self, overwritten: bool) {
        self.refreshes += 1;
        if !overwritten {
            self.overrides_rejected += 1;
        }
    }

    pub fn record_capacity_eviction(&mut self) {
        self.capacity_evictions += 1;
    }

    pub fn record_stale_evictions(&mut self, count: usize) {
        self.stale_evictions += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

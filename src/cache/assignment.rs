//! Route Assignment Module
//!
//! Defines the stored value for a cached interaction key.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::routing::{Origin, Resolution};

// == Route Assignment ==
/// Resolved route for one interaction key, plus the bookkeeping the cache
/// needs for precedence and eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAssignment {
    /// Low-cardinality route label
    pub route: String,
    /// Origin of the assignment currently held
    pub origin: Origin,
    /// Most recent observation time (Unix milliseconds), never decreases
    pub last_seen: u64,
    /// Sequence number assigned at first insertion; unchanged by refreshes
    pub insert_order: u64,
}

impl RouteAssignment {
    // == Constructor ==
    pub fn new(resolution: Resolution, seen_at: u64, insert_order: u64) -> Self {
        Self {
            route: resolution.route,
            origin: resolution.origin,
            last_seen: seen_at,
            insert_order,
        }
    }

    // == Refresh ==
    /// Applies a re-observation of the same key.
    ///
    /// `last_seen` advances regardless of precedence. Route and origin are
    /// replaced only if the new origin ranks at least as high as the held one.
    ///
    /// # Returns
    /// - `true` if route and origin were replaced
    /// - `false` if the update lost on precedence
    pub fn refresh(&mut self, resolution: Resolution, seen_at: u64) -> bool {
        self.last_seen = self.last_seen.max(seen_at);

        if resolution.origin.outranks_or_equals(self.origin) {
            self.route = resolution.route;
            self.origin = resolution.origin;
            true
        } else {
            false
        }
    }

    // == Staleness ==
    /// True when more than `max_age_ms` has passed since `last_seen`.
    ///
    /// An entry observed exactly `max_age_ms` ago is still fresh.
    pub fn is_stale(&self, now: u64, max_age_ms: u64) -> bool {
        now.saturating_sub(self.last_seen) > max_age_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

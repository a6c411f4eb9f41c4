//! Response DTOs for the route cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::cache::{CacheStats, RouteAssignment};
use crate::routing::Origin;

/// Route assignment as reported to API callers (insertion order omitted).
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub route: String,
    pub origin: Origin,
    pub last_seen: u64,
}

impl From<RouteAssignment> for AssignmentView {
    fn from(assignment: RouteAssignment) -> Self {
        Self {
            route: assignment.route,
            origin: assignment.origin,
            last_seen: assignment.last_seen,
        }
    }
}

/// Response body for POST /interactions
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    /// Assignment per successfully processed key
    pub routes: BTreeMap<String, AssignmentView>,
    /// Number of distinct keys that received no assignment
    pub rejected: usize,
}

impl ProcessResponse {
    pub fn new(routes: HashMap<String, RouteAssignment>, rejected: usize) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|(key, assignment)| (key, assignment.into()))
                .collect(),
            rejected,
        }
    }
}

/// Response body for GET /routes/:key
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub key: String,
    pub route: String,
}

impl RouteResponse {
    pub fn new(key: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            route: route.into(),
        }
    }
}

/// Response body for DELETE /routes
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Entries dropped by the clear
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} routes", cleared),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub inserts: u64,
    pub refreshes: u64,
    pub overrides_rejected: u64,
    pub capacity_evictions: u64,
    pub stale_evictions: u64,
    pub total_entries: usize,
    pub max_entries: usize,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, max_entries: usize) -> Self {
        Self {
            inserts: stats.inserts,
            refreshes: stats.refreshes,
            overrides_rejected: stats.overrides_rejected,
            capacity_evictions: stats.capacity_evictions,
            stale_evictions: stats.stale_evictions,
            total_entries: stats.total_entries,
            max_entries,
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

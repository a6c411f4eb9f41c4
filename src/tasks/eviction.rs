//! Staleness Sweep Task
//!
//! Background task that periodically evicts route assignments that have not
//! been re-observed within the configured max age.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, RouteCache};

/// Spawns a background task that periodically sweeps stale cache entries.
///
/// The task sleeps for `interval_ms` between sweeps and holds the write lock
/// for the duration of each sweep, so a sweep never interleaves with a batch.
///
/// # Arguments
/// * `cache` - Shared reference to the route cache
/// * `interval_ms` - Milliseconds between sweeps
/// * `max_age_ms` - Entries whose `last_seen` is older than this are removed
///
/// # Returns
/// A JoinHandle that can be aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(RouteCache::new(500)));
/// let handle = spawn_eviction_task(cache.clone(), 60_000, 300_000);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_eviction_task(
    cache: Arc<RwLock<RouteCache>>,
    interval_ms: u64,
    max_age_ms: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_millis(interval_ms.max(1));

    tokio::spawn(async move {
        info!(
            "Starting staleness sweep every {}ms (max age {}ms)",
            interval_ms, max_age_ms
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.evict_stale(current_timestamp_ms(), max_age_ms)
            };

            if removed > 0 {
                info!("Staleness sweep: removed {} stale routes", removed);
            } else {
                debug!("Staleness sweep: no stale routes found");
            }
        }
    })
}

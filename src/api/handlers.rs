//! API Handlers
//!
//! HTTP request handlers for each route cache endpoint.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{current_timestamp_ms, CacheAccessor, RouteCache};
use crate::error::{Result, RouteCacheError};
use crate::models::{
    ClearResponse, HealthResponse, ProcessRequest, ProcessResponse, RouteResponse, StatsResponse,
};
use crate::routing::{InteractionBatchMapper, RouteResolver};

/// Application state shared across all handlers.
///
/// The cache is owned here and injected into the sweep task; nothing else
/// holds a reference to its storage.
#[derive(Clone)]
pub struct AppState {
    /// Shared route cache
    pub cache: Arc<RwLock<RouteCache>>,
    /// Batch mapper (stateless)
    pub mapper: InteractionBatchMapper,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: RouteCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            mapper: InteractionBatchMapper::new(RouteResolver::new()),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(RouteCache::new(config.max_entries))
    }
}

/// Handler for POST /interactions
///
/// Resolves a batch of interactions and returns the cached assignment for
/// every key that received one.
pub async fn process_handler(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(RouteCacheError::InvalidRequest(error_msg));
    }

    let received_at = current_timestamp_ms();
    let distinct_keys: HashSet<String> = req.entries.iter().map(|raw| raw.key.clone()).collect();

    let entries = req.into_entries(received_at);

    // Lock held for the whole batch so batches never interleave
    let routes = {
        let mut cache = state.cache.write().await;
        state.mapper.process(&mut cache, &entries)
    };

    let rejected = distinct_keys.len().saturating_sub(routes.len());
    Ok(Json(ProcessResponse::new(routes, rejected)))
}

/// Handler for GET /routes/:key
pub async fn get_route_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RouteResponse>> {
    let cache = state.cache.read().await;
    let accessor = CacheAccessor::new(&cache);

    match accessor.get_route(&key) {
        Some(route) => Ok(Json(RouteResponse::new(key.as_str(), route))),
        None => Err(RouteCacheError::NotFound(key)),
    }
}

/// Handler for DELETE /routes
///
/// Session boundary: drops every assignment and restarts insertion order.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();
    info!("Route cache cleared ({} entries)", cleared);

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(cache.stats(), cache.max_entries()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawInteraction;

    fn raw(key: &str, label: &str, origin: &str, ts: u64) -> RawInteraction {
        RawInteraction {
            key: key.to_string(),
            raw_label: label.to_string(),
            origin: origin.to_string(),
            timestamp: Some(ts),
        }
    }

    #[tokio::test]
    async fn test_process_and_get_route() {
        let state = AppState::new(RouteCache::new(100));

        let req = ProcessRequest {
            entries: vec![raw("span-1", "/users/123/profile", "user", 1)],
        };
        let response = process_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.routes["span-1"].route, "/users/:id/profile");
        assert_eq!(response.rejected, 0);

        let route = get_route_handler(State(state), Path("span-1".to_string()))
            .await
            .unwrap();
        assert_eq!(route.route, "/users/:id/profile");
    }

    #[tokio::test]
    async fn test_process_counts_rejections() {
        let state = AppState::new(RouteCache::new(100));

        let req = ProcessRequest {
            entries: vec![
                raw("a", "", "user", 0),
                raw("b", "/ok", "navigation", 0),
                raw("c", "/y", "user", 0),
            ],
        };
        let response = process_handler(State(state), Json(req)).await.unwrap();
        assert_eq!(response.routes.len(), 1);
        assert!(response.routes.contains_key("c"));
        assert_eq!(response.rejected, 2);
    }

    #[tokio::test]
    async fn test_unknown_origin_in_last_record_rejects_key() {
        let state = AppState::new(RouteCache::new(100));

        let req = ProcessRequest {
            entries: vec![raw("a", "/x/1", "user", 0), raw("a", "/x/2", "bogus", 1)],
        };
        let response = process_handler(State(state.clone()), Json(req)).await.unwrap();

        assert!(response.routes.is_empty());
        assert_eq!(response.rejected, 1);
        assert!(state.cache.read().await.get("a").is_none());
    }

    #[tokio::test]
    async fn test_get_route_not_found() {
        let state = AppState::new(RouteCache::new(100));
        let result = get_route_handler(State(state), Path("missing".to_string())).await;
        assert!(matches!(result, Err(RouteCacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = AppState::new(RouteCache::new(100));
        let req = ProcessRequest {
            entries: vec![raw("a", "/a", "user", 0), raw("b", "/b", "user", 0)],
        };
        let processed = process_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(processed.routes.len(), 2);

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.cleared, 2);
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(RouteCache::new(7));
        let response = stats_handler(State(state)).await;
        assert_eq!(response.inserts, 0);
        assert_eq!(response.max_entries, 7);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

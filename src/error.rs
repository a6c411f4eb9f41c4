//! Error types for the route cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Route Cache Error Enum ==
/// Unified error type for the route cache and its HTTP surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteCacheError {
    /// Malformed interaction entry (bad key, label, or origin)
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// No route assignment for the key
    #[error("Route not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for RouteCacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            RouteCacheError::InvalidEntry(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RouteCacheError::NotFound(_) => StatusCode::NOT_FOUND,
            RouteCacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the route cache.
pub type Result<T> = std::result::Result<T, RouteCacheError>;

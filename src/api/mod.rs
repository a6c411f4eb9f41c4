//! API Module
//!
//! HTTP handlers and routing for the route cache service.
//!
//! # Endpoints
//! - `POST /interactions` - Resolve and cache a batch of interactions
//! - `GET /routes/:key` - Look up the route for a key
//! - `DELETE /routes` - Clear the cache (session boundary)
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

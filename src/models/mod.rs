//! Request and Response models for the route cache API
//!
//! This module defines the DTOs used for serializing/deserializing
//! HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ProcessRequest, RawInteraction, MAX_BATCH_SIZE};
pub use responses::{
    AssignmentView, ClearResponse, HealthResponse, ProcessResponse, RouteResponse, StatsResponse,
};

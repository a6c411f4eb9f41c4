//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Staleness sweep: Removes route assignments not re-observed within the max age

mod eviction;

pub use eviction::spawn_eviction_task;

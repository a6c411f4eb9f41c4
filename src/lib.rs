//! Route Cache - Interaction-to-route mapping for tracing pipelines
//!
//! Maps observed interactions (spans, transactions, user actions, replay events)
//! to low-cardinality route labels, with FIFO capacity eviction and
//! staleness-based cleanup.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod routing;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheAccessor, RouteAssignment, RouteCache};
pub use config::Config;
pub use routing::{InteractionBatchMapper, InteractionEntry, Origin, RouteResolver};
pub use tasks::spawn_eviction_task;

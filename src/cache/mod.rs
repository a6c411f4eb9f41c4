//! Cache Module
//!
//! Bounded route cache with FIFO capacity eviction and staleness sweeps.

mod accessor;
mod assignment;
mod order;
mod stats;
mod store;


// Re-export public types
pub use accessor::CacheAccessor;
pub use assignment::{current_timestamp_ms, RouteAssignment};
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::RouteCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

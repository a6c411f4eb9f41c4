//! Routing Module
//!
//! Interaction records, label normalization and batch mapping into the cache.

mod entry;
mod mapper;
mod resolver;

pub use entry::{InteractionEntry, Origin};
pub(crate) use mapper::dedup_last_wins;
pub use mapper::InteractionBatchMapper;
pub use resolver::{normalize_label, Resolution, RouteResolver, HASH_TOKEN, ID_TOKEN, UUID_TOKEN};

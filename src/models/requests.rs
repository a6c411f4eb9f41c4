//! Request DTOs for the route cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::routing::{dedup_last_wins, InteractionEntry, Origin};

/// Maximum number of interactions accepted in one request
pub const MAX_BATCH_SIZE: usize = 10_000;

/// One interaction as submitted by instrumentation.
///
/// `origin` stays a string here so that a single unknown origin rejects
/// only its own record instead of the whole request body.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInteraction {
    pub key: String,
    pub raw_label: String,
    pub origin: String,
    /// Observation time in Unix milliseconds; defaults to receipt time
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl RawInteraction {
    /// Converts into a typed entry, failing with `InvalidEntry` on an unknown origin.
    pub fn to_entry(&self, received_at: u64) -> Result<InteractionEntry> {
        let origin: Origin = self.origin.parse()?;
        Ok(InteractionEntry {
            key: self.key.clone(),
            raw_label: self.raw_label.clone(),
            origin,
            timestamp: self.timestamp.unwrap_or(received_at),
        })
    }
}

/// Request body for POST /interactions
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub entries: Vec<RawInteraction>,
}

impl ProcessRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.entries.len() > MAX_BATCH_SIZE {
            return Some(format!(
                "Batch exceeds maximum size of {} interactions",
                MAX_BATCH_SIZE
            ));
        }
        None
    }

    // == Into Entries ==
    /// Collapses repeated keys to their last record, then converts each
    /// survivor into a typed entry.
    ///
    /// A key whose last record has an unknown origin is dropped entirely,
    /// even if an earlier record for it was well-formed.
    pub fn into_entries(self, received_at: u64) -> Vec<InteractionEntry> {
        dedup_last_wins(&self.entries, |raw| raw.key.as_str())
            .into_iter()
            .filter_map(|raw| match raw.to_entry(received_at) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(key = %raw.key, "Skipping interaction: {}", err);
                    None
                }
            })
            .collect()
    }
}

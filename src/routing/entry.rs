//! Interaction Entry Module
//!
//! Defines the observed interaction record and the subsystem that produced it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::MAX_KEY_LENGTH;
use crate::error::{Result, RouteCacheError};

// == Origin ==
/// Subsystem that produced an interaction.
///
/// Ordered by precedence: a transaction-derived route outranks a
/// user-derived one, which outranks a replay-derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Transaction,
    Replay,
}

impl Origin {
    /// Numeric rank used to resolve conflicting updates (higher wins).
    pub fn precedence(self) -> u8 {
        match self {
            Origin::Transaction => 2,
            Origin::User => 1,
            Origin::Replay => 0,
        }
    }

    /// True if an update from `self` may replace an assignment from `current`.
    pub fn outranks_or_equals(self, current: Origin) -> bool {
        self.precedence() >= current.precedence()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Transaction => "transaction",
            Origin::Replay => "replay",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = RouteCacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Origin::User),
            "transaction" => Ok(Origin::Transaction),
            "replay" => Ok(Origin::Replay),
            other => Err(RouteCacheError::InvalidEntry(format!(
                "unknown origin '{}'",
                other
            ))),
        }
    }
}

// == Interaction Entry ==
/// A single observed interaction awaiting a route label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEntry {
    /// Identifier unique per distinguishable interaction
    pub key: String,
    /// Unresolved, possibly high-cardinality label (URL path, component name)
    pub raw_label: String,
    /// Subsystem that observed the interaction
    pub origin: Origin,
    /// Observation time (Unix milliseconds)
    pub timestamp: u64,
}

impl InteractionEntry {
    pub fn new(
        key: impl Into<String>,
        raw_label: impl Into<String>,
        origin: Origin,
        timestamp: u64,
    ) -> Self {
        Self {
            key: key.into(),
            raw_label: raw_label.into(),
            origin,
            timestamp,
        }
    }

    // == Validate ==
    /// Checks the key and label constraints.
    ///
    /// The origin needs no check here: it is a closed enum, and unknown
    /// strings are already rejected by `Origin::from_str`.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(RouteCacheError::InvalidEntry("key is empty".to_string()));
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Err(RouteCacheError::InvalidEntry(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if self.raw_label.trim().is_empty() {
            return Err(RouteCacheError::InvalidEntry(format!(
                "raw_label is empty for key '{}'",
                self.key
            )));
        }
        Ok(())
    }
}

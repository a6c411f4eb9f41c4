//! Configuration Module
//!
//! Handles loading cache and server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default capacity bound of the route cache.
pub const DEFAULT_MAX_ENTRIES: usize = 500;
/// Default staleness threshold in milliseconds (5 minutes).
pub const DEFAULT_MAX_AGE_MS: u64 = 5 * 60_000;
/// Default staleness sweep period in milliseconds.
pub const DEFAULT_EVICTION_INTERVAL_MS: u64 = 60_000;
/// Default HTTP port.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Route cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of route assignments the cache can hold
    pub max_entries: usize,
    /// Entries not re-observed within this many milliseconds are swept
    pub max_age_ms: u64,
    /// Period of the background staleness sweep in milliseconds
    pub eviction_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Capacity bound (default: 500)
    /// - `MAX_AGE_MS` - Staleness threshold (default: 300000)
    /// - `EVICTION_INTERVAL_MS` - Sweep period (default: 60000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_entries: env_or("MAX_ENTRIES", DEFAULT_MAX_ENTRIES),
            max_age_ms: env_or("MAX_AGE_MS", DEFAULT_MAX_AGE_MS),
            eviction_interval_ms: env_or("EVICTION_INTERVAL_MS", DEFAULT_EVICTION_INTERVAL_MS),
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_age_ms: DEFAULT_MAX_AGE_MS,
            eviction_interval_ms: DEFAULT_EVICTION_INTERVAL_MS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

//! Route Resolver Module
//!
//! Turns a raw interaction label into a low-cardinality route by collapsing
//! path-parameter-like segments into wildcard tokens.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::routing::{InteractionEntry, Origin};

/// Token substituted for all-digit segments
pub const ID_TOKEN: &str = ":id";
/// Token substituted for UUID segments
pub const UUID_TOKEN: &str = ":uuid";
/// Token substituted for long hex digests
pub const HASH_TOKEN: &str = ":hash";

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

static HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{16,}$").expect("hash pattern is valid"));

// == Resolution ==
/// Output of resolving one interaction entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub route: String,
    pub origin: Origin,
}

// == Route Resolver ==
/// Stateless label normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteResolver;

impl RouteResolver {
    pub fn new() -> Self {
        Self
    }

    // == Resolve ==
    /// Validates `entry` and computes its route.
    ///
    /// Fails with `InvalidEntry` when the key or label is malformed.
    pub fn resolve(&self, entry: &InteractionEntry) -> Result<Resolution> {
        entry.validate()?;

        Ok(Resolution {
            route: normalize_label(&entry.raw_label),
            origin: entry.origin,
        })
    }
}

// == Normalization ==
/// Collapses IDs, UUIDs and hex digests in `raw` into wildcard tokens.
///
/// Query strings and fragments are dropped, repeated slashes collapse and a
/// trailing slash is removed. Labels without a slash are treated as a single
/// segment.
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let path = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or(trimmed);

    if path.is_empty() {
        return "/".to_string();
    }
    if !path.contains('/') {
        return classify_segment(path).to_string();
    }

    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect();

    let mut route = String::with_capacity(path.len());
    if path.starts_with('/') || segments.is_empty() {
        route.push('/');
    }
    route.push_str(&segments.join("/"));
    route
}

fn classify_segment(segment: &str) -> &str {
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        ID_TOKEN
    } else if UUID_PATTERN.is_match(segment) {
        UUID_TOKEN
    } else if HASH_PATTERN.is_match(segment) && segment.bytes().any(|b| b.is_ascii_digit()) {
        HASH_TOKEN
    } else {
        segment
    }
}

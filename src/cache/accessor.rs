//! Cache Accessor Module
//!
//! Read-only facade handed to span-naming code.

use crate::cache::RouteCache;

// == Cache Accessor ==
/// Route lookup over a borrowed cache.
///
/// Exposes only the route label; origin, `last_seen` and insertion order
/// stay internal to the cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheAccessor<'a> {
    cache: &'a RouteCache,
}

impl<'a> CacheAccessor<'a> {
    pub fn new(cache: &'a RouteCache) -> Self {
        Self { cache }
    }

    /// Returns the route for `key`, or `None` when no label is available.
    pub fn get_route(&self, key: &str) -> Option<&'a str> {
        self.cache.get(key).map(|assignment| assignment.route.as_str())
    }
}

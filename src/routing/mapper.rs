//! Interaction Batch Mapper Module
//!
//! Resolves a batch of interactions and folds them into the route cache.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::cache::{RouteAssignment, RouteCache};
use crate::routing::{InteractionEntry, RouteResolver};

// == Interaction Batch Mapper ==
/// Batch front-end over `RouteResolver` and `RouteCache`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionBatchMapper {
    resolver: RouteResolver,
}

impl InteractionBatchMapper {
    pub fn new(resolver: RouteResolver) -> Self {
        Self { resolver }
    }

    // == Process ==
    /// Resolves and upserts every distinct key in `entries`.
    ///
    /// Repeated keys within the batch are collapsed to their last occurrence
    /// before resolving, and are processed at that position. Malformed
    /// entries are logged and skipped. The returned map holds, for each
    /// successfully upserted key, the cache's assignment right after its
    /// upsert, which may be an older higher-precedence value rather than
    /// the one just resolved.
    pub fn process(
        &self,
        cache: &mut RouteCache,
        entries: &[InteractionEntry],
    ) -> HashMap<String, RouteAssignment> {
        let mut results = HashMap::with_capacity(entries.len());

        for entry in dedup_last_wins(entries, |entry| entry.key.as_str()) {
            let resolution = match self.resolver.resolve(entry) {
                Ok(resolution) => resolution,
                Err(err) => {
                    warn!(key = %entry.key, origin = %entry.origin, "Skipping interaction: {}", err);
                    continue;
                }
            };

            cache.upsert(&entry.key, resolution, entry.timestamp);

            if let Some(assignment) = cache.get(&entry.key) {
                results.insert(entry.key.clone(), assignment.clone());
            }
        }

        debug!(
            batch = entries.len(),
            resolved = results.len(),
            cached = cache.len(),
            "Processed interaction batch"
        );

        results
    }
}

/// Keeps only the last occurrence of each key, preserving array order.
pub(crate) fn dedup_last_wins<T, F>(items: &[T], key_of: F) -> Vec<&T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut kept: Vec<&T> = items
        .iter()
        .rev()
        .filter(|item| seen.insert(key_of(*item)))
        .collect();
    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Origin;

    fn mapper() -> InteractionBatchMapper {
        InteractionBatchMapper::new(RouteResolver::new())
    }

    #[test]
    fn test_process_intra_batch_last_wins() {
        let mut cache = RouteCache::new(10);
        let entries = vec![
            InteractionEntry::new("a", "/x/1", Origin::User, 0),
            InteractionEntry::new("a", "/x/2", Origin::Transaction, 1),
        ];

        let routes = mapper().process(&mut cache, &entries);

        assert_eq!(routes.len(), 1);
        let a = &routes["a"];
        assert_eq!(a.route, "/x/:id");
        assert_eq!(a.origin, Origin::Transaction);
        assert_eq!(a.last_seen, 1);
        // Resolved once, so inserted once
        assert_eq!(cache.stats().inserts, 1);
        assert_eq!(cache.stats().refreshes, 0);
    }

    #[test]
    fn test_process_partial_failure() {
        let mut cache = RouteCache::new(10);
        let entries = vec![
            InteractionEntry::new("b", "", Origin::User, 0),
            InteractionEntry::new("c", "/y", Origin::User, 0),
        ];

        let routes = mapper().process(&mut cache, &entries);

        assert_eq!(routes.len(), 1);
        assert!(routes.contains_key("c"));
        assert!(!routes.contains_key("b"));
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_process_returns_cached_higher_precedence_value() {
        let mut cache = RouteCache::new(10);
        mapper().process(
            &mut cache,
            &[InteractionEntry::new("k", "/checkout/7", Origin::Transaction, 10)],
        );

        let routes = mapper().process(
            &mut cache,
            &[InteractionEntry::new("k", "/replayed/path", Origin::Replay, 20)],
        );

        let k = &routes["k"];
        assert_eq!(k.route, "/checkout/:id");
        assert_eq!(k.origin, Origin::Transaction);
        assert_eq!(k.last_seen, 20);
    }

    #[test]
    fn test_process_empty_batch() {
        let mut cache = RouteCache::new(10);
        let routes = mapper().process(&mut cache, &[]);
        assert!(routes.is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_process_batch_larger_than_capacity() {
        let mut cache = RouteCache::new(2);
        let entries: Vec<_> = (0..5)
            .map(|i| InteractionEntry::new(format!("k{}", i), format!("/p/{}", i), Origin::User, i))
            .collect();

        let routes = mapper().process(&mut cache, &entries);

        assert_eq!(routes.len(), 5);
        assert_eq!(cache.len(), 2);
        assert!(cache.get("k3").is_some());
        assert!(cache.get("k4").is_some());
    }

    #[test]
    fn test_dedup_keeps_last_position() {
        let entries = vec![
            InteractionEntry::new("a", "/1", Origin::User, 0),
            InteractionEntry::new("b", "/2", Origin::User, 1),
            InteractionEntry::new("a", "/3", Origin::Replay, 2),
        ];

        let kept = dedup_last_wins(&entries, |e| e.key.as_str());
        let keys: Vec<&str> = kept.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(kept[1].raw_label, "/3");
    }

    #[test]
    fn test_invalid_last_occurrence_skips_key() {
        let mut cache = RouteCache::new(10);
        let entries = vec![
            InteractionEntry::new("a", "/valid", Origin::User, 0),
            InteractionEntry::new("a", " ", Origin::User, 1),
        ];

        let routes = mapper().process(&mut cache, &entries);
        assert!(routes.is_empty());
        assert!(cache.get("a").is_none());
    }
}

//! Insertion Order Module
//!
//! Tracks first-insertion sequence numbers for FIFO capacity eviction.

use std::collections::BTreeMap;

// == Insertion Order ==
/// Index from insertion sequence number to cache key.
///
/// The smallest sequence number is the eviction candidate. Refreshing a key
/// does not touch this index, so eviction order is stable under re-access.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: BTreeMap<u64, String>,
}

impl InsertionOrder {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
        }
    }

    // == Push ==
    /// Records `key` as inserted at sequence number `seq`.
    pub fn push(&mut self, seq: u64, key: &str) {
        self.order.insert(seq, key.to_string());
    }

    // == Remove ==
    /// Forgets the key inserted at `seq`.
    pub fn remove(&mut self, seq: u64) -> Option<String> {
        self.order.remove(&seq)
    }

    // == Pop Oldest ==
    /// Returns and removes the key with the smallest sequence number.
    pub fn pop_oldest(&mut self) -> Option<(u64, String)> {
        self.order.pop_first()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

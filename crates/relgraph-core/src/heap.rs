//! # Priority Queue
//!
//! Max-oriented binary heap used as the path finder's frontier.
//!
//! Entries are ordered by weight alone; the payload never takes part in the
//! comparison, so ties come out in no particular order. There is no
//! decrease-key: callers push a fresh entry and skip stale ones on
//! extraction.

use crate::GraphError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A weighted heap slot. Ordered by `weight` only.
#[derive(Debug, Clone)]
struct Entry<T> {
    weight: f64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// Binary max-heap keyed by an `f64` weight.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    entries: BinaryHeap<Entry<T>>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self {
            entries: BinaryHeap::new(),
        }
    }
}

impl<T> MaxHeap<T> {
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Push an entry. O(log n).
    pub fn insert(&mut self, weight: f64, item: T) {
        self.entries.push(Entry { weight, item });
    }

    /// Remove and return the entry with the largest weight. O(log n).
    ///
    /// Returns `GraphError::EmptyQueue` when there is nothing to extract;
    /// callers are expected to check `is_empty` first.
    pub fn extract_max(&mut self) -> Result<(f64, T), GraphError> {
        self.entries
            .pop()
            .map(|entry| (entry.weight, entry.item))
            .ok_or(GraphError::EmptyQueue)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_descending_weight_order() {
        let mut heap = MaxHeap::new();
        for (weight, item) in [(3.0, 'c'), (9.5, 'x'), (0.0, 's'), (4.25, 'd'), (7.0, 'g')] {
            heap.insert(weight, item);
        }

        let mut weights = Vec::new();
        while !heap.is_empty() {
            let (weight, _) = heap.extract_max().expect("extract");
            weights.push(weight);
        }

        assert_eq!(weights, vec![9.5, 7.0, 4.25, 3.0, 0.0]);
    }

    #[test]
    fn extract_from_empty_heap_fails() {
        let mut heap: MaxHeap<usize> = MaxHeap::new();
        assert_eq!(heap.extract_max(), Err(GraphError::EmptyQueue));
    }

    #[test]
    fn duplicate_payloads_are_kept() {
        let mut heap = MaxHeap::with_capacity(4);
        heap.insert(1.0, 7usize);
        heap.insert(5.0, 7usize);
        assert_eq!(heap.len(), 2);

        assert_eq!(heap.extract_max(), Ok((5.0, 7)));
        assert_eq!(heap.extract_max(), Ok((1.0, 7)));
        assert!(heap.is_empty());
    }

    #[test]
    fn ties_return_every_entry() {
        let mut heap = MaxHeap::new();
        heap.insert(2.0, "a");
        heap.insert(2.0, "b");

        let (w1, first) = heap.extract_max().expect("first");
        let (w2, second) = heap.extract_max().expect("second");
        assert_eq!((w1, w2), (2.0, 2.0));
        assert_ne!(first, second);
    }
}

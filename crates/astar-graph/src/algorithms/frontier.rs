//! Open-set priority queue.
//!
//! A binary min-heap keyed by `(f_score, sequence)`. The sequence number is the
//! push order, so entries with equal `f_score` pop first-in first-out and the
//! search result never depends on hash iteration order.
//!
//! Entries are never updated in place. Pushing a node again with a better score
//! leaves the old entry behind; the search discards it on pop once the node is
//! closed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Single heap entry.
#[derive(Debug, Clone)]
pub struct FrontierEntry<N> {
    /// Estimated total cost through this node.
    pub f_score: f64,
    /// Push order, used as tie-breaker.
    pub sequence: u64,
    /// The node.
    pub node: N,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of nodes ordered by `f_score`, then push order.
#[derive(Debug, Clone)]
pub struct Frontier<N> {
    heap: BinaryHeap<FrontierEntry<N>>,
    next_sequence: u64,
}

impl<N> Default for Frontier<N> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<N> Frontier<N> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node with its estimated total cost.
    pub fn push(&mut self, node: N, f_score: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            f_score,
            sequence,
            node,
        });
    }

    /// Remove and return the entry with the lowest `f_score`.
    pub fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.heap.pop()
    }

    /// Number of entries, including superseded ones.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes so far.
    pub fn pushed(&self) -> u64 {
        self.next_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_score_order() {
        let mut frontier = Frontier::new();
        frontier.push('a', 10.0);
        frontier.push('b', 3.0);
        frontier.push('c', 7.0);

        assert_eq!(frontier.pop().unwrap().node, 'b');
        assert_eq!(frontier.pop().unwrap().node, 'c');
        assert_eq!(frontier.pop().unwrap().node, 'a');
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_ties_pop_in_push_order() {
        let mut frontier = Frontier::new();
        for node in ["first", "second", "third"] {
            frontier.push(node, 1.0);
        }
        frontier.push("cheaper", 0.5);

        assert_eq!(frontier.pop().unwrap().node, "cheaper");
        assert_eq!(frontier.pop().unwrap().node, "first");
        assert_eq!(frontier.pop().unwrap().node, "second");
        assert_eq!(frontier.pop().unwrap().node, "third");
    }

    #[test]
    fn test_duplicate_node_entries() {
        let mut frontier = Frontier::new();
        frontier.push(1, 5.0);
        frontier.push(1, 2.0);

        assert_eq!(frontier.len(), 2);
        let best = frontier.pop().unwrap();
        assert_eq!(best.f_score, 2.0);
        assert_eq!(best.sequence, 1);
        assert_eq!(frontier.pushed(), 2);
    }

    #[test]
    fn test_empty() {
        let mut frontier: Frontier<u32> = Frontier::new();
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }
}

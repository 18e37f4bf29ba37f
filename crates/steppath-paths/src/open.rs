use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::pool::NodeId;

/// Heap entry, ordered by `f` then by insertion sequence.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: i64,
    seq: u64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f the earlier push wins.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Search frontier: a min-priority queue of nodes keyed by f-score.
///
/// Ties are broken first-in first-out, so children pushed in direction
/// order come back out in direction order. There is no decrease-key; a
/// coordinate is pushed at most once per search.
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, f: i64) {
        self.heap.push(OpenEntry {
            f,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }

    /// Remove and return the node with the lowest f-score.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    /// Lowest f-score on the frontier, if any.
    pub fn peek_f(&self) -> Option<i64> {
        self.heap.peek().map(|e| e.f)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::NodePool;
    use steppath_core::{Direction, Point3};

    fn ids(n: i32) -> (NodePool, Vec<NodeId>) {
        let mut pool = NodePool::new();
        let ids = (0..n)
            .map(|i| pool.allocate(None, Direction::North, 0, Point3::new(i, 0, 0)))
            .collect();
        (pool, ids)
    }

    #[test]
    fn pops_lowest_f_first() {
        let (_pool, ids) = ids(3);
        let mut open = OpenSet::new();
        open.push(ids[0], 50);
        open.push(ids[1], 7);
        open.push(ids[2], 300);
        assert_eq!(open.peek_f(), Some(7));
        assert_eq!(open.pop_min(), Some(ids[1]));
        assert_eq!(open.pop_min(), Some(ids[0]));
        assert_eq!(open.pop_min(), Some(ids[2]));
        assert_eq!(open.pop_min(), None);
    }

    #[test]
    fn equal_f_pops_in_push_order() {
        let (_pool, ids) = ids(5);
        let mut open = OpenSet::new();
        for &id in &ids {
            open.push(id, 243);
        }
        let popped: Vec<_> = std::iter::from_fn(|| open.pop_min()).collect();
        assert_eq!(popped, ids);
    }

    #[test]
    fn clear_empties_frontier() {
        let (_pool, ids) = ids(2);
        let mut open = OpenSet::new();
        open.push(ids[0], 1);
        open.push(ids[1], 2);
        assert_eq!(open.len(), 2);
        open.clear();
        assert!(open.is_empty());
        assert_eq!(open.pop_min(), None);
    }
}

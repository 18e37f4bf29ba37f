//! Arena of reusable search nodes.
//!
//! Nodes live in one flat `Vec` and are addressed by [`NodeId`]. Slots
//! `[0, live)` belong to the current search; slots past `live` are free and
//! get overwritten, in order, by subsequent allocations. A reset moves every
//! in-use slot to the free region in O(1) by zeroing `live` and bumping the
//! pool generation, which invalidates all outstanding ids.

use steppath_core::{Direction, Point3};

/// Handle to a node in a [`NodePool`].
///
/// Carries the pool generation it was allocated in, so an id held across a
/// [`NodePool::reset_all`] is recognised as stale instead of silently
/// aliasing whatever node reused the slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Slot index in the pool.
    pub fn index(self) -> usize {
        self.index
    }

    /// Pool generation this id was allocated in.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// A discovered coordinate and how the search reached it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point3,
    /// Steps taken from the start.
    pub g: u32,
    /// Direction of the step from `parent` to this node. Meaningless on the
    /// start node.
    pub came_from: Direction,
    pub parent: Option<NodeId>,
}

/// Recycling allocator for [`SearchNode`]s.
///
/// Not synchronized: one search at a time per pool.
#[derive(Debug, Default)]
pub struct NodePool {
    nodes: Vec<SearchNode>,
    live: usize,
    generation: u32,
}

impl NodePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with room for `capacity` nodes before it grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            live: 0,
            generation: 0,
        }
    }

    /// Hand out a node, reusing a free slot when one exists.
    ///
    /// Every field is overwritten, so nothing from a previous search leaks
    /// into the returned node.
    pub fn allocate(
        &mut self,
        parent: Option<NodeId>,
        came_from: Direction,
        g: u32,
        pos: Point3,
    ) -> NodeId {
        let node = SearchNode {
            pos,
            g,
            came_from,
            parent,
        };
        let index = self.live;
        if index < self.nodes.len() {
            self.nodes[index] = node;
        } else {
            self.nodes.push(node);
        }
        self.live += 1;
        NodeId {
            index,
            generation: self.generation,
        }
    }

    /// Release every in-use node back to the free region. O(1).
    pub fn reset_all(&mut self) {
        self.live = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Look up a node, returning `None` if `id` is stale.
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        if id.generation != self.generation || id.index >= self.live {
            return None;
        }
        self.nodes.get(id.index)
    }

    /// Look up a node allocated during the current search.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &SearchNode {
        debug_assert!(
            id.generation == self.generation && id.index < self.live,
            "stale node id {id:?} (pool generation {}, live {})",
            self.generation,
            self.live
        );
        &self.nodes[id.index]
    }

    /// Nodes allocated since the last reset.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Node records ever created by this pool, in use or free.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Current generation, bumped by every [`reset_all`](Self::reset_all).
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_links_parent() {
        let mut pool = NodePool::new();
        let root = pool.allocate(None, Direction::North, 0, Point3::ZERO);
        let child = pool.allocate(Some(root), Direction::East, 1, Point3::new(1, 0, 0));
        let c = pool.get(child).unwrap();
        assert_eq!(c.parent, Some(root));
        assert_eq!(c.g, 1);
        assert_eq!(c.came_from, Direction::East);
        assert_eq!(pool.live(), 2);
    }

    #[test]
    fn reset_recycles_slots() {
        let mut pool = NodePool::new();
        for i in 0..5 {
            pool.allocate(None, Direction::North, 0, Point3::new(i, 0, 0));
        }
        assert_eq!(pool.capacity(), 5);

        pool.reset_all();
        assert_eq!(pool.live(), 0);
        assert_eq!(pool.capacity(), 5);

        for i in 0..3 {
            pool.allocate(None, Direction::North, 0, Point3::new(0, i, 0));
        }
        // No growth: all three came from the free region.
        assert_eq!(pool.capacity(), 5);
        assert_eq!(pool.live(), 3);
    }

    #[test]
    fn reused_slot_is_fully_overwritten() {
        let mut pool = NodePool::new();
        let root = pool.allocate(None, Direction::North, 0, Point3::ZERO);
        pool.allocate(Some(root), Direction::SouthWest, 9, Point3::new(4, 4, 4));
        pool.reset_all();

        pool.allocate(None, Direction::North, 0, Point3::ZERO);
        let id = pool.allocate(None, Direction::West, 2, Point3::new(-1, 0, 0));
        assert_eq!(
            *pool.get(id).unwrap(),
            SearchNode {
                pos: Point3::new(-1, 0, 0),
                g: 2,
                came_from: Direction::West,
                parent: None,
            }
        );
    }

    #[test]
    fn stale_ids_are_rejected() {
        let mut pool = NodePool::new();
        let old = pool.allocate(None, Direction::North, 0, Point3::ZERO);
        pool.reset_all();
        assert!(pool.get(old).is_none());

        // Same slot, new generation.
        let new = pool.allocate(None, Direction::North, 0, Point3::ZERO);
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(pool.get(old).is_none());
        assert!(pool.get(new).is_some());
    }
}

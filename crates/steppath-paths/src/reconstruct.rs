use steppath_core::Direction;

use crate::pool::{NodeId, NodePool};

/// Build the start-to-target direction sequence.
///
/// `last` is the step from `from` onto the target. Parent links are walked
/// back to the start node, so the result has `g(from) + 1` entries.
pub(crate) fn reconstruct(pool: &NodePool, from: NodeId, last: Direction) -> Vec<Direction> {
    let mut path = Vec::with_capacity(pool.node(from).g as usize + 1);
    path.push(last);

    let mut id = from;
    while let Some(parent) = pool.node(id).parent {
        path.push(pool.node(id).came_from);
        id = parent;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use steppath_core::Point3;

    #[test]
    fn walks_parents_in_order() {
        let mut pool = NodePool::new();
        let a = pool.allocate(None, Direction::North, 0, Point3::ZERO);
        let b = pool.allocate(Some(a), Direction::East, 1, Point3::new(1, 0, 0));
        let c = pool.allocate(Some(b), Direction::SouthEast, 2, Point3::new(2, 1, 0));
        // An unrelated sibling must not show up.
        pool.allocate(Some(a), Direction::West, 1, Point3::new(-1, 0, 0));

        let path = reconstruct(&pool, c, Direction::South);
        assert_eq!(
            path,
            vec![Direction::East, Direction::SouthEast, Direction::South]
        );
    }

    #[test]
    fn from_start_is_single_step() {
        let mut pool = NodePool::new();
        let a = pool.allocate(None, Direction::North, 0, Point3::ZERO);
        assert_eq!(reconstruct(&pool, a, Direction::NorthWest), vec![Direction::NorthWest]);
    }
}

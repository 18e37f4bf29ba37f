use steppath_core::{Direction, Point3};

use crate::context::SearchContext;
use crate::heuristic::heuristic;
use crate::pool::NodeId;
use crate::traits::TryMovementOracle;

/// Result of expanding one frontier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expansion {
    /// A step in this direction from the expanded node lands on the target.
    Reached(Direction),
    /// The target was not met; `discovered` new coordinates were pushed.
    Expanded { discovered: usize },
}

impl SearchContext {
    /// Try all eight directions from `current`, in enumeration order.
    ///
    /// Stops at the first direction that lands on `target`. Otherwise every
    /// legal, not-yet-visited landing coordinate becomes a child node with
    /// `g + 1` and is pushed with `f = g + 1 + h(child, target)`.
    pub(crate) fn expand<O: TryMovementOracle + ?Sized>(
        &mut self,
        current: NodeId,
        target: Point3,
        oracle: &O,
        settings: &O::Settings,
    ) -> Result<Expansion, O::Error> {
        let node = *self.pool.node(current);
        let g = node.g + 1;
        let mut discovered = 0;

        for dir in Direction::ALL {
            let Some(next) = oracle.try_check_movement(node.pos, settings, dir)? else {
                continue;
            };
            if next == target {
                return Ok(Expansion::Reached(dir));
            }
            if !self.visited.add(next) {
                continue;
            }
            let child = self.pool.allocate(Some(current), dir, g, next);
            self.open.push(child, i64::from(g) + heuristic(next, target));
            discovered += 1;
        }

        log::trace!("expanded {} (g={}): {} new", node.pos, node.g, discovered);
        Ok(Expansion::Expanded { discovered })
    }
}

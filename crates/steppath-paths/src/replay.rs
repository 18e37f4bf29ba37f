//! Re-walking a computed path through the movement oracle.
//!
//! Terrain can change between the moment a path is computed and the moment
//! a mover replays it. [`trace_path`] checks every step again and reports
//! the coordinates the mover will pass through, or the first step that is
//! no longer legal.

use std::convert::Infallible;
use std::fmt;

use steppath_core::{Direction, Point3};

use crate::traits::{MovementOracle, TryMovementOracle};

/// Replay the path `dirs` from `start`, returning the coordinate reached
/// after each step.
pub fn trace_path<O: MovementOracle + ?Sized>(
    oracle: &O,
    settings: &O::Settings,
    start: Point3,
    dirs: &[Direction],
) -> Result<Vec<Point3>, ReplayError> {
    try_trace_path(oracle, settings, start, dirs)
}

/// [`trace_path`] with a fallible oracle.
pub fn try_trace_path<O: TryMovementOracle + ?Sized>(
    oracle: &O,
    settings: &O::Settings,
    start: Point3,
    dirs: &[Direction],
) -> Result<Vec<Point3>, ReplayError<O::Error>> {
    let mut trail = Vec::with_capacity(dirs.len());
    let mut at = start;
    for (step, &dir) in dirs.iter().enumerate() {
        match oracle.try_check_movement(at, settings, dir) {
            Ok(Some(next)) => {
                trail.push(next);
                at = next;
            }
            Ok(None) => return Err(ReplayError::Blocked { step, from: at, dir }),
            Err(e) => return Err(ReplayError::Oracle(e)),
        }
    }
    Ok(trail)
}

/// Errors that can occur when replaying a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError<E = Infallible> {
    /// Step number `step` (0-based), from `from` towards `dir`, is illegal.
    Blocked {
        step: usize,
        from: Point3,
        dir: Direction,
    },
    /// The oracle itself failed.
    Oracle(E),
}

impl<E: fmt::Display> fmt::Display for ReplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked { step, from, dir } => {
                write!(f, "path blocked at step {step}: cannot move {dir} from {from}")
            }
            Self::Oracle(e) => write!(f, "movement oracle failed: {e}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ReplayError<E> {}

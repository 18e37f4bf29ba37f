//! Grid pathfinding for creatures moving one step at a time.
//!
//! The engine runs a bounded best-first search from a start coordinate to a
//! target coordinate and returns the path as a sequence of
//! [`Direction`](steppath_core::Direction)s, one per discrete move. Whether
//! a move is legal, and where it lands, is decided entirely by a
//! caller-supplied [`MovementOracle`]; the engine knows nothing about
//! terrain.
//!
//! - **Search** ([`SearchContext::find_path`], [`find_path`]): frontier
//!   ordered by `g + h`, first discovery of a coordinate wins, bounded by
//!   [`SearchConfig::max_iterations`].
//! - **Heuristic** ([`heuristic`]): squared distance with horizontal axes
//!   scaled by 11, integer only.
//! - **Node pooling** ([`NodePool`]): search nodes are recycled between
//!   calls; a reset is O(1).
//! - **Concurrency** ([`ContextPool`]): each concurrent search checks out its
//!   own [`SearchContext`].
//! - **Replay** ([`trace_path`]): re-walk a returned path through the oracle.
//!
//! # Trait hierarchy
//!
//! | Trait | Used by |
//! |---|---|
//! | [`MovementOracle`] | [`SearchContext::find_path`], [`trace_path`] |
//! | [`TryMovementOracle`] (blanket for every [`MovementOracle`]) | [`SearchContext::try_find_path`], [`try_trace_path`] |
//! | [`SearchObserver`] | [`SearchContext::find_path_observed`] |

mod astar;
mod config;
mod context;
mod expander;
mod heuristic;
mod observer;
mod open;
mod pool;
mod reconstruct;
mod replay;
mod traits;
mod visited;

pub use astar::find_path;
pub use config::{DEFAULT_MAX_ITERATIONS, SearchConfig};
pub use context::{ContextPool, PooledContext, SearchContext};
pub use heuristic::{HORIZONTAL_SCALE, heuristic};
pub use observer::{NoObserver, SearchObserver, SearchOutcome, SearchStats};
pub use open::OpenSet;
pub use pool::{NodeId, NodePool, SearchNode};
pub use replay::{ReplayError, trace_path, try_trace_path};
pub use traits::{FnOracle, MovementOracle, TryMovementOracle, from_fn};
pub use visited::VisitedIndex;

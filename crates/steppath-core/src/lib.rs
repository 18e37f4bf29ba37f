//! **steppath-core** — shared geometry contract for grid pathfinding.
//!
//! This crate provides the two types every participant in a path query must
//! agree on: the integer world coordinate [`Point3`] and the eight-way
//! compass [`Direction`], whose numeric order is stable and part of the
//! public contract. A search engine returns paths as sequences of
//! directions, and whoever replays those paths one step at a time reads
//! them back with the same enumeration.

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::Point3;

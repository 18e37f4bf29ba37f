//! Geometry primitive: [`Point3`].
//!
//! X grows east, Y grows south, Z is elevation. Coordinates are plain `i32`
//! so that heuristic arithmetic stays integral and deterministic.

use std::fmt;
use std::ops::{Add, Sub};

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Point3
// ---------------------------------------------------------------------------

/// A 3D integer world coordinate.
///
/// Equality and hashing use all three components, so two points on the same
/// column but at different elevations are distinct.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return a point shifted by (dx, dy, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Return the point one step away in `dir`, keeping the elevation.
    ///
    /// This is only the planar displacement; whether the step is legal and
    /// where it lands vertically is decided by a movement oracle.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.shift(dx, dy, 0)
    }

    /// Same point with a different elevation.
    #[inline]
    pub const fn with_z(self, z: i32) -> Self {
        Self { z, ..self }
    }
}

// --- trait impls for Point3 ---

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Point3 {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point3_round_trip() {
        let p = Point3::new(1200, -45, 20);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

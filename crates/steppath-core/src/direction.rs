//! The eight compass directions and their stable numeric order.
//!
//! The discriminants 0..7 are a wire-level contract: search tie-breaking
//! iterates [`Direction::ALL`] in this order, and path consumers decode
//! returned sequences with it.

use std::fmt;

/// One of the eight grid directions, clockwise from north.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    #[default]
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Numeric value of the direction (0..=7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Decode a numeric direction. Returns `None` for values above 7.
    #[inline]
    pub const fn from_index(i: u8) -> Option<Self> {
        if (i as usize) < Self::ALL.len() {
            Some(Self::ALL[i as usize])
        } else {
            None
        }
    }

    /// Planar displacement `(dx, dy)` of one step. Y grows south.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[((self as u8 + 4) & 7) as usize]
    }

    /// Whether this is one of the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self as u8 & 1 == 1
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        Self::from_index(value).ok_or(value)
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> Self {
        d.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::NorthEast => "northeast",
            Direction::East => "east",
            Direction::SouthEast => "southeast",
            Direction::South => "south",
            Direction::SouthWest => "southwest",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
        };
        f.write_str(name)
    }
}

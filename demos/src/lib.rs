//! Terrain map shared by the steppath demos.
//!
//! A [`TerrainMap`] is parsed from ASCII art and implements
//! [`MovementOracle`], so it can be searched directly:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | ground at elevation 0 |
//! | `0`-`9` | ground at that elevation |
//! | `~` | water at elevation 0, needs [`Mover::swim`] |
//! | `S`, `T` | ground at elevation 0, marked as start / target |

use std::fmt;

use steppath_core::{Direction, Point3};
use steppath_paths::MovementOracle;

/// One map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Ground(i32),
    Water,
}

impl Tile {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' | 'S' | 'T' => Some(Tile::Ground(0)),
            '~' => Some(Tile::Water),
            '0'..='9' => ch.to_digit(10).map(|d| Tile::Ground(d as i32)),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Ground(0) => '.',
            Tile::Ground(z) => char::from_digit(z.clamp(0, 9) as u32, 10).unwrap_or('?'),
            Tile::Water => '~',
        }
    }
}

/// Movement abilities passed as oracle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mover {
    /// Largest elevation change allowed in one step.
    pub climb: i32,
    pub swim: bool,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            climb: 1,
            swim: false,
        }
    }
}

/// A rectangular terrain grid with elevations.
#[derive(Debug, Clone)]
pub struct TerrainMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    start: Option<Point3>,
    target: Option<Point3>,
}

impl TerrainMap {
    /// Parse a map. Lines must all have the same width; surrounding
    /// whitespace of the whole string is ignored.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let mut tiles = Vec::new();
        let mut width = None;
        let mut start = None;
        let mut target = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let line = line.trim_end();
            let w = line.chars().count() as i32;
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            for (x, ch) in line.chars().enumerate() {
                let x = x as i32;
                let tile = Tile::from_char(ch).ok_or(MapError::InvalidChar { ch, x, y })?;
                match ch {
                    'S' => start = Some(Point3::new(x, y, 0)),
                    'T' => target = Some(Point3::new(x, y, 0)),
                    _ => {}
                }
                tiles.push(tile);
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            tiles,
            start,
            target,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Position marked `S`, if any.
    pub fn start(&self) -> Option<Point3> {
        self.start
    }

    /// Position marked `T`, if any.
    pub fn target(&self) -> Option<Point3> {
        self.target
    }

    /// Tile at column `x`, row `y`; `None` outside the map.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get((y * self.width + x) as usize).copied()
    }

    /// Standing position on every ground tile, in row-major order.
    pub fn ground(&self) -> Vec<Point3> {
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(Tile::Ground(z)) = self.tile(x, y) {
                    out.push(Point3::new(x, y, z));
                }
            }
        }
        out
    }

    /// Elevation a mover would stand at on (x, y), if it may enter at all.
    fn enter(&self, x: i32, y: i32, mover: &Mover) -> Option<i32> {
        match self.tile(x, y)? {
            Tile::Wall => None,
            Tile::Ground(z) => Some(z),
            Tile::Water => mover.swim.then_some(0),
        }
    }

    /// Draw the map with `trail` marked as `*`, `start` as `S` and the last
    /// trail position as `T`.
    pub fn render(&self, start: Point3, trail: &[Point3]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.tile(x, y).map_or(' ', Tile::to_char))
                    .collect()
            })
            .collect();
        let mut mark = |p: Point3, c: char| {
            if let Some(cell) = rows
                .get_mut(p.y as usize)
                .and_then(|row| row.get_mut(p.x as usize))
            {
                *cell = c;
            }
        };
        for &p in trail {
            mark(p, '*');
        }
        mark(start, 'S');
        if let Some(&end) = trail.last() {
            mark(end, 'T');
        }
        rows.into_iter()
            .map(|r| r.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MovementOracle for TerrainMap {
    type Settings = Mover;

    fn check_movement(&self, from: Point3, mover: &Mover, dir: Direction) -> Option<Point3> {
        let to = from.step(dir);
        let z = self.enter(to.x, to.y, mover)?;
        if (z - from.z).abs() > mover.climb {
            return None;
        }
        // No cutting corners past walls.
        if dir.is_diagonal() {
            self.enter(to.x, from.y, mover)?;
            self.enter(from.x, to.y, mover)?;
        }
        Some(to.with_z(z))
    }
}

/// Errors that can occur when parsing a [`TerrainMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    Empty,
    /// Line `line` (0-based) differs in width from the first line.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    InvalidChar { ch: char, x: i32, y: i32 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map line {line} is {found} wide, expected {expected}"
            ),
            Self::InvalidChar { ch, x, y } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use steppath_paths::{SearchConfig, find_path, trace_path};

    const HILL: &str = "
#########
#S..1...#
#...2...#
#..~3~..#
#...2..T#
#########
";

    #[test]
    fn parse_markers_and_size() {
        let map = TerrainMap::parse(HILL).unwrap();
        assert_eq!(map.width(), 9);
        assert_eq!(map.height(), 6);
        assert_eq!(map.start(), Some(Point3::new(1, 1, 0)));
        assert_eq!(map.target(), Some(Point3::new(7, 4, 0)));
        assert_eq!(map.tile(4, 3), Some(Tile::Ground(3)));
        assert_eq!(map.tile(3, 3), Some(Tile::Water));
        assert_eq!(map.tile(9, 0), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(TerrainMap::parse("  \n ").unwrap_err(), MapError::Empty);
        assert_eq!(
            TerrainMap::parse("###\n##\n###").unwrap_err(),
            MapError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
        let err = TerrainMap::parse("#.#\n#x#").unwrap_err();
        assert_eq!(err, MapError::InvalidChar { ch: 'x', x: 1, y: 1 });
        assert_eq!(
            err.to_string(),
            "map contains invalid character \u{201c}x\u{201d} at (1, 1)"
        );
    }

    #[test]
    fn climb_limits_steps() {
        let map = TerrainMap::parse("#####\n#.3.#\n#####").unwrap();
        let from = Point3::new(1, 1, 0);
        assert_eq!(map.check_movement(from, &Mover::default(), Direction::East), None);
        let climber = Mover {
            climb: 3,
            swim: false,
        };
        assert_eq!(
            map.check_movement(from, &climber, Direction::East),
            Some(Point3::new(2, 1, 3))
        );
    }

    #[test]
    fn no_corner_cutting() {
        let map = TerrainMap::parse("....\n.#..\n....").unwrap();
        // (0,1) -> (1,0) would squeeze past the wall at (1,1).
        let from = Point3::new(0, 1, 0);
        assert_eq!(map.check_movement(from, &Mover::default(), Direction::NorthEast), None);
        assert_eq!(
            map.check_movement(Point3::new(2, 0, 0), &Mover::default(), Direction::SouthEast),
            Some(Point3::new(3, 1, 0))
        );
    }

    #[test]
    fn swimmer_takes_the_water() {
        let map = TerrainMap::parse(
            "
#######
#S~~~T#
#.###.#
#.....#
#######
",
        )
        .unwrap();
        let (start, target) = (map.start().unwrap(), map.target().unwrap());
        let cfg = SearchConfig::default();

        let walker = find_path(start, target, &map, &Mover::default(), &cfg).unwrap();
        let swimmer = Mover {
            climb: 1,
            swim: true,
        };
        let swim = find_path(start, target, &map, &swimmer, &cfg).unwrap();
        assert_eq!(swim, vec![Direction::East; 4]);
        assert!(walker.len() > swim.len());

        let trail = trace_path(&map, &Mover::default(), start, &walker).unwrap();
        assert_eq!(trail.last(), Some(&target));
        assert!(trail.iter().all(|p| map.tile(p.x, p.y) == Some(Tile::Ground(0))));
    }

    #[test]
    fn hill_path_lands_on_target() {
        let map = TerrainMap::parse(HILL).unwrap();
        let (start, target) = (map.start().unwrap(), map.target().unwrap());
        let path = find_path(start, target, &map, &Mover::default(), &SearchConfig::default())
            .unwrap();
        let trail = trace_path(&map, &Mover::default(), start, &path).unwrap();
        assert_eq!(trail.last(), Some(&target));
        let drawn = map.render(start, &trail);
        assert_eq!(drawn.lines().count(), 6);
        assert_eq!(drawn.matches('S').count(), 1);
        assert_eq!(drawn.matches('T').count(), 1);
    }
}

use core::fmt;
use smallvec::SmallVec;
use std::ops::Add;

/// Offsets of the von Neumann neighbourhood in search order: up, down, left, right.
pub const NEUMANN_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(1, 0),
];

/// A `(column, row)` location on the grid. Doubles as the node identity during search.
///
/// Components are signed so that off-grid locations can be expressed and rejected
/// by [GridMap](crate::grid_map::GridMap) instead of silently wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), the exact move count
    /// between two points on an unobstructed 4-grid.
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four axis-aligned neighbours, ordered as [NEUMANN_OFFSETS]. Bounds are not checked.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; 4]> {
        NEUMANN_OFFSETS.iter().map(|&offset| *self + offset).collect()
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Coordinate {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

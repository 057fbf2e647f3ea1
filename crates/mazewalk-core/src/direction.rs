//! Cardinal directions on the maze grid.

use std::fmt::{self, Display};

/// One of the four grid directions a passage can lead to.
///
/// North points towards smaller `y`, West towards smaller `x`.
///
/// # Examples
///
/// ```
/// use mazewalk_core::Direction;
///
/// assert_eq!(Direction::North.flip(), Direction::South);
/// assert_eq!(Direction::East.flip(), Direction::West);
///
/// for dir in Direction::ALL {
///     assert_eq!(dir.flip().flip(), dir);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards the previous row.
    North,
    /// Towards the next column.
    East,
    /// Towards the next row.
    South,
    /// Towards the previous column.
    West,
}

impl Direction {
    /// All directions in clockwise order starting from North.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Order in which the maze builder collects unvisited neighbors.
    pub const BUILD_ORDER: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Priority order in which the maze solver probes open passages.
    pub const SOLVE_ORDER: [Self; 4] = [Self::South, Self::East, Self::North, Self::West];

    /// Returns the opposite direction (North↔South, East↔West).
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the `(dx, dy)` offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Returns the direction's name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

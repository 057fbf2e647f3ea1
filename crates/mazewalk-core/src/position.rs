//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate, `x` growing eastwards and `y` growing southwards.
///
/// # Examples
///
/// ```
/// use mazewalk_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x, 3);
/// assert_eq!(pos.to_string(), "(3, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Position {
    /// Creates a position from column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

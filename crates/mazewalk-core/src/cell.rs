//! Per-cell state flags.

use crate::Direction;

bitflags::bitflags! {
    /// Raw bit layout of a [`Cell`].
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// Passage open towards North.
        const NORTH = 0b0000_0001;
        /// Passage open towards East.
        const EAST = 0b0000_0010;
        /// Passage open towards South.
        const SOUTH = 0b0000_0100;
        /// Passage open towards West.
        const WEST = 0b0000_1000;
        /// The builder has reached this cell. Never cleared.
        const BUILD_VISITED = 0b0001_0000;
        /// The solver has reached this cell. Never cleared.
        const SOLVE_VISITED = 0b0010_0000;
        /// The cell is on the solver's current route.
        const ON_PATH = 0b0100_0000;
    }
}

impl CellFlags {
    const fn passage(dir: Direction) -> Self {
        match dir {
            Direction::North => Self::NORTH,
            Direction::East => Self::EAST,
            Direction::South => Self::SOUTH,
            Direction::West => Self::WEST,
        }
    }
}

/// State of a single maze cell.
///
/// A cell stores which of its four sides are open, whether the builder and the
/// solver have visited it, and whether it is on the solver's active route.
/// Flags are only changed through the named mutators below; opening a passage
/// is done through [`Grid::open_passage`](crate::Grid::open_passage) so that both
/// sides of a wall stay consistent.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Cell, Direction};
///
/// let mut cell = Cell::new();
/// assert!(!cell.is_build_visited());
///
/// cell.set_build_visited();
/// assert!(cell.is_build_visited());
/// assert!(!cell.has_passage(Direction::North));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    flags: CellFlags,
}

impl Cell {
    /// Creates a cell with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: CellFlags::empty(),
        }
    }

    /// Returns the raw flags.
    #[must_use]
    pub const fn flags(self) -> CellFlags {
        self.flags
    }

    /// Returns `true` if the side facing `dir` is open.
    #[must_use]
    pub const fn has_passage(self, dir: Direction) -> bool {
        self.flags.contains(CellFlags::passage(dir))
    }

    /// Returns the open sides in [`Direction::ALL`] order.
    pub fn passages(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.has_passage(dir))
    }

    /// Returns `true` if the builder has reached this cell.
    #[must_use]
    pub const fn is_build_visited(self) -> bool {
        self.flags.contains(CellFlags::BUILD_VISITED)
    }

    /// Returns `true` if the solver has reached this cell.
    #[must_use]
    pub const fn is_solve_visited(self) -> bool {
        self.flags.contains(CellFlags::SOLVE_VISITED)
    }

    /// Returns `true` if the cell is on the solver's current route.
    #[must_use]
    pub const fn is_on_path(self) -> bool {
        self.flags.contains(CellFlags::ON_PATH)
    }

    pub(crate) fn open(&mut self, dir: Direction) {
        self.flags.insert(CellFlags::passage(dir));
    }

    /// Marks the cell as reached by the builder.
    pub fn set_build_visited(&mut self) {
        self.flags.insert(CellFlags::BUILD_VISITED);
    }

    /// Marks the cell as reached by the solver.
    pub fn set_solve_visited(&mut self) {
        self.flags.insert(CellFlags::SOLVE_VISITED);
    }

    /// Puts the cell on the solver's current route.
    pub fn set_on_path(&mut self) {
        self.flags.insert(CellFlags::ON_PATH);
    }

    /// Takes the cell off the solver's current route.
    pub fn clear_on_path(&mut self) {
        self.flags.remove(CellFlags::ON_PATH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new();
        assert_eq!(cell.flags(), CellFlags::empty());
        assert_eq!(cell.passages().count(), 0);
    }

    #[test]
    fn test_open_sets_only_that_side() {
        let mut cell = Cell::new();
        cell.open(Direction::East);
        assert!(cell.has_passage(Direction::East));
        assert!(!cell.has_passage(Direction::West));
        assert_eq!(cell.passages().collect::<Vec<_>>(), [Direction::East]);
    }

    #[test]
    fn test_on_path_is_cleared_independently() {
        let mut cell = Cell::new();
        cell.set_solve_visited();
        cell.set_on_path();
        assert!(cell.is_on_path());

        cell.clear_on_path();
        assert!(!cell.is_on_path());
        assert!(cell.is_solve_visited());
    }
}

//! Rectangular maze grid.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Cell, Direction, Position};

/// Error returned when a grid cannot be created with the requested shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// Width or height is zero.
    #[display("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// `width * height` does not fit in `usize`.
    #[display("grid of {width}x{height} cells is too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Error returned when parsing a grid from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contains no lines.
    #[display("maze text is empty")]
    Empty,
    /// A line has a different length from the first one.
    #[display("line {line} has a different length from the first line")]
    Ragged {
        /// Zero-based line number, blank lines excluded.
        line: usize,
    },
    /// The text does not describe a `(2w+1) x (2h+1)` character block.
    #[display("maze text of {columns}x{rows} characters does not describe a grid")]
    BadDimensions {
        /// Characters per line.
        columns: usize,
        /// Number of lines.
        rows: usize,
    },
    /// A wall on the outer boundary is missing.
    #[display("outer wall is open at line {line}, column {column}")]
    OpenBoundary {
        /// Zero-based line number.
        line: usize,
        /// Zero-based column.
        column: usize,
    },
    /// The described grid is invalid.
    #[display("invalid grid: {_0}")]
    InvalidGrid(GridError),
}

/// A `width x height` grid of [`Cell`]s stored in row-major order.
///
/// Cell `0` is the top-left corner and serves as the maze entry; the last cell
/// (`width * height - 1`, bottom-right) is the goal.
///
/// Passages are always opened on both sides at once, so for every cell `c` and
/// direction `d`, `has_passage(c, d)` implies
/// `has_passage(neighbor(c, d), d.flip())`.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Direction, Grid, Position};
///
/// let mut grid = Grid::new(3, 2)?;
/// let idx = grid.to_index(Position::new(1, 1));
/// assert_eq!(idx, 4);
/// assert_eq!(grid.to_position(idx), Position::new(1, 1));
///
/// assert_eq!(grid.neighbor(idx, Direction::South), None);
/// assert_eq!(grid.neighbor(idx, Direction::West), Some(3));
///
/// grid.open_passage(idx, Direction::West);
/// assert!(grid.has_passage(3, Direction::East));
/// # Ok::<(), mazewalk_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell cleared.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimension`] if `width` or `height` is zero and
    /// [`GridError::TooLarge`] if the cell count overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); len],
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the entry cell.
    #[must_use]
    pub fn entry(&self) -> usize {
        0
    }

    /// Index of the goal cell.
    #[must_use]
    pub fn goal(&self) -> usize {
        self.cells.len() - 1
    }

    /// Converts a position into a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    #[track_caller]
    pub fn to_index(&self, pos: Position) -> usize {
        assert!(
            pos.x < self.width && pos.y < self.height,
            "position {pos} is outside the {}x{} grid",
            self.width,
            self.height
        );
        pos.y * self.width + pos.x
    }

    /// Converts a cell index into its position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn to_position(&self, index: usize) -> Position {
        self.check_index(index);
        Position::new(index % self.width, index / self.width)
    }

    /// Returns the index of the cell next to `index` in direction `dir`.
    ///
    /// Returns `None` when the step would leave the grid; there is no wraparound.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        let Position { x, y } = self.to_position(index);
        let next = match dir {
            Direction::North => Position::new(x, y.checked_sub(1)?),
            Direction::West => Position::new(x.checked_sub(1)?, y),
            Direction::East if x + 1 < self.width => Position::new(x + 1, y),
            Direction::South if y + 1 < self.height => Position::new(x, y + 1),
            Direction::East | Direction::South => return None,
        };
        Some(next.y * self.width + next.x)
    }

    /// Returns the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn cell(&self, index: usize) -> Cell {
        self.check_index(index);
        self.cells[index]
    }

    /// Returns a mutable reference to the cell at `index`.
    ///
    /// Passages cannot be opened through this reference; use
    /// [`open_passage`](Self::open_passage).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        self.check_index(index);
        &mut self.cells[index]
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns `true` if the side of `index` facing `dir` is open.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn has_passage(&self, index: usize, dir: Direction) -> bool {
        self.cell(index).has_passage(dir)
    }

    /// Opens the wall between `index` and its neighbor in direction `dir`.
    ///
    /// Both sides are updated together.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or `dir` points outside the grid.
    #[track_caller]
    pub fn open_passage(&mut self, index: usize, dir: Direction) {
        let Some(other) = self.neighbor(index, dir) else {
            panic!(
                "cannot open a passage {dir} of {} on the grid edge",
                self.to_position(index)
            );
        };
        self.cells[index].open(dir);
        self.cells[other].open(dir.flip());
    }

    /// Returns the number of open passages, each wall counted once.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                usize::from(cell.has_passage(Direction::East))
                    + usize::from(cell.has_passage(Direction::South))
            })
            .sum()
    }

    /// Clears every flag of every cell, keeping the shape.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::new());
    }

    #[track_caller]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.cells.len(),
            "cell index {index} is outside the {}x{} grid",
            self.width,
            self.height
        );
    }

    fn wall_char(&self, y: usize, x: usize) -> char {
        let open = if y < self.height {
            self.cells[y * self.width + x].has_passage(Direction::North)
        } else {
            self.cells[(y - 1) * self.width + x].has_passage(Direction::South)
        };
        if open { ' ' } else { '-' }
    }
}

/// Renders the grid as ASCII art.
///
/// Walls are drawn with `-` and `|`, corners with `+`. Cells on the solver's
/// current route are marked with `*`.
///
/// ```text
/// +-+-+
/// |* *|
/// +-+ +
/// |  *|
/// +-+-+
/// ```
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..=self.height {
            f.write_char('+')?;
            for x in 0..self.width {
                f.write_char(self.wall_char(y, x))?;
                f.write_char('+')?;
            }
            if y == self.height {
                break;
            }
            f.write_char('\n')?;

            f.write_char('|')?;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                f.write_char(if cell.is_on_path() { '*' } else { ' ' })?;
                f.write_char(if cell.has_passage(Direction::East) {
                    ' '
                } else {
                    '|'
                })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Parses the ASCII art produced by [`Display`].
///
/// Blank lines and the indentation common to all other lines are ignored.
/// Trailing spaces are kept: a space at a wall position, including an outer
/// wall, opens the passage; any other character is a wall. Cell contents are ignored. Every parsed cell is marked as
/// build-visited.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Direction, Grid};
///
/// let grid: Grid = "
///     +-+-+
///     |   |
///     +-+-+
/// "
/// .parse()?;
/// assert_eq!((grid.width(), grid.height()), (2, 1));
/// assert!(grid.has_passage(0, Direction::East));
/// # Ok::<(), mazewalk_core::ParseGridError>(())
/// ```
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();
        let indent = lines
            .iter()
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or(0);
        let lines = lines
            .iter()
            .map(|line| &line.as_bytes()[indent..])
            .collect::<Vec<_>>();
        let Some(first) = lines.first() else {
            return Err(ParseGridError::Empty);
        };
        let columns = first.len();
        let rows = lines.len();
        if let Some(line) = lines.iter().position(|line| line.len() != columns) {
            return Err(ParseGridError::Ragged { line });
        }
        if columns < 3 || rows < 3 || columns % 2 == 0 || rows % 2 == 0 {
            return Err(ParseGridError::BadDimensions { columns, rows });
        }

        let is_open = |line: usize, column: usize| lines[line][column] == b' ';
        for column in (1..columns).step_by(2) {
            for line in [0, rows - 1] {
                if is_open(line, column) {
                    return Err(ParseGridError::OpenBoundary { line, column });
                }
            }
        }
        for line in (1..rows).step_by(2) {
            for column in [0, columns - 1] {
                if is_open(line, column) {
                    return Err(ParseGridError::OpenBoundary { line, column });
                }
            }
        }

        let mut grid =
            Grid::new((columns - 1) / 2, (rows - 1) / 2).map_err(ParseGridError::InvalidGrid)?;
        for y in 0..grid.height {
            for x in 0..grid.width {
                let index = y * grid.width + x;
                grid.cells[index].set_build_visited();
                if x + 1 < grid.width && is_open(2 * y + 1, 2 * x + 2) {
                    grid.open_passage(index, Direction::East);
                }
                if y + 1 < grid.height && is_open(2 * y + 2, 2 * x + 1) {
                    grid.open_passage(index, Direction::South);
                }
            }
        }
        Ok(grid)
    }
}

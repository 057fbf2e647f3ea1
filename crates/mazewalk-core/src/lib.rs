//! Core data structures for maze generation and solving.
//!
//! This crate provides the grid model shared by the maze builder, the maze
//! solver and the phase controller.
//!
//! # Overview
//!
//! - [`direction`]: the four cardinal [`Direction`]s and their scan orders
//! - [`position`]: `(x, y)` [`Position`] coordinates
//! - [`cell`]: per-cell [`Cell`] flags (passages, visited marks, on-path mark)
//! - [`grid`]: the row-major [`Grid`] with index/coordinate mapping, bounded
//!   neighbor lookup and symmetric passage carving
//! - [`frontier`]: the LIFO [`Frontier`] used by both algorithms
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::{Direction, Frontier, Grid};
//!
//! let mut grid = Grid::new(2, 1)?;
//! let mut frontier = Frontier::new();
//!
//! grid.cell_mut(0).set_build_visited();
//! frontier.push(grid.entry());
//!
//! let next = grid.neighbor(0, Direction::East).unwrap();
//! grid.open_passage(0, Direction::East);
//! grid.cell_mut(next).set_build_visited();
//! frontier.push(next);
//!
//! assert!(grid.has_passage(next, Direction::West));
//! assert_eq!(frontier.as_slice(), &[0, 1]);
//! # Ok::<(), mazewalk_core::GridError>(())
//! ```

pub mod cell;
pub mod direction;
pub mod frontier;
pub mod grid;
pub mod position;

pub use self::{
    cell::{Cell, CellFlags},
    direction::Direction,
    frontier::Frontier,
    grid::{Grid, GridError, ParseGridError},
    position::Position,
};

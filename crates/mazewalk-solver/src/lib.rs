//! Maze solving by depth-first search with backtracking.
//!
//! [`MazeSolver`] walks from the entry cell to the goal cell through the
//! passages of a built maze, one cell per [`step`](MazeSolver::step), keeping
//! the active route on a [`Frontier`](mazewalk_core::Frontier) and marking it
//! with the cells' on-path flag.
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::Grid;
//!
//! let mut grid: Grid = "
//!     +-+-+
//!     |   |
//!     +-+ +
//!     |   |
//!     +-+-+
//! "
//! .parse()?;
//!
//! let path = mazewalk_solver::solve(&mut grid);
//! assert_eq!(path, [0, 1, 3]);
//! # Ok::<(), mazewalk_core::ParseGridError>(())
//! ```

use mazewalk_core::{Frontier, Grid};

pub use self::solver::{MazeSolver, SolveStats, SolveStep};

mod solver;
pub mod testing;

/// Solves a built maze and returns the route from entry to goal.
///
/// Solver marks are left on `grid`.
///
/// # Panics
///
/// Panics if the goal is unreachable from the entry cell.
#[must_use]
pub fn solve(grid: &mut Grid) -> Vec<usize> {
    let mut frontier = Frontier::with_capacity(grid.len());
    let solver = MazeSolver::new();
    solver.begin(grid, &mut frontier);
    solver.run(grid, &mut frontier);
    frontier.as_slice().to_vec()
}

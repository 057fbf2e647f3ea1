//! Perfect maze generation.
//!
//! This crate carves a spanning tree of passages over a
//! [`Grid`](mazewalk_core::Grid) with the randomized depth-first
//! "recursive backtracker" algorithm.
//!
//! - [`MazeBuilder`] performs the construction one cell at a time.
//! - [`Chooser`] abstracts the uniform random choice among unvisited neighbors;
//!   [`RngChooser`] is the seeded implementation used in practice.
//! - [`MazeSeed`] makes a generated maze reproducible.
//!
//! # Examples
//!
//! ```
//! use mazewalk_generator::{MazeSeed, RngChooser};
//!
//! let mut chooser = RngChooser::with_seed(MazeSeed::from_phrase("readme"));
//! let grid = mazewalk_generator::generate(6, 4, &mut chooser)?;
//!
//! assert_eq!(grid.passage_count(), 6 * 4 - 1);
//! println!("{grid}");
//! # Ok::<(), mazewalk_core::GridError>(())
//! ```

use mazewalk_core::{Frontier, Grid, GridError};

pub use self::{
    builder::{BuildStats, BuildStep, MazeBuilder},
    chooser::{Chooser, RngChooser},
    seed::{MazeSeed, ParseSeedError},
};

mod builder;
mod chooser;
mod seed;

/// Creates a `width x height` grid and builds a complete maze on it.
///
/// # Errors
///
/// Returns an error if the grid dimensions are invalid.
pub fn generate<C>(width: usize, height: usize, chooser: C) -> Result<Grid, GridError>
where
    C: Chooser,
{
    let mut grid = Grid::new(width, height)?;
    let mut frontier = Frontier::with_capacity(grid.len());
    let mut builder = MazeBuilder::new(chooser);
    builder.begin(&mut grid, &mut frontier);
    builder.run(&mut grid, &mut frontier);
    Ok(grid)
}

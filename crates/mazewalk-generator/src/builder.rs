//! Randomized depth-first maze construction.

use mazewalk_core::{Direction, Frontier, Grid};

use crate::Chooser;

/// Outcome of a single [`MazeBuilder::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    /// A wall was removed and the builder moved into a new cell.
    Carved {
        /// Cell the builder came from.
        from: usize,
        /// Newly visited cell, now on top of the frontier.
        to: usize,
        /// Direction from `from` to `to`.
        direction: Direction,
    },
    /// The top cell had no unvisited neighbor and was popped.
    Backtracked {
        /// The popped cell.
        cell: usize,
    },
    /// The entry cell was popped; the frontier is empty and the maze is complete.
    Finished,
}

/// Counters collected by [`MazeBuilder::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of passages opened.
    pub carved: usize,
    /// Number of backtracking pops, including the final one.
    pub backtracked: usize,
}

/// Builds a perfect maze with the recursive backtracker algorithm.
///
/// Starting from the entry cell, the builder repeatedly looks at the cell on top
/// of the frontier, collects its unvisited neighbors in
/// [`Direction::BUILD_ORDER`], and lets its [`Chooser`] pick one of them
/// uniformly. The wall towards the chosen cell is removed and the cell is
/// pushed. A cell without unvisited neighbors is popped. When the frontier runs
/// empty, the opened passages form a spanning tree over the grid.
///
/// The builder is stepped one cell at a time so that construction can be
/// animated; [`run`](Self::run) drives it to completion and produces exactly
/// the same maze as stepping by hand.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Frontier, Grid};
/// use mazewalk_generator::{BuildStep, MazeBuilder, MazeSeed, RngChooser};
///
/// let mut grid = Grid::new(8, 5)?;
/// let mut frontier = Frontier::new();
/// let mut builder = MazeBuilder::new(RngChooser::with_seed(MazeSeed::from_phrase("doc")));
///
/// builder.begin(&mut grid, &mut frontier);
/// while builder.step(&mut grid, &mut frontier) != BuildStep::Finished {}
///
/// assert!(frontier.is_empty());
/// assert_eq!(grid.passage_count(), grid.len() - 1);
/// # Ok::<(), mazewalk_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MazeBuilder<C> {
    chooser: C,
}

impl<C> MazeBuilder<C>
where
    C: Chooser,
{
    /// Creates a builder drawing its random choices from `chooser`.
    #[must_use]
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Returns the chooser.
    #[must_use]
    pub fn chooser(&self) -> &C {
        &self.chooser
    }

    /// Returns the chooser mutably.
    #[must_use]
    pub fn chooser_mut(&mut self) -> &mut C {
        &mut self.chooser
    }

    /// Consumes the builder and returns its chooser.
    #[must_use]
    pub fn into_chooser(self) -> C {
        self.chooser
    }

    /// Clears `frontier` and seeds it with the entry cell, marked as visited.
    pub fn begin(&self, grid: &mut Grid, frontier: &mut Frontier) {
        let entry = grid.entry();
        grid.cell_mut(entry).set_build_visited();
        frontier.clear();
        frontier.push(entry);
    }

    /// Processes one cell: either carves into a random unvisited neighbor or
    /// backtracks.
    ///
    /// # Panics
    ///
    /// Panics if `frontier` is empty, i.e. when called after
    /// [`BuildStep::Finished`] without a new [`begin`](Self::begin).
    pub fn step(&mut self, grid: &mut Grid, frontier: &mut Frontier) -> BuildStep {
        let current = frontier.top();

        let mut candidates = [(0, Direction::North); 4];
        let mut count = 0;
        for dir in Direction::BUILD_ORDER {
            if let Some(next) = grid.neighbor(current, dir)
                && !grid.cell(next).is_build_visited()
            {
                candidates[count] = (next, dir);
                count += 1;
            }
        }

        if count == 0 {
            let cell = frontier.pop();
            if frontier.is_empty() {
                return BuildStep::Finished;
            }
            return BuildStep::Backtracked { cell };
        }

        let (next, direction) = candidates[self.chooser.choose(count)];
        grid.open_passage(current, direction);
        grid.cell_mut(next).set_build_visited();
        frontier.push(next);
        BuildStep::Carved {
            from: current,
            to: next,
            direction,
        }
    }

    /// Steps until the maze is complete.
    ///
    /// The frontier must have been seeded with [`begin`](Self::begin).
    pub fn run(&mut self, grid: &mut Grid, frontier: &mut Frontier) -> BuildStats {
        let mut stats = BuildStats::default();
        loop {
            match self.step(grid, frontier) {
                BuildStep::Carved { .. } => stats.carved += 1,
                BuildStep::Backtracked { .. } => stats.backtracked += 1,
                BuildStep::Finished => {
                    stats.backtracked += 1;
                    break;
                }
            }
        }
        log::debug!(
            "built {}x{} maze: {} passages, {} backtracks",
            grid.width(),
            grid.height(),
            stats.carved,
            stats.backtracked
        );
        stats
    }
}

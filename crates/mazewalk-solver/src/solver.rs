//! Depth-first maze solving.

use mazewalk_core::{Direction, Frontier, Grid};

/// Outcome of a single [`MazeSolver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    /// The solver moved through an open passage into an unexplored cell.
    Advanced {
        /// Cell the solver came from.
        from: usize,
        /// Newly entered cell, now on top of the frontier.
        to: usize,
        /// Direction from `from` to `to`.
        direction: Direction,
    },
    /// The top cell led nowhere new; it was taken off the route and popped.
    Backtracked {
        /// The popped cell.
        cell: usize,
    },
    /// The goal is on top of the frontier; the frontier is the solution.
    Reached,
}

/// Counters collected by [`MazeSolver::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of cells entered, excluding the entry cell.
    pub advanced: usize,
    /// Number of dead-end pops.
    pub backtracked: usize,
}

/// Depth-first maze solver.
///
/// Each step looks at the cell on top of the frontier. If it is the goal, the
/// search is over. Otherwise the open sides are probed in
/// [`Direction::SOLVE_ORDER`] and the first one leading to a cell the solver has
/// not seen yet is entered. When no such side exists the cell is a dead end for
/// this search: its on-path flag is cleared and it is popped.
///
/// At every step boundary the cells flagged on-path are exactly the cells on
/// the frontier.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Frontier, Grid};
/// use mazewalk_solver::{MazeSolver, SolveStep};
///
/// let mut grid: Grid = "
///     +-+-+
///     |   |
///     +-+-+
/// "
/// .parse()?;
/// let mut frontier = Frontier::new();
/// let solver = MazeSolver::new();
///
/// solver.begin(&mut grid, &mut frontier);
/// assert!(matches!(solver.step(&mut grid, &mut frontier), SolveStep::Advanced { to: 1, .. }));
/// assert_eq!(solver.step(&mut grid, &mut frontier), SolveStep::Reached);
/// assert_eq!(frontier.as_slice(), &[0, 1]);
/// # Ok::<(), mazewalk_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MazeSolver {}

impl MazeSolver {
    /// Creates a solver.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Clears `frontier` and enters the entry cell.
    pub fn begin(&self, grid: &mut Grid, frontier: &mut Frontier) {
        let entry = grid.entry();
        frontier.clear();
        Self::enter(grid, frontier, entry);
    }

    /// Advances the search by one cell or backtracks by one cell.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty, or if backtracking would empty it
    /// (the goal is not reachable through the grid's passages).
    pub fn step(&self, grid: &mut Grid, frontier: &mut Frontier) -> SolveStep {
        let current = frontier.top();
        if current == grid.goal() {
            return SolveStep::Reached;
        }

        let next = Direction::SOLVE_ORDER.into_iter().find_map(|dir| {
            if !grid.has_passage(current, dir) {
                return None;
            }
            let next = grid.neighbor(current, dir)?;
            (!grid.cell(next).is_solve_visited()).then_some((next, dir))
        });

        if let Some((next, direction)) = next {
            Self::enter(grid, frontier, next);
            return SolveStep::Advanced {
                from: current,
                to: next,
                direction,
            };
        }

        grid.cell_mut(current).clear_on_path();
        frontier.pop();
        assert!(
            !frontier.is_empty(),
            "solver exhausted every passage without reaching the goal"
        );
        SolveStep::Backtracked { cell: current }
    }

    /// Steps until the goal is reached.
    ///
    /// The frontier must have been seeded with [`begin`](Self::begin).
    ///
    /// # Panics
    ///
    /// Panics if the goal is unreachable.
    pub fn run(&self, grid: &mut Grid, frontier: &mut Frontier) -> SolveStats {
        let mut stats = SolveStats::default();
        loop {
            match self.step(grid, frontier) {
                SolveStep::Advanced { .. } => stats.advanced += 1,
                SolveStep::Backtracked { .. } => stats.backtracked += 1,
                SolveStep::Reached => break,
            }
        }
        log::debug!(
            "solved {}x{} maze: path of {} cells, {} cells entered, {} backtracks",
            grid.width(),
            grid.height(),
            frontier.len(),
            stats.advanced,
            stats.backtracked
        );
        stats
    }

    fn enter(grid: &mut Grid, frontier: &mut Frontier, index: usize) {
        let cell = grid.cell_mut(index);
        cell.set_solve_visited();
        cell.set_on_path();
        frontier.push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SolverTester;

    #[test]
    fn test_single_cell_is_already_solved() {
        SolverTester::parse(
            "
            +-+
            | |
            +-+
            ",
        )
        .assert_step(SolveStep::Reached)
        .assert_path(&[0])
        .assert_on_path(&[0]);
    }

    #[test]
    fn test_two_cells() {
        SolverTester::parse(
            "
            +-+-+
            |   |
            +-+-+
            ",
        )
        .assert_step(SolveStep::Advanced {
            from: 0,
            to: 1,
            direction: Direction::East,
        })
        .assert_step(SolveStep::Reached)
        .assert_path(&[0, 1])
        .assert_on_path(&[0, 1]);
    }

    #[test]
    fn test_dead_end_is_backtracked_and_unmarked() {
        SolverTester::parse(
            "
            +-+-+
            |   |
            + + +
            | | |
            +-+-+
            ",
        )
        .assert_step(SolveStep::Advanced {
            from: 0,
            to: 2,
            direction: Direction::South,
        })
        .assert_on_path(&[0, 2])
        .assert_step(SolveStep::Backtracked { cell: 2 })
        .assert_on_path(&[0])
        .assert_step(SolveStep::Advanced {
            from: 0,
            to: 1,
            direction: Direction::East,
        })
        .assert_step(SolveStep::Advanced {
            from: 1,
            to: 3,
            direction: Direction::South,
        })
        .assert_step(SolveStep::Reached)
        .assert_path(&[0, 1, 3])
        .assert_on_path(&[0, 1, 3])
        .assert_solve_visited(&[0, 1, 2, 3]);
    }

    #[test]
    fn test_probe_order_prefers_south_then_east() {
        // The southern branch from the entry is a dead end.
        SolverTester::parse(
            "
            +-+-+-+
            |     |
            + +-+ +
            | |   |
            +-+-+-+
            ",
        )
        .run()
        .assert_path(&[0, 1, 2, 5])
        .assert_on_path(&[0, 1, 2, 5])
        .assert_solve_visited(&[0, 1, 2, 3, 5]);
    }

    #[test]
    fn test_run_counts_steps() {
        let mut grid: Grid = "
            +-+-+-+
            |     |
            +-+-+ +
            |     |
            +-+-+-+
        "
        .parse()
        .unwrap();
        let mut frontier = Frontier::new();
        let solver = MazeSolver::new();
        solver.begin(&mut grid, &mut frontier);
        let stats = solver.run(&mut grid, &mut frontier);

        assert_eq!(frontier.as_slice(), &[0, 1, 2, 5]);
        assert_eq!(
            stats,
            SolveStats {
                advanced: 3,
                backtracked: 0
            }
        );
        assert!(!grid.cell(3).is_solve_visited());
        assert!(!grid.cell(4).is_solve_visited());
    }

    #[test]
    #[should_panic(expected = "without reaching the goal")]
    fn test_unreachable_goal_panics() {
        let _ = SolverTester::parse(
            "
            +-+-+
            | | |
            +-+-+
            ",
        )
        .run();
    }
}

//! Test utilities for the maze solver.
//!
//! This module provides [`SolverTester`], a harness for stepping
//! [`MazeSolver`] over a maze written as ASCII art and checking the marks it
//! leaves behind.
//!
//! # Example
//!
//! ```
//! use mazewalk_solver::{SolveStep, testing::SolverTester};
//!
//! SolverTester::parse("
//!     +-+-+
//!     |   |
//!     +-+-+
//! ")
//! .step()
//! .assert_step(SolveStep::Reached)
//! .assert_path(&[0, 1]);
//! ```

use mazewalk_core::{Frontier, Grid};

use crate::{MazeSolver, SolveStep};

/// A test harness for stepping the maze solver.
///
/// The tester owns a grid and a frontier already seeded with the entry cell.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolverTester {
    grid: Grid,
    frontier: Frontier,
    solver: MazeSolver,
}

impl SolverTester {
    /// Creates a tester for a built maze.
    #[must_use]
    pub fn new(mut grid: Grid) -> Self {
        let mut frontier = Frontier::with_capacity(grid.len());
        let solver = MazeSolver::new();
        solver.begin(&mut grid, &mut frontier);
        Self {
            grid,
            frontier,
            solver,
        }
    }

    /// Creates a tester from a maze in the text form accepted by
    /// [`Grid::from_str`](std::str::FromStr::from_str).
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid maze.
    #[must_use]
    #[track_caller]
    pub fn parse(s: &str) -> Self {
        match s.parse::<Grid>() {
            Ok(grid) => Self::new(grid),
            Err(e) => panic!("invalid maze text: {e}\n{s}"),
        }
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the frontier.
    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Performs one solver step without checking its outcome.
    #[must_use]
    pub fn step(mut self) -> Self {
        let _ = self.solver.step(&mut self.grid, &mut self.frontier);
        self
    }

    /// Steps until the goal is reached.
    #[must_use]
    pub fn run(mut self) -> Self {
        self.solver.run(&mut self.grid, &mut self.frontier);
        self
    }

    /// Performs one solver step and asserts its outcome.
    #[must_use]
    #[track_caller]
    pub fn assert_step(mut self, expected: SolveStep) -> Self {
        let actual = self.solver.step(&mut self.grid, &mut self.frontier);
        assert_eq!(
            actual, expected,
            "unexpected solver step\nfrontier: {:?}\n{}",
            self.frontier.as_slice(),
            self.grid
        );
        self
    }

    /// Asserts the frontier contents from entry to top.
    #[must_use]
    #[track_caller]
    pub fn assert_path(self, expected: &[usize]) -> Self {
        assert_eq!(
            self.frontier.as_slice(),
            expected,
            "unexpected frontier\n{}",
            self.grid
        );
        self
    }

    /// Asserts the set of cells flagged on-path, in index order.
    #[must_use]
    #[track_caller]
    pub fn assert_on_path(self, expected: &[usize]) -> Self {
        let actual = self.marked(|grid, i| grid.cell(i).is_on_path());
        assert_eq!(actual, expected, "unexpected on-path cells\n{}", self.grid);
        self
    }

    /// Asserts the set of cells flagged solve-visited, in index order.
    #[must_use]
    #[track_caller]
    pub fn assert_solve_visited(self, expected: &[usize]) -> Self {
        let actual = self.marked(|grid, i| grid.cell(i).is_solve_visited());
        assert_eq!(
            actual, expected,
            "unexpected solve-visited cells\n{}",
            self.grid
        );
        self
    }

    fn marked(&self, pred: impl Fn(&Grid, usize) -> bool) -> Vec<usize> {
        (0..self.grid.len())
            .filter(|&i| pred(&self.grid, i))
            .collect()
    }
}

use std::time::Duration;

use mazewalk_core::{Frontier, Grid, GridError};
use mazewalk_generator::{BuildStep, Chooser, MazeBuilder, RngChooser};
use mazewalk_solver::{MazeSolver, SolveStep};

use crate::{ControllerConfig, Phase};

/// Outcome of a single [`PhaseController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// Work was done without leaving the current phase.
    Stepped,
    /// The controller moved to the next phase.
    PhaseChanged {
        /// Phase before the tick.
        from: Phase,
        /// Phase after the tick.
        to: Phase,
    },
    /// The fade-out completed and a new maze was started.
    Restarted,
}

/// Drives maze construction, then solving, then a timed fade-out, forever.
///
/// The controller exclusively owns the grid, the frontier and the builder's
/// random source. The host calls [`tick`](Self::tick) once per frame and reads
/// the state back through [`grid`](Self::grid), [`phase`](Self::phase) and
/// [`fade_alpha`](Self::fade_alpha). Between ticks the state is always
/// consistent: the frontier belongs to exactly one algorithm, and the solver's
/// on-path marks match the frontier.
///
/// The random source is created once and survives restarts, so successive
/// mazes continue the same random sequence.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use mazewalk_game::{ControllerConfig, Phase, PhaseController, TickOutcome};
/// use mazewalk_generator::{MazeSeed, RngChooser};
///
/// let config = ControllerConfig {
///     width: 2,
///     height: 1,
///     fast_build: true,
///     fast_solve: true,
///     ..ControllerConfig::default()
/// };
/// let chooser = RngChooser::with_seed(MazeSeed::from_phrase("doc"));
/// let mut controller = PhaseController::with_chooser(config, chooser)?;
///
/// assert_eq!(
///     controller.tick(Duration::ZERO),
///     TickOutcome::PhaseChanged { from: Phase::Building, to: Phase::Solving },
/// );
/// assert_eq!(
///     controller.tick(Duration::ZERO),
///     TickOutcome::PhaseChanged { from: Phase::Solving, to: Phase::Solved },
/// );
/// assert_eq!(controller.solution(), Some(&[0, 1][..]));
/// # Ok::<(), mazewalk_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PhaseController<C = RngChooser> {
    config: ControllerConfig,
    grid: Grid,
    frontier: Frontier,
    builder: MazeBuilder<C>,
    solver: MazeSolver,
    phase: Phase,
    fade_level: u16,
    fade_elapsed: Duration,
    generation: u64,
}

impl PhaseController<RngChooser> {
    /// Creates a controller whose random source is seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid dimensions are invalid.
    pub fn new(config: ControllerConfig) -> Result<Self, GridError> {
        Self::with_chooser(config, RngChooser::from_entropy())
    }
}

impl<C> PhaseController<C>
where
    C: Chooser,
{
    /// Creates a controller drawing construction choices from `chooser`.
    ///
    /// The controller starts in [`Phase::Building`] with the entry cell on the
    /// frontier.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid dimensions are invalid.
    pub fn with_chooser(config: ControllerConfig, chooser: C) -> Result<Self, GridError> {
        let grid = Grid::new(config.width, config.height)?;
        let frontier = Frontier::with_capacity(grid.len());
        let mut this = Self {
            config,
            grid,
            frontier,
            builder: MazeBuilder::new(chooser),
            solver: MazeSolver::new(),
            phase: Phase::Building,
            fade_level: 0,
            fade_elapsed: Duration::ZERO,
            generation: 0,
        };
        this.start_building();
        Ok(this)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the grid being built or solved.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the frontier of the running algorithm.
    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Returns the route from entry to goal once the maze is solved.
    #[must_use]
    pub fn solution(&self) -> Option<&[usize]> {
        self.phase.is_solved().then(|| self.frontier.as_slice())
    }

    /// Returns the builder's random source.
    #[must_use]
    pub fn chooser(&self) -> &C {
        self.builder.chooser()
    }

    /// Returns how many mazes have been started, including the current one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the accumulated fade level; `0` outside [`Phase::Solved`].
    #[must_use]
    pub fn fade_level(&self) -> u16 {
        self.fade_level
    }

    /// Returns the fade level as an overlay opacity.
    #[must_use]
    pub fn fade_alpha(&self) -> u8 {
        u8::try_from(self.fade_level).unwrap_or(u8::MAX)
    }

    /// Advances the current phase.
    ///
    /// In [`Phase::Building`] and [`Phase::Solving`] one algorithm step is
    /// performed, or the whole phase when the corresponding fast mode is
    /// enabled. In [`Phase::Solved`], `elapsed` feeds the fade-out, which
    /// eventually restarts the controller with a new maze.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        match self.phase {
            Phase::Building => self.tick_building(),
            Phase::Solving => self.tick_solving(),
            Phase::Solved => self.tick_solved(elapsed),
        }
    }

    /// Starts a new maze immediately if the current one is solved.
    ///
    /// Returns `false`, leaving the state untouched, in any other phase.
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_solved() {
            return false;
        }
        self.start_building();
        true
    }

    fn tick_building(&mut self) -> TickOutcome {
        loop {
            if self.builder.step(&mut self.grid, &mut self.frontier) == BuildStep::Finished {
                self.solver.begin(&mut self.grid, &mut self.frontier);
                return self.enter(Phase::Solving);
            }
            if !self.config.fast_build {
                return TickOutcome::Stepped;
            }
        }
    }

    fn tick_solving(&mut self) -> TickOutcome {
        loop {
            if self.solver.step(&mut self.grid, &mut self.frontier) == SolveStep::Reached {
                log::debug!(
                    "maze #{} solved with a path of {} cells",
                    self.generation,
                    self.frontier.len()
                );
                self.fade_level = 0;
                self.fade_elapsed = Duration::ZERO;
                return self.enter(Phase::Solved);
            }
            if !self.config.fast_solve {
                return TickOutcome::Stepped;
            }
        }
    }

    fn tick_solved(&mut self, elapsed: Duration) -> TickOutcome {
        let fade = self.config.fade;
        self.fade_elapsed += elapsed;
        if self.fade_elapsed > fade.interval {
            self.fade_level = self.fade_level.saturating_add(fade.increment);
            self.fade_elapsed = Duration::ZERO;
        }
        if self.fade_level >= fade.threshold {
            self.start_building();
            return TickOutcome::Restarted;
        }
        TickOutcome::Stepped
    }

    fn enter(&mut self, to: Phase) -> TickOutcome {
        let from = self.phase;
        self.phase = to;
        log::info!("maze #{}: {from} -> {to}", self.generation);
        TickOutcome::PhaseChanged { from, to }
    }

    fn start_building(&mut self) {
        self.grid.reset();
        self.frontier.clear();
        self.phase = Phase::Building;
        self.fade_level = 0;
        self.fade_elapsed = Duration::ZERO;
        self.generation += 1;
        self.builder.begin(&mut self.grid, &mut self.frontier);
        log::info!(
            "maze #{}: building {}x{}",
            self.generation,
            self.grid.width(),
            self.grid.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use mazewalk_core::{CellFlags, Direction};
    use mazewalk_generator::MazeSeed;

    use super::*;

    const FRAME: Duration = Duration::from_millis(60);

    fn controller(width: usize, height: usize, fast: bool) -> PhaseController {
        let config = ControllerConfig {
            width,
            height,
            fast_build: fast,
            fast_solve: fast,
            ..ControllerConfig::default()
        };
        let chooser = RngChooser::with_seed(MazeSeed::from_phrase("controller"));
        PhaseController::with_chooser(config, chooser).unwrap()
    }

    fn tick_until(controller: &mut PhaseController, phase: Phase) -> usize {
        let mut ticks = 0;
        while controller.phase() != phase {
            controller.tick(FRAME);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        let config = ControllerConfig {
            width: 0,
            ..ControllerConfig::default()
        };
        assert!(PhaseController::new(config).is_err());
    }

    #[test]
    fn test_starts_building_from_entry() {
        let controller = controller(5, 4, false);
        assert_eq!(controller.phase(), Phase::Building);
        assert_eq!(controller.frontier().as_slice(), &[0]);
        assert!(controller.grid().cell(0).is_build_visited());
        assert_eq!(controller.generation(), 1);
        assert_eq!(controller.solution(), None);
    }

    #[test]
    fn test_trivial_grid() {
        let mut controller = controller(1, 1, false);
        assert_eq!(
            controller.tick(FRAME),
            TickOutcome::PhaseChanged {
                from: Phase::Building,
                to: Phase::Solving
            }
        );
        assert_eq!(controller.frontier().as_slice(), &[0]);
        assert!(controller.grid().cell(0).is_on_path());
        assert_eq!(
            controller.tick(FRAME),
            TickOutcome::PhaseChanged {
                from: Phase::Solving,
                to: Phase::Solved
            }
        );
        assert_eq!(controller.solution(), Some(&[0][..]));
    }

    #[test]
    fn test_two_cells_step_by_step() {
        let mut controller = controller(2, 1, false);
        assert_eq!(controller.tick(FRAME), TickOutcome::Stepped);
        assert!(controller.grid().has_passage(0, Direction::East));
        assert_eq!(controller.tick(FRAME), TickOutcome::Stepped);
        assert!(controller.tick(FRAME).is_phase_changed());
        assert_eq!(controller.phase(), Phase::Solving);

        assert_eq!(controller.tick(FRAME), TickOutcome::Stepped);
        assert_eq!(controller.frontier().as_slice(), &[0, 1]);
        assert!(controller.tick(FRAME).is_phase_changed());
        assert_eq!(controller.solution(), Some(&[0, 1][..]));
    }

    #[test]
    fn test_fast_modes_finish_phase_in_one_tick() {
        let mut controller = controller(12, 9, true);
        assert_eq!(tick_until(&mut controller, Phase::Solving), 1);
        assert_eq!(tick_until(&mut controller, Phase::Solved), 1);
    }

    #[test]
    fn test_fast_build_matches_single_stepping() {
        let mut fast = controller(9, 7, true);
        let mut slow = controller(9, 7, false);
        tick_until(&mut fast, Phase::Solving);
        let slow_ticks = tick_until(&mut slow, Phase::Solving);

        // One carve and one pop per cell.
        assert_eq!(slow_ticks, 2 * 9 * 7 - 1);
        assert_eq!(fast.grid(), slow.grid());
    }

    #[test]
    fn test_fade_restarts_after_threshold() {
        let mut controller = controller(4, 3, true);
        tick_until(&mut controller, Phase::Solved);

        // 13 increments of 20 are needed to reach 255.
        for i in 1..=12 {
            assert_eq!(controller.tick(FRAME), TickOutcome::Stepped);
            assert_eq!(controller.fade_level(), 20 * i);
        }
        assert_eq!(controller.fade_alpha(), 240);
        assert_eq!(controller.tick(FRAME), TickOutcome::Restarted);
        assert_eq!(controller.phase(), Phase::Building);
        assert_eq!(controller.fade_level(), 0);
        assert_eq!(controller.generation(), 2);
    }

    #[test]
    fn test_fade_waits_for_interval() {
        let mut controller = controller(3, 3, true);
        tick_until(&mut controller, Phase::Solved);

        controller.tick(Duration::from_millis(30));
        assert_eq!(controller.fade_level(), 0);
        controller.tick(Duration::from_millis(30));
        assert_eq!(controller.fade_level(), 20);
        controller.tick(Duration::from_millis(50));
        assert_eq!(controller.fade_level(), 20);
    }

    #[test]
    fn test_restart_resets_grid() {
        let mut controller = controller(6, 5, true);
        assert!(!controller.restart());
        tick_until(&mut controller, Phase::Solved);

        assert!(controller.restart());
        let grid = controller.grid();
        assert_eq!((grid.width(), grid.height()), (6, 5));
        assert_eq!(grid.cell(0).flags(), CellFlags::BUILD_VISITED);
        assert!(grid.cells()[1..].iter().all(|cell| cell.flags().is_empty()));
        assert_eq!(controller.frontier().as_slice(), &[0]);
        assert_eq!(controller.phase(), Phase::Building);
    }

    #[test]
    fn test_restart_continues_random_sequence() {
        let mut controller = controller(10, 10, true);
        tick_until(&mut controller, Phase::Solved);
        let first = controller.grid().clone();

        controller.restart();
        tick_until(&mut controller, Phase::Solved);
        assert_ne!(controller.grid(), &first);
    }
}

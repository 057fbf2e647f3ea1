//! Whole-cycle properties of generated and solved mazes.

use std::{collections::VecDeque, time::Duration};

use mazewalk_core::Grid;
use mazewalk_game::{ControllerConfig, Phase, PhaseController};
use mazewalk_generator::{MazeSeed, RngChooser};
use proptest::prelude::*;

fn solved_controller(width: usize, height: usize, seed: [u8; 32]) -> PhaseController {
    let config = ControllerConfig {
        width,
        height,
        fast_build: true,
        fast_solve: true,
        ..ControllerConfig::default()
    };
    let chooser = RngChooser::with_seed(MazeSeed::from_bytes(seed));
    let mut controller = PhaseController::with_chooser(config, chooser).unwrap();
    while !controller.phase().is_solved() {
        controller.tick(Duration::ZERO);
    }
    controller
}

fn assert_step_invariants(controller: &PhaseController) -> Result<(), TestCaseError> {
    let grid = controller.grid();
    match controller.phase() {
        Phase::Building => {
            let visited = grid.cells().iter().filter(|c| c.is_build_visited()).count();
            prop_assert_eq!(grid.passage_count(), visited - 1);
            for &index in controller.frontier().as_slice() {
                prop_assert!(grid.cell(index).is_build_visited());
            }
        }
        Phase::Solving | Phase::Solved => {
            prop_assert_eq!(grid.passage_count(), grid.len() - 1);
            let on_path = (0..grid.len())
                .filter(|&i| grid.cell(i).is_on_path())
                .collect::<Vec<_>>();
            let mut frontier = controller.frontier().as_slice().to_vec();
            frontier.sort_unstable();
            prop_assert_eq!(on_path, frontier);
        }
    }
    Ok(())
}

/// Breadth-first route from entry to goal through open passages.
fn reference_path(grid: &Grid) -> Vec<usize> {
    let mut parent = vec![None; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([grid.entry()]);
    seen[grid.entry()] = true;
    while let Some(index) = queue.pop_front() {
        for dir in grid.cell(index).passages() {
            let next = grid.neighbor(index, dir).unwrap();
            if !seen[next] {
                seen[next] = true;
                parent[next] = Some(index);
                queue.push_back(next);
            }
        }
    }

    let mut path = vec![grid.goal()];
    while let Some(prev) = parent[*path.last().unwrap()] {
        path.push(prev);
    }
    path.reverse();
    path
}

proptest! {
    #[test]
    fn test_solution_is_the_unique_tree_path(
        width in 1usize..14,
        height in 1usize..14,
        seed in any::<[u8; 32]>(),
    ) {
        let controller = solved_controller(width, height, seed);
        let grid = controller.grid();
        let solution = controller.solution().unwrap();

        prop_assert_eq!(grid.passage_count(), grid.len() - 1);
        let reference = reference_path(grid);
        prop_assert_eq!(solution, reference.as_slice());

        let on_path = (0..grid.len())
            .filter(|&i| grid.cell(i).is_on_path())
            .collect::<Vec<_>>();
        let mut expected = solution.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(on_path, expected);
    }

    #[test]
    fn test_every_solve_visited_cell_is_build_visited(
        width in 1usize..14,
        height in 1usize..14,
        seed in any::<[u8; 32]>(),
    ) {
        let controller = solved_controller(width, height, seed);
        for cell in controller.grid().cells() {
            prop_assert!(cell.is_build_visited());
            prop_assert!(!cell.is_on_path() || cell.is_solve_visited());
        }
    }

    #[test]
    fn test_restart_matches_fresh_shape(
        width in 1usize..10,
        height in 1usize..10,
        seed in any::<[u8; 32]>(),
    ) {
        let mut controller = solved_controller(width, height, seed);
        prop_assert!(controller.restart());

        let fresh = PhaseController::new(*controller.config()).unwrap();
        prop_assert_eq!(controller.phase(), Phase::Building);
        prop_assert_eq!(controller.grid(), fresh.grid());
        prop_assert_eq!(controller.frontier(), fresh.frontier());
    }

    #[test]
    fn test_invariants_hold_after_every_tick(
        width in 1usize..10,
        height in 1usize..10,
        seed in any::<[u8; 32]>(),
    ) {
        let config = ControllerConfig {
            width,
            height,
            fast_build: false,
            fast_solve: false,
            ..ControllerConfig::default()
        };
        let chooser = RngChooser::with_seed(MazeSeed::from_bytes(seed));
        let mut controller = PhaseController::with_chooser(config, chooser).unwrap();

        assert_step_invariants(&controller)?;
        while !controller.phase().is_solved() {
            controller.tick(Duration::ZERO);
            assert_step_invariants(&controller)?;
        }
    }
}

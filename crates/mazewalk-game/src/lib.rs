//! Sequencing of maze construction and solving.
//!
//! [`PhaseController`] owns the grid, the shared frontier and the random
//! source, and advances the current [`Phase`] by one unit of work per
//! [`tick`](PhaseController::tick):
//!
//! ```text
//! Building --(frontier empty)--> Solving --(goal reached)--> Solved
//!    ^                                                          |
//!    +-------------------(fade threshold crossed)---------------+
//! ```
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use mazewalk_game::{ControllerConfig, Phase, PhaseController};
//!
//! let config = ControllerConfig {
//!     width: 10,
//!     height: 6,
//!     ..ControllerConfig::default()
//! };
//! let mut controller = PhaseController::new(config)?;
//!
//! while !controller.phase().is_solved() {
//!     controller.tick(Duration::from_millis(16));
//! }
//! let path = controller.solution().unwrap();
//! assert_eq!(path.first(), Some(&0));
//! assert_eq!(path.last(), Some(&59));
//! # Ok::<(), mazewalk_core::GridError>(())
//! ```

pub use self::{
    config::{ControllerConfig, FadeConfig},
    controller::{PhaseController, TickOutcome},
    phase::Phase,
};

mod config;
mod controller;
mod phase;

use std::num::NonZero;

use clap::Parser;
use mazewalk_game::ControllerConfig;
use mazewalk_generator::{MazeSeed, RngChooser};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Number of maze columns.
    #[arg(long, value_name = "CELLS", default_value = "40")]
    width: NonZero<usize>,

    /// Number of maze rows.
    #[arg(long, value_name = "CELLS", default_value = "20")]
    height: NonZero<usize>,

    /// Show the finished maze at once (default).
    #[arg(long, overrides_with = "no_fast_build")]
    fast_build: bool,

    /// Animate construction cell by cell instead of showing the finished maze.
    #[arg(long, overrides_with = "fast_build")]
    no_fast_build: bool,

    /// Show the solved route immediately instead of animating the search.
    #[arg(long)]
    fast_solve: bool,

    /// Seed for the random source, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<MazeSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

impl Args {
    pub(crate) fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            width: self.width.get(),
            height: self.height.get(),
            fast_build: self.fast_build || !self.no_fast_build,
            fast_solve: self.fast_solve,
            ..ControllerConfig::default()
        }
    }

    pub(crate) fn chooser(&self) -> RngChooser {
        let seed = match (&self.seed, &self.phrase) {
            (Some(seed), _) => *seed,
            (None, Some(phrase)) => MazeSeed::from_phrase(phrase),
            (None, None) => MazeSeed::random(),
        };
        RngChooser::with_seed(seed)
    }
}

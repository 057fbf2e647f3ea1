//! Mazewalk desktop application using egui/eframe.
//!
//! Opens a window that builds a random maze, animates the search for its
//! solution, fades out and starts over. Press Space or Escape to quit and `R`
//! to skip the fade-out of a solved maze.

use std::process;

use clap::Parser as _;
use mazewalk_game::PhaseController;

use crate::{app::MazewalkApp, args::Args};

mod app;
mod args;
mod ui;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.mazewalk";

    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let chooser = args.chooser();
    log::info!("Starting Mazewalk, seed={}", chooser.seed());

    let controller = match PhaseController::with_chooser(args.controller_config(), chooser) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Invalid maze size: {e}");
            process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((1280.0, 720.0))
            .with_min_inner_size((320.0, 200.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Mazewalk",
        options,
        Box::new(|_cc| Ok(Box::new(MazewalkApp::new(controller)))),
    )
}

//! Mazewalk desktop application UI.
//!
//! # Design Notes
//! - The app is a thin host: one `PhaseController::tick` per frame, fed with
//!   the frame's delta time, then a full redraw from the controller state.
//! - Repaints are requested continuously while the window is open.

use std::time::Duration;

use eframe::{
    App, Frame,
    egui::{self, CentralPanel, Context, InputState, Key, ViewportCommand},
};
use mazewalk_game::PhaseController;

use crate::ui::{self, palette::MazePalette};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FrameInput {
    exit: bool,
    restart: bool,
}

impl FrameInput {
    fn from_input(i: &InputState) -> Self {
        Self {
            exit: i.key_pressed(Key::Space) || i.key_pressed(Key::Escape),
            restart: i.key_pressed(Key::R),
        }
    }
}

#[derive(Debug)]
pub struct MazewalkApp {
    controller: PhaseController,
    palette: MazePalette,
}

impl MazewalkApp {
    pub fn new(controller: PhaseController) -> Self {
        Self {
            controller,
            palette: MazePalette::default(),
        }
    }
}

impl App for MazewalkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let (input, dt) = ctx.input(|i| (FrameInput::from_input(i), i.stable_dt));
        if input.exit {
            log::info!("Exit requested");
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }
        if input.restart && self.controller.restart() {
            log::info!("Restart requested");
        }

        self.controller
            .tick(Duration::from_secs_f32(dt.clamp(0.0, 1.0)));

        CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.background))
            .show(ctx, |ui| {
                ui::maze_view::show(ui, &self.controller, &self.palette);
            });

        ctx.request_repaint();
    }
}

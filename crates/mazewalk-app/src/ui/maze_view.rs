use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Ui, Vec2};
use mazewalk_core::{Cell, Direction, Position};
use mazewalk_game::PhaseController;

use crate::ui::palette::MazePalette;

const WALL_WIDTH: f32 = 1.0;
const STATUS_FONT_SIZE: f32 = 14.0;

impl MazePalette {
    fn cell_fill(&self, cell: Cell) -> Color32 {
        if cell.is_on_path() {
            self.cell_on_path
        } else if cell.is_solve_visited() {
            self.cell_explored
        } else {
            self.cell_built
        }
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(ui: &mut Ui, controller: &PhaseController, palette: &MazePalette) {
    let rect = ui.max_rect();
    let painter = ui.painter();
    let grid = controller.grid();

    let cell_size = Vec2::new(
        rect.width() / grid.width() as f32,
        rect.height() / grid.height() as f32,
    );
    let wall = Stroke::new(WALL_WIDTH, palette.wall);

    for (index, &cell) in grid.cells().iter().enumerate() {
        if !cell.is_build_visited() {
            continue;
        }
        let Position { x, y } = grid.to_position(index);
        let min = rect.min + Vec2::new(x as f32 * cell_size.x, y as f32 * cell_size.y);
        let cell_rect = Rect::from_min_size(min, cell_size);

        painter.rect_filled(cell_rect, 0.0, palette.cell_fill(cell));
        for dir in Direction::ALL {
            if !cell.has_passage(dir) {
                painter.line_segment(wall_segment(cell_rect, dir), wall);
            }
        }
    }

    draw_status(painter, rect, controller, palette);

    let alpha = controller.fade_alpha();
    if alpha > 0 {
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(alpha));
    }
}

fn wall_segment(rect: Rect, dir: Direction) -> [Pos2; 2] {
    match dir {
        Direction::North => [rect.left_top(), rect.right_top()],
        Direction::East => [rect.right_top(), rect.right_bottom()],
        Direction::South => [rect.left_bottom(), rect.right_bottom()],
        Direction::West => [rect.left_top(), rect.left_bottom()],
    }
}

fn draw_status(painter: &Painter, rect: Rect, controller: &PhaseController, palette: &MazePalette) {
    let text = format!(
        "#{} {}  seed {}",
        controller.generation(),
        controller.phase(),
        controller.chooser().seed()
    );
    painter.text(
        rect.left_bottom() + Vec2::new(4.0, -4.0),
        Align2::LEFT_BOTTOM,
        text,
        FontId::monospace(STATUS_FONT_SIZE),
        palette.status_text,
    );
}

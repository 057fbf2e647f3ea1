use eframe::egui::Color32;

/// Colors used to draw the maze.
#[derive(Debug, Clone)]
pub struct MazePalette {
    pub background: Color32,
    pub cell_built: Color32,
    pub cell_explored: Color32,
    pub cell_on_path: Color32,
    pub wall: Color32,
    pub status_text: Color32,
}

impl Default for MazePalette {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            cell_built: Color32::BLUE,
            cell_explored: Color32::from_rgb(0x20, 0x20, 0xa0),
            cell_on_path: Color32::RED,
            wall: Color32::WHITE,
            status_text: Color32::LIGHT_GRAY,
        }
    }
}

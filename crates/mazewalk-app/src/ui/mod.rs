pub mod maze_view;
pub mod palette;

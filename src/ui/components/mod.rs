pub mod app_grid;
pub mod assistant_panel;
pub mod content_row;
pub mod hero;
pub mod nav_bar;

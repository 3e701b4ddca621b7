pub mod app_theme;
mod results_grid_view;

pub use results_grid_view::{render_results_grid, ResultCardMessage};

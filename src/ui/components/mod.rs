// src/ui/components/mod.rs
//
// UI components, each rendering one piece of the view model to text

pub mod chrome;
pub mod detail_overlay;
pub mod result_grid;
pub mod status;

pub use chrome::{render_footer, render_header, APP_NAME};
pub use detail_overlay::render_detail_overlay;
pub use result_grid::{render_result_grid, render_result_item};

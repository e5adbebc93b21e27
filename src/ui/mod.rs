//! UI modules for the Transit Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, active dimension, status
//! - Side panel: dimension selector, line legend, load stats
//! - Central canvas: the map

mod canvas;
pub mod colors;
mod side_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use side_panel::render_side_panel;
pub use top_bar::render_top_bar;

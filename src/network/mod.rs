//! Transit network datasets and reference resolution.

mod model;
mod resolve;

pub use model::{Dataset, Dimension, Line, Station, Status};
pub use resolve::resolve_line_path;

//! Application state management.

mod stats;
mod viz;

pub use stats::{DimensionLoad, LoadOutcome, SessionStats};
pub use viz::VizState;

use crate::network::Dimension;

/// Station popup currently open on the canvas, identified by its
/// overlay slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedStation {
    pub dimension: Dimension,
    pub marker_index: usize,
}

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Canvas view controls (zoom/pan).
    pub viz_state: VizState,

    /// Per-dimension load statistics for the side panel.
    pub session_stats: SessionStats,

    /// Status message displayed in the top bar.
    pub status_message: String,

    /// Open station popup, if any.
    pub selected_station: Option<SelectedStation>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session_stats: SessionStats::new(),
            status_message: "Loading datasets...".to_string(),
            ..Default::default()
        }
    }
}

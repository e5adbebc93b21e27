//! Visualization state (canvas view controls).

use eframe::egui::Vec2;

pub struct VizState {
    /// Zoom factor: 1.0 fits the world bounds, each doubling is one zoom
    /// level, clamped to the level-0..5 scale range by the canvas.
    pub zoom: f32,

    /// Pan offset from center in screen pixels.
    pub pan_offset: Vec2,
}

impl Default for VizState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
        }
    }
}

impl VizState {
    /// Restore the initial origin-centered, fit-bounds view.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_offset = Vec2::ZERO;
    }
}

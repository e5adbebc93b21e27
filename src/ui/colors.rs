//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for stat labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for stat values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Success/positive indicator.
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    /// Failure indicator.
    pub const FAILURE: Color32 = Color32::from_rgb(220, 90, 90);
}

/// Colors for the map canvas.
pub mod canvas {
    use super::Color32;

    /// Background color.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// World-bounds frame.
    pub const FRAME: Color32 = Color32::from_rgb(60, 60, 80);
    /// Origin crosshair.
    pub const AXIS: Color32 = Color32::from_rgba_premultiplied(70, 70, 95, 160);
    /// Popup background.
    pub const POPUP_BACKGROUND: Color32 = Color32::from_rgb(30, 30, 45);
    /// Popup border.
    pub const POPUP_BORDER: Color32 = Color32::from_rgb(90, 90, 120);
    /// Popup title text.
    pub const POPUP_TITLE: Color32 = Color32::from_rgb(230, 230, 245);
    /// Popup body text.
    pub const POPUP_TEXT: Color32 = Color32::from_rgb(190, 190, 210);
}

/// Colors for status display.
pub mod status {
    use super::Color32;

    /// Stations and lines in service.
    pub const IN_SERVICE: Color32 = Color32::from_rgb(100, 200, 100);
    /// Planned stations and lines.
    pub const PLANNED: Color32 = Color32::from_rgb(170, 170, 170);
}

//! Renderable overlay data.
//!
//! An overlay is the drawable form of one dimension's dataset: station
//! markers and line paths with all styling already resolved, in world
//! coordinates. Overlays are built once per dataset and repainted every
//! frame; only their attachment to the surface changes afterwards.

use eframe::egui::Color32;
use geo_types::Coord;

/// A station marker with resolved display styling.
#[derive(Debug, Clone)]
pub struct StationMarker {
    pub position: Coord<f64>,
    pub radius: f32,
    pub stroke_weight: f32,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub popup: StationPopup,
}

/// Popup content shown when a station marker is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPopup {
    pub title: String,
    pub status_label: &'static str,
    pub operational: bool,
    /// "X=…, Z=…" display string.
    pub coordinates: String,
    /// Comma-joined names of the lines serving the station.
    pub lines: String,
}

/// A line path with resolved coordinates and styling.
#[derive(Debug, Clone)]
pub struct LinePath {
    pub name: String,
    pub points: Vec<Coord<f64>>,
    pub color: Color32,
    pub weight: f32,
    /// Planned lines render with a dashed stroke.
    pub dashed: bool,
}

/// Markers and paths derived from one dimension's dataset.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub markers: Vec<StationMarker>,
    pub paths: Vec<LinePath>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.paths.is_empty()
    }
}

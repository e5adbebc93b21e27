//! Flat world projection.
//!
//! Converts between world coordinates (x east, z south) and screen
//! coordinates. The world is a flat plane, so the transform is a uniform
//! scale plus pan; no geographic projection is involved. `Coord.y` holds
//! the world z axis, which increases toward the bottom of the screen.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Scale factor at zoom level 0 (the fit-bounds view).
pub const MIN_ZOOM: f32 = 1.0;
/// Scale factor at zoom level 5.
pub const MAX_ZOOM: f32 = 32.0;

/// Half-extent of the initial viewport in world units.
pub const WORLD_HALF_EXTENT: f64 = 5000.0;

/// Projection for converting world to screen coordinates.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// World coordinate at the view center before panning.
    pub center: Coord<f64>,
    /// Half of the world-unit span visible at zoom 1.0.
    pub base_range: f64,
    /// Current zoom factor.
    pub zoom: f32,
    /// Pan offset in screen pixels.
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas.
    pub screen_rect: Rect,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            center: Coord { x: 0.0, y: 0.0 },
            base_range: WORLD_HALF_EXTENT,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }
}

impl MapProjection {
    /// Creates a projection centered at the world origin, fit to the
    /// [-5000,-5000]..[5000,5000] bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the projection with current view state.
    pub fn update(&mut self, zoom: f32, pan_offset: Vec2, screen_rect: Rect) {
        self.zoom = zoom;
        self.pan_offset = pan_offset;
        self.screen_rect = screen_rect;
    }

    /// Converts a world coordinate (x, z) to a screen position.
    pub fn world_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let effective_range = self.base_range / self.zoom as f64;

        let norm_x = (coord.x - self.center.x) / effective_range;
        let norm_y = (coord.y - self.center.y) / effective_range;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        Pos2::new(
            center.x + (norm_x as f32) * half_size,
            center.y + (norm_y as f32) * half_size,
        )
    }

    /// Converts a screen position back to a world coordinate.
    pub fn screen_to_world(&self, pos: Pos2) -> Coord<f64> {
        let effective_range = self.base_range / self.zoom as f64;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        let norm_x = (pos.x - center.x) / half_size;
        let norm_y = (pos.y - center.y) / half_size;

        Coord {
            x: self.center.x + (norm_x as f64) * effective_range,
            y: self.center.y + (norm_y as f64) * effective_range,
        }
    }

    /// Returns the visible world bounds as (min_x, min_z, max_x, max_z).
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let top_left = self.screen_to_world(self.screen_rect.left_top());
        let bottom_right = self.screen_to_world(self.screen_rect.right_bottom());

        (
            top_left.x.min(bottom_right.x),
            top_left.y.min(bottom_right.y),
            top_left.x.max(bottom_right.x),
            top_left.y.max(bottom_right.y),
        )
    }

    /// Checks if a coordinate is within the visible bounds (with margin
    /// in world units).
    pub fn is_visible(&self, coord: Coord<f64>, margin: f64) -> bool {
        let (min_x, min_z, max_x, max_z) = self.visible_bounds();
        coord.x >= min_x - margin
            && coord.x <= max_x + margin
            && coord.y >= min_z - margin
            && coord.y <= max_z + margin
    }

    /// Checks if a bounding box intersects the visible bounds.
    pub fn bbox_visible(&self, min_x: f64, min_z: f64, max_x: f64, max_z: f64) -> bool {
        let (vis_min_x, vis_min_z, vis_max_x, vis_max_z) = self.visible_bounds();

        let margin = 50.0;
        !(max_x < vis_min_x - margin
            || min_x > vis_max_x + margin
            || max_z < vis_min_z - margin
            || min_z > vis_max_z + margin)
    }
}

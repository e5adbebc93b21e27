//! Map controller.
//!
//! Owns the per-dimension overlays behind a [`Surface`] and mediates
//! between loaded datasets and what the backend paints.

use super::{build_overlay, Overlay, Surface};
use crate::network::{Dataset, Dimension};

pub struct MapController<S: Surface> {
    surface: S,
    /// Dimension whose selector button is active. None until the first
    /// switch; at load time every loaded overlay is attached.
    active_dimension: Option<Dimension>,
}

impl<S: Surface> MapController<S> {
    /// Creates the controller with an empty overlay for every dimension.
    pub fn new(mut surface: S) -> Self {
        for dim in Dimension::all() {
            surface.add_overlay(*dim, Overlay::default());
        }

        Self {
            surface,
            active_dimension: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Builds and attaches the overlay for a loaded dataset.
    ///
    /// Called once per dimension at load time, so until the user picks a
    /// dimension every loaded overlay is visible at once.
    pub fn render(&mut self, dataset: &Dataset) {
        let overlay = build_overlay(dataset);
        log::info!(
            "rendered {}: {} markers, {} paths",
            dataset.dimension,
            overlay.markers.len(),
            overlay.paths.len()
        );

        self.surface.add_overlay(dataset.dimension, overlay);
        self.surface.attach_overlay(dataset.dimension);
    }

    /// Attaches exactly the target dimension's overlay and marks its
    /// selector active. Every other overlay is detached.
    pub fn switch_dimension(&mut self, target: Dimension) {
        for dim in Dimension::all() {
            if *dim == target {
                self.surface.attach_overlay(*dim);
            } else {
                self.surface.detach_overlay(*dim);
            }
        }

        self.active_dimension = Some(target);
    }

    pub fn active_dimension(&self) -> Option<Dimension> {
        self.active_dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CanvasSurface;

    fn dataset(dimension: &str) -> Dataset {
        serde_json::from_str(&format!(
            r##"{{
                "dimension": "{dimension}",
                "color": "#3388ff",
                "stations": [
                    {{ "name": "Stop", "x": 10, "z": 10,
                       "status": "operational", "transfer": false, "lines": [] }}
                ]
            }}"##
        ))
        .unwrap()
    }

    fn loaded_controller() -> MapController<CanvasSurface> {
        let mut controller = MapController::new(CanvasSurface::new());
        controller.render(&dataset("overworld"));
        controller.render(&dataset("nether"));
        controller.render(&dataset("end"));
        controller
    }

    #[test]
    fn test_new_controller_has_nothing_attached() {
        let controller = MapController::new(CanvasSurface::new());
        assert_eq!(controller.surface().attached_count(), 0);
        assert_eq!(controller.active_dimension(), None);
    }

    #[test]
    fn test_all_overlays_attached_after_load() {
        let controller = loaded_controller();
        assert_eq!(controller.surface().attached_count(), 3);
        // No selector is active until the user picks a dimension.
        assert_eq!(controller.active_dimension(), None);
    }

    #[test]
    fn test_switch_leaves_exactly_one_attached() {
        let mut controller = loaded_controller();

        controller.switch_dimension(Dimension::Nether);
        assert_eq!(controller.surface().attached_count(), 1);
        assert!(controller.surface().is_attached(Dimension::Nether));
        assert_eq!(controller.active_dimension(), Some(Dimension::Nether));
    }

    #[test]
    fn test_switch_is_idempotent() {
        let mut controller = loaded_controller();

        controller.switch_dimension(Dimension::End);
        controller.switch_dimension(Dimension::End);

        assert_eq!(controller.surface().attached_count(), 1);
        assert!(controller.surface().is_attached(Dimension::End));
        assert_eq!(controller.active_dimension(), Some(Dimension::End));
    }

    #[test]
    fn test_switch_moves_attachment() {
        let mut controller = loaded_controller();

        controller.switch_dimension(Dimension::Overworld);
        controller.switch_dimension(Dimension::Nether);

        assert!(!controller.surface().is_attached(Dimension::Overworld));
        assert!(controller.surface().is_attached(Dimension::Nether));
        assert_eq!(controller.surface().attached_count(), 1);
    }

    #[test]
    fn test_render_populates_overlay() {
        let mut controller = MapController::new(CanvasSurface::new());
        controller.render(&dataset("overworld"));

        let overlay = controller.surface().overlay(Dimension::Overworld);
        assert_eq!(overlay.markers.len(), 1);
        assert!(controller.surface().is_attached(Dimension::Overworld));
    }
}

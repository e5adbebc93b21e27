//! Map overlay system: projection, overlay data, and the controller.

mod controller;
mod overlay;
mod projection;
mod render;
mod surface;

pub use controller::MapController;
pub use overlay::{LinePath, Overlay, StationMarker, StationPopup};
pub use projection::{MapProjection, MAX_ZOOM, MIN_ZOOM, WORLD_HALF_EXTENT};
pub use render::build_overlay;
pub use surface::{CanvasSurface, Surface};

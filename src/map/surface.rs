//! Rendering-surface capability seam.
//!
//! The controller talks to the display through this small interface so
//! the drawing backend stays swappable without touching the dataset
//! transformation logic. The egui canvas paints whatever the surface
//! reports as attached.

use super::Overlay;
use crate::network::Dimension;

/// Minimal capability interface between the controller and a backend.
///
/// Overlays are retained by the surface; attachment controls which of
/// them the backend paints.
pub trait Surface {
    /// Store (or replace) the overlay for a dimension.
    fn add_overlay(&mut self, dimension: Dimension, overlay: Overlay);

    /// Make a dimension's overlay visible.
    fn attach_overlay(&mut self, dimension: Dimension);

    /// Hide a dimension's overlay.
    fn detach_overlay(&mut self, dimension: Dimension);

    /// Whether a dimension's overlay is currently visible.
    fn is_attached(&self, dimension: Dimension) -> bool;
}

#[derive(Debug, Clone, Default)]
struct OverlaySlot {
    overlay: Overlay,
    attached: bool,
}

/// Retained overlay store painted by the egui canvas.
#[derive(Debug, Clone, Default)]
pub struct CanvasSurface {
    overworld: OverlaySlot,
    nether: OverlaySlot,
    end: OverlaySlot,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, dimension: Dimension) -> &OverlaySlot {
        match dimension {
            Dimension::Overworld => &self.overworld,
            Dimension::Nether => &self.nether,
            Dimension::End => &self.end,
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut OverlaySlot {
        match dimension {
            Dimension::Overworld => &mut self.overworld,
            Dimension::Nether => &mut self.nether,
            Dimension::End => &mut self.end,
        }
    }

    pub fn overlay(&self, dimension: Dimension) -> &Overlay {
        &self.slot(dimension).overlay
    }

    /// Attached overlays in paint order.
    pub fn attached(&self) -> impl Iterator<Item = (Dimension, &Overlay)> {
        Dimension::all()
            .iter()
            .map(|dim| (*dim, self.slot(*dim)))
            .filter(|(_, slot)| slot.attached)
            .map(|(dim, slot)| (dim, &slot.overlay))
    }

    pub fn attached_count(&self) -> usize {
        self.attached().count()
    }
}

impl Surface for CanvasSurface {
    fn add_overlay(&mut self, dimension: Dimension, overlay: Overlay) {
        self.slot_mut(dimension).overlay = overlay;
    }

    fn attach_overlay(&mut self, dimension: Dimension) {
        self.slot_mut(dimension).attached = true;
    }

    fn detach_overlay(&mut self, dimension: Dimension) {
        self.slot_mut(dimension).attached = false;
    }

    fn is_attached(&self, dimension: Dimension) -> bool {
        self.slot(dimension).attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlays_start_detached() {
        let surface = CanvasSurface::new();
        for dim in Dimension::all() {
            assert!(!surface.is_attached(*dim));
        }
        assert_eq!(surface.attached_count(), 0);
    }

    #[test]
    fn test_attach_detach_bookkeeping() {
        let mut surface = CanvasSurface::new();

        surface.attach_overlay(Dimension::Nether);
        assert!(surface.is_attached(Dimension::Nether));
        assert_eq!(surface.attached_count(), 1);

        surface.detach_overlay(Dimension::Nether);
        assert!(!surface.is_attached(Dimension::Nether));
        assert_eq!(surface.attached_count(), 0);
    }

    #[test]
    fn test_add_overlay_replaces_without_changing_attachment() {
        let mut surface = CanvasSurface::new();
        surface.attach_overlay(Dimension::End);

        surface.add_overlay(Dimension::End, Overlay::default());
        assert!(surface.is_attached(Dimension::End));
        assert!(surface.overlay(Dimension::End).is_empty());
    }
}

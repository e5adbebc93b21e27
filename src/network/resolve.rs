//! Line path resolution.
//!
//! A line references its stations by name; the coordinates come from the
//! station list of the same dataset. A reference that does not resolve is
//! skipped (the rest of the line is kept) and reported with a warning.

use super::{Dataset, Line};
use geo_types::Coord;

/// Resolve a line's ordered station names to world coordinates.
///
/// A loop line with a non-empty resolved path is closed by repeating its
/// first coordinate.
pub fn resolve_line_path(dataset: &Dataset, line: &Line) -> Vec<Coord<f64>> {
    let mut coords = Vec::with_capacity(line.stations.len() + 1);

    for name in &line.stations {
        match dataset.station(name) {
            Some(station) => coords.push(station.coord()),
            None => {
                log::warn!(
                    "line {:?} references unknown station {:?} in {}; skipping point",
                    line.name,
                    name,
                    dataset.dimension
                );
            }
        }
    }

    if line.is_loop {
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }
    }

    coords
}

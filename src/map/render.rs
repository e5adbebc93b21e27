//! Dataset-to-overlay transformation.
//!
//! Pure build step: takes one dimension's dataset and produces the
//! styled markers and paths the canvas paints. Attachment is handled by
//! the controller.

use super::{LinePath, Overlay, StationMarker, StationPopup};
use crate::network::{resolve_line_path, Dataset, Station};
use eframe::egui::Color32;

/// Marker radius for the hub station at the world origin.
const HUB_RADIUS: f32 = 10.0;
/// Marker radius for transfer stations.
const TRANSFER_RADIUS: f32 = 8.0;
/// Marker radius for everything else.
const DEFAULT_RADIUS: f32 = 5.0;

const HUB_STROKE_WEIGHT: f32 = 3.0;
const DEFAULT_STROKE_WEIGHT: f32 = 1.0;
const LINE_WEIGHT: f32 = 3.0;

/// Stroke color for stations not yet in service.
const PLANNED_STATION_STROKE: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
/// Fill color for stations not yet in service.
const PLANNED_STATION_FILL: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);
/// Path color for lines not yet in service.
const PLANNED_LINE_COLOR: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Fallback when a dataset or line carries an unparseable color.
const FALLBACK_COLOR: Color32 = Color32::from_rgb(0x33, 0x88, 0xff);

/// Build the renderable overlay for one dimension's dataset.
pub fn build_overlay(dataset: &Dataset) -> Overlay {
    let dataset_color = parse_color(&dataset.color);
    let mut overlay = Overlay::default();

    for line in &dataset.lines {
        let operational = line.status.is_operational();
        overlay.paths.push(LinePath {
            name: line.name.clone(),
            points: resolve_line_path(dataset, line),
            color: if operational {
                parse_color(&line.color)
            } else {
                PLANNED_LINE_COLOR
            },
            weight: LINE_WEIGHT,
            dashed: !operational,
        });
    }

    for station in &dataset.stations {
        overlay.markers.push(build_marker(station, dataset_color));
    }

    overlay
}

fn build_marker(station: &Station, dataset_color: Color32) -> StationMarker {
    let is_hub = station.is_hub();
    let operational = station.status.is_operational();

    let radius = if is_hub {
        HUB_RADIUS
    } else if station.transfer {
        TRANSFER_RADIUS
    } else {
        DEFAULT_RADIUS
    };

    StationMarker {
        position: station.coord(),
        radius,
        stroke_weight: if is_hub {
            HUB_STROKE_WEIGHT
        } else {
            DEFAULT_STROKE_WEIGHT
        },
        stroke_color: if operational {
            dataset_color
        } else {
            PLANNED_STATION_STROKE
        },
        fill_color: if operational {
            dataset_color
        } else {
            PLANNED_STATION_FILL
        },
        popup: popup_content(station),
    }
}

fn popup_content(station: &Station) -> StationPopup {
    StationPopup {
        title: station.name.clone(),
        status_label: station.status.label(),
        operational: station.status.is_operational(),
        coordinates: format!(
            "X={}, Z={}",
            format_coordinate(station.x),
            format_coordinate(station.z)
        ),
        lines: station.lines.join(", "),
    }
}

fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Parse a CSS hex color string, falling back to the default map color.
fn parse_color(css: &str) -> Color32 {
    match Color32::from_hex(css.trim()) {
        Ok(color) => color,
        Err(_) => {
            log::warn!("unparseable color {:?}, using fallback", css);
            FALLBACK_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_hub_dataset() -> Dataset {
        serde_json::from_str(
            r##"{
                "dimension": "overworld",
                "color": "#3388ff",
                "stations": [
                    { "name": "Spawn", "x": 0, "z": 0,
                      "status": "operational", "transfer": false, "lines": ["A"] }
                ],
                "lines": [
                    { "name": "A", "color": "#ff0000", "status": "operational",
                      "isLoop": false, "stations": ["Spawn"] }
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_marker_count_matches_station_count() {
        let dataset: Dataset = serde_json::from_str(
            r##"{
                "dimension": "nether",
                "color": "#cc3333",
                "stations": [
                    { "name": "Hub", "x": 0, "z": 0,
                      "status": "operational", "transfer": true, "lines": [] },
                    { "name": "Fortress", "x": 250, "z": 40,
                      "status": "operational", "transfer": false, "lines": [] },
                    { "name": "Outpost", "x": -90, "z": 300,
                      "status": "planned", "transfer": false, "lines": [] }
                ]
            }"##,
        )
        .unwrap();

        let overlay = build_overlay(&dataset);
        assert_eq!(overlay.markers.len(), dataset.stations.len());
        assert!(overlay.paths.is_empty());
    }

    #[test]
    fn test_hub_gets_largest_radius_and_heaviest_stroke() {
        // Hub sizing wins even with transfer set.
        let dataset: Dataset = serde_json::from_str(
            r##"{
                "dimension": "overworld",
                "color": "#3388ff",
                "stations": [
                    { "name": "Spawn", "x": 0, "z": 0,
                      "status": "operational", "transfer": true, "lines": [] },
                    { "name": "Junction", "x": 500, "z": 0,
                      "status": "operational", "transfer": true, "lines": [] },
                    { "name": "Halt", "x": 0, "z": 700,
                      "status": "operational", "transfer": false, "lines": [] }
                ]
            }"##,
        )
        .unwrap();

        let overlay = build_overlay(&dataset);
        assert_eq!(overlay.markers[0].radius, HUB_RADIUS);
        assert_eq!(overlay.markers[0].stroke_weight, HUB_STROKE_WEIGHT);
        assert_eq!(overlay.markers[1].radius, TRANSFER_RADIUS);
        assert_eq!(overlay.markers[1].stroke_weight, DEFAULT_STROKE_WEIGHT);
        assert_eq!(overlay.markers[2].radius, DEFAULT_RADIUS);
    }

    #[test]
    fn test_planned_station_renders_muted() {
        let dataset: Dataset = serde_json::from_str(
            r##"{
                "dimension": "end",
                "color": "#aa66ff",
                "stations": [
                    { "name": "Outer Ring", "x": 800, "z": -60,
                      "status": "planned", "transfer": false, "lines": [] }
                ]
            }"##,
        )
        .unwrap();

        let marker = &build_overlay(&dataset).markers[0];
        assert_eq!(marker.stroke_color, PLANNED_STATION_STROKE);
        assert_eq!(marker.fill_color, PLANNED_STATION_FILL);
    }

    #[test]
    fn test_planned_line_is_gray_and_dashed() {
        let dataset: Dataset = serde_json::from_str(
            r##"{
                "dimension": "overworld",
                "color": "#3388ff",
                "stations": [
                    { "name": "A", "x": 0, "z": 100,
                      "status": "operational", "transfer": false, "lines": ["Ext"] },
                    { "name": "B", "x": 400, "z": 100,
                      "status": "operational", "transfer": false, "lines": ["Ext"] }
                ],
                "lines": [
                    { "name": "Ext", "color": "#00aa55", "status": "planned",
                      "isLoop": false, "stations": ["A", "B"] }
                ]
            }"##,
        )
        .unwrap();

        let path = &build_overlay(&dataset).paths[0];
        assert!(path.dashed);
        assert_eq!(path.color, PLANNED_LINE_COLOR);
        assert_eq!(path.weight, LINE_WEIGHT);
    }

    #[test]
    fn test_single_hub_station_with_degenerate_line() {
        let overlay = build_overlay(&single_hub_dataset());

        assert_eq!(overlay.markers.len(), 1);
        assert_eq!(overlay.paths.len(), 1);

        let marker = &overlay.markers[0];
        assert_eq!(marker.radius, HUB_RADIUS);
        assert_eq!(marker.stroke_weight, HUB_STROKE_WEIGHT);
        assert_eq!(marker.stroke_color, Color32::from_rgb(0x33, 0x88, 0xff));

        // Degenerate single-point path.
        assert_eq!(overlay.paths[0].points.len(), 1);
        assert_eq!(overlay.paths[0].color, Color32::from_rgb(0xff, 0x00, 0x00));
        assert!(!overlay.paths[0].dashed);
    }

    #[test]
    fn test_unresolved_reference_does_not_panic() {
        let dataset: Dataset = serde_json::from_str(
            r##"{
                "dimension": "overworld",
                "color": "#3388ff",
                "stations": [
                    { "name": "A", "x": 0, "z": 0,
                      "status": "operational", "transfer": false, "lines": ["Ghost"] }
                ],
                "lines": [
                    { "name": "Ghost", "color": "#ff0000", "status": "operational",
                      "isLoop": false, "stations": ["A", "Nowhere"] }
                ]
            }"##,
        )
        .unwrap();

        let overlay = build_overlay(&dataset);
        assert_eq!(overlay.paths[0].points.len(), 1);
    }

    #[test]
    fn test_popup_content() {
        let overlay = build_overlay(&single_hub_dataset());
        let popup = &overlay.markers[0].popup;

        assert_eq!(popup.title, "Spawn");
        assert_eq!(popup.status_label, "in service");
        assert_eq!(popup.coordinates, "X=0, Z=0");
        assert_eq!(popup.lines, "A");
    }

    #[test]
    fn test_fractional_coordinates_keep_precision() {
        assert_eq!(format_coordinate(12.5), "12.5");
        assert_eq!(format_coordinate(-300.0), "-300");
    }

    #[test]
    fn test_bad_color_falls_back() {
        assert_eq!(parse_color("rebeccapurple"), FALLBACK_COLOR);
        assert_eq!(parse_color("#ff0000"), Color32::from_rgb(0xff, 0x00, 0x00));
    }
}

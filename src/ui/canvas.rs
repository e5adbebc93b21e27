//! Central canvas UI: the transit map.

use crate::map::{
    CanvasSurface, LinePath, MapController, MapProjection, Overlay, StationMarker, Surface,
    MAX_ZOOM, MIN_ZOOM, WORLD_HALF_EXTENT,
};
use crate::state::{AppState, SelectedStation};
use eframe::egui::{self, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use geo_types::Coord;

use super::colors;

/// Extra slop around small markers for click targets.
const MIN_HIT_RADIUS: f32 = 6.0;

pub fn render_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    controller: &MapController<CanvasSurface>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::canvas::BACKGROUND);

        let mut projection = MapProjection::new();
        projection.update(state.viz_state.zoom, state.viz_state.pan_offset, rect);

        draw_world_frame(&painter, &projection);

        for (_, overlay) in controller.surface().attached() {
            draw_overlay(&painter, overlay, &projection);
        }

        if controller.surface().attached_count() == 0 {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No datasets loaded",
                FontId::proportional(14.0),
                colors::ui::LABEL,
            );
        }

        // Drop a popup whose overlay is no longer attached.
        if let Some(sel) = state.selected_station {
            if !controller.surface().is_attached(sel.dimension) {
                state.selected_station = None;
            }
        }

        handle_canvas_interaction(&response, &rect, state, controller, &projection);

        if let Some(sel) = state.selected_station {
            let overlay = controller.surface().overlay(sel.dimension);
            if let Some(marker) = overlay.markers.get(sel.marker_index) {
                draw_popup(&painter, marker, &projection);
            }
        }
    });
}

/// World-bounds frame and origin crosshair.
fn draw_world_frame(painter: &Painter, projection: &MapProjection) {
    let min = projection.world_to_screen(Coord {
        x: -WORLD_HALF_EXTENT,
        y: -WORLD_HALF_EXTENT,
    });
    let max = projection.world_to_screen(Coord {
        x: WORLD_HALF_EXTENT,
        y: WORLD_HALF_EXTENT,
    });
    painter.rect_stroke(
        Rect::from_min_max(min, max),
        0.0,
        Stroke::new(1.0, colors::canvas::FRAME),
        egui::StrokeKind::Inside,
    );

    let origin = projection.world_to_screen(Coord { x: 0.0, y: 0.0 });
    let axis_stroke = Stroke::new(0.5, colors::canvas::AXIS);
    painter.line_segment(
        [Pos2::new(min.x, origin.y), Pos2::new(max.x, origin.y)],
        axis_stroke,
    );
    painter.line_segment(
        [Pos2::new(origin.x, min.y), Pos2::new(origin.x, max.y)],
        axis_stroke,
    );
}

fn draw_path(painter: &Painter, path: &LinePath, projection: &MapProjection) {
    if path.points.len() < 2 {
        return;
    }

    // Quick bounding box check before converting every point.
    let (min_x, min_z, max_x, max_z) = path.points.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(min_x, min_z, max_x, max_z), c| {
            (
                min_x.min(c.x),
                min_z.min(c.y),
                max_x.max(c.x),
                max_z.max(c.y),
            )
        },
    );
    if !projection.bbox_visible(min_x, min_z, max_x, max_z) {
        return;
    }

    let screen_points: Vec<Pos2> = path
        .points
        .iter()
        .map(|c| projection.world_to_screen(*c))
        .collect();

    let stroke = Stroke::new(path.weight, path.color);
    if path.dashed {
        painter.extend(Shape::dashed_line(&screen_points, stroke, 5.0, 5.0));
    } else {
        painter.add(Shape::line(screen_points, stroke));
    }
}

fn draw_marker(painter: &Painter, marker: &StationMarker, projection: &MapProjection) {
    if !projection.is_visible(marker.position, 100.0) {
        return;
    }

    let pos = projection.world_to_screen(marker.position);
    painter.circle_filled(pos, marker.radius, marker.fill_color);
    painter.circle_stroke(
        pos,
        marker.radius,
        Stroke::new(marker.stroke_weight, marker.stroke_color),
    );
}

fn handle_canvas_interaction(
    response: &egui::Response,
    rect: &Rect,
    state: &mut AppState,
    controller: &MapController<CanvasSurface>,
    projection: &MapProjection,
) {
    // Click selects (or deselects) a station marker.
    if response.clicked() {
        if let Some(click_pos) = response.interact_pointer_pos() {
            state.selected_station = hit_test_markers(controller, projection, click_pos);
        }
    }

    // Dragging pans.
    if response.dragged() {
        state.viz_state.pan_offset += response.drag_delta();
    }

    // Scroll zooms relative to the cursor position.
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let zoom_factor = 1.0 + scroll_delta.y * 0.001;
            let old_zoom = state.viz_state.zoom;
            let new_zoom = (old_zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

            // Keep the point under the cursor stationary.
            if let Some(cursor_pos) = response.hover_pos() {
                let cursor_rel = cursor_pos - rect.center();
                let ratio = new_zoom / old_zoom;
                state.viz_state.pan_offset =
                    cursor_rel * (1.0 - ratio) + state.viz_state.pan_offset * ratio;
            }

            state.viz_state.zoom = new_zoom;
        }
    }

    // Reset view on double-click.
    if response.double_clicked() {
        state.viz_state.reset_view();
        state.selected_station = None;
    }
}

/// Find the closest attached marker within click range of a screen
/// position.
fn hit_test_markers(
    controller: &MapController<CanvasSurface>,
    projection: &MapProjection,
    click_pos: Pos2,
) -> Option<SelectedStation> {
    let mut best: Option<(f32, SelectedStation)> = None;

    for (dimension, overlay) in controller.surface().attached() {
        for (marker_index, marker) in overlay.markers.iter().enumerate() {
            let pos = projection.world_to_screen(marker.position);
            let hit_radius = marker.radius.max(MIN_HIT_RADIUS) + 2.0;
            let distance = pos.distance(click_pos);

            if distance <= hit_radius && best.is_none_or(|(d, _)| distance < d) {
                best = Some((
                    distance,
                    SelectedStation {
                        dimension,
                        marker_index,
                    },
                ));
            }
        }
    }

    best.map(|(_, sel)| sel)
}

fn draw_popup(painter: &Painter, marker: &StationMarker, projection: &MapProjection) {
    let popup = &marker.popup;
    let anchor = projection.world_to_screen(marker.position);

    let status_color = if popup.operational {
        colors::status::IN_SERVICE
    } else {
        colors::status::PLANNED
    };

    let title = painter.layout_no_wrap(
        popup.title.clone(),
        FontId::proportional(13.0),
        colors::canvas::POPUP_TITLE,
    );
    let mut body = vec![painter.layout_no_wrap(
        format!("Status: {}", popup.status_label),
        FontId::proportional(11.0),
        status_color,
    )];
    body.push(painter.layout_no_wrap(
        popup.coordinates.clone(),
        FontId::proportional(11.0),
        colors::canvas::POPUP_TEXT,
    ));
    if !popup.lines.is_empty() {
        body.push(painter.layout_no_wrap(
            format!("Lines: {}", popup.lines),
            FontId::proportional(11.0),
            colors::canvas::POPUP_TEXT,
        ));
    }

    let padding = Vec2::new(8.0, 6.0);
    let line_gap = 3.0;
    let width = body
        .iter()
        .map(|g| g.size().x)
        .fold(title.size().x, f32::max)
        + padding.x * 2.0;
    let height = title.size().y
        + body.iter().map(|g| g.size().y + line_gap).sum::<f32>()
        + padding.y * 2.0;

    let popup_rect = Rect::from_min_size(
        anchor + Vec2::new(marker.radius + 6.0, -(marker.radius + 6.0) - height),
        Vec2::new(width, height),
    );

    painter.rect_filled(popup_rect, 4.0, colors::canvas::POPUP_BACKGROUND);
    painter.rect_stroke(
        popup_rect,
        4.0,
        Stroke::new(1.0, colors::canvas::POPUP_BORDER),
        egui::StrokeKind::Inside,
    );

    let mut cursor = popup_rect.min + padding;
    let title_height = title.size().y;
    painter.galley(cursor, title, colors::canvas::POPUP_TITLE);
    cursor.y += title_height + line_gap;

    for galley in body {
        let galley_height = galley.size().y;
        painter.galley(cursor, galley, colors::canvas::POPUP_TEXT);
        cursor.y += galley_height + line_gap;
    }

    // Pointer notch from the marker toward the popup.
    painter.line_segment(
        [
            anchor + Vec2::new(marker.radius * 0.7, -marker.radius * 0.7),
            popup_rect.left_bottom() + Vec2::new(4.0, 0.0),
        ],
        Stroke::new(1.0, colors::canvas::POPUP_BORDER),
    );
}

/// Paths under markers within one overlay, matching the layering of the
/// source data.
fn draw_overlay(painter: &Painter, overlay: &Overlay, projection: &MapProjection) {
    for path in &overlay.paths {
        draw_path(painter, path, projection);
    }
    for marker in &overlay.markers {
        draw_marker(painter, marker, projection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Dataset;

    fn controller_with_hub() -> MapController<CanvasSurface> {
        let dataset: Dataset = serde_json::from_str(
            r##"{
                "dimension": "overworld",
                "color": "#3388ff",
                "stations": [
                    { "name": "Spawn", "x": 0, "z": 0,
                      "status": "operational", "transfer": false, "lines": [] },
                    { "name": "Far", "x": 4000, "z": 4000,
                      "status": "operational", "transfer": false, "lines": [] }
                ]
            }"##,
        )
        .unwrap();

        let mut controller = MapController::new(CanvasSurface::new());
        controller.render(&dataset);
        controller
    }

    #[test]
    fn test_hit_test_finds_hub_at_screen_center() {
        let controller = controller_with_hub();
        let projection = MapProjection::new();

        let center = projection.screen_rect.center();
        let hit = hit_test_markers(&controller, &projection, center).unwrap();
        assert_eq!(hit.marker_index, 0);
    }

    #[test]
    fn test_hit_test_misses_empty_space() {
        let controller = controller_with_hub();
        let projection = MapProjection::new();

        let off_target = projection.screen_rect.center() + Vec2::new(60.0, 60.0);
        assert!(hit_test_markers(&controller, &projection, off_target).is_none());
    }

    #[test]
    fn test_hit_test_ignores_detached_overlays() {
        let mut controller = controller_with_hub();
        controller.switch_dimension(crate::network::Dimension::Nether);

        let projection = MapProjection::new();
        let center = projection.screen_rect.center();
        assert!(hit_test_markers(&controller, &projection, center).is_none());
    }
}

//! Side panel UI: dimension selector, line legend, and load stats.

use crate::map::{CanvasSurface, MapController};
use crate::network::Dimension;
use crate::state::{AppState, LoadOutcome};
use eframe::egui::{self, Color32, RichText, ScrollArea, Sense, Stroke, Vec2};

use super::colors;

pub fn render_side_panel(
    ctx: &egui::Context,
    state: &mut AppState,
    controller: &mut MapController<CanvasSurface>,
) {
    egui::SidePanel::left("side_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                render_dimension_section(ui, state, controller);
                ui.add_space(5.0);

                render_legend_section(ui, controller);
                ui.add_space(5.0);

                render_stats_section(ui, state);
            });
        });
}

fn dimension_icon(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Overworld => egui_phosphor::regular::GLOBE,
        Dimension::Nether => egui_phosphor::regular::FIRE,
        Dimension::End => egui_phosphor::regular::PLANET,
    }
}

fn render_dimension_section(
    ui: &mut egui::Ui,
    state: &mut AppState,
    controller: &mut MapController<CanvasSurface>,
) {
    egui::CollapsingHeader::new(RichText::new("Dimension").strong())
        .default_open(true)
        .show(ui, |ui| {
            for dim in Dimension::all() {
                let active = controller.active_dimension() == Some(*dim);
                let text = format!("{} {}", dimension_icon(*dim), dim.label());

                if ui.selectable_label(active, text).clicked() {
                    controller.switch_dimension(*dim);

                    // A popup from a now-hidden overlay has nothing to
                    // anchor to.
                    if state
                        .selected_station
                        .is_some_and(|sel| sel.dimension != *dim)
                    {
                        state.selected_station = None;
                    }
                }
            }
        });
}

fn render_legend_section(ui: &mut egui::Ui, controller: &MapController<CanvasSurface>) {
    egui::CollapsingHeader::new(RichText::new("Lines").strong())
        .default_open(true)
        .show(ui, |ui| {
            let mut any = false;

            for (dimension, overlay) in controller.surface().attached() {
                for path in &overlay.paths {
                    any = true;
                    ui.horizontal(|ui| {
                        draw_line_swatch(ui, path.color, path.dashed);
                        ui.label(RichText::new(&path.name).size(12.0));
                        if path.dashed {
                            ui.label(
                                RichText::new("planned")
                                    .small()
                                    .color(colors::status::PLANNED),
                            );
                        }
                    })
                    .response
                    .on_hover_text(dimension.label());
                }
            }

            if !any {
                ui.label(
                    RichText::new("No lines loaded")
                        .small()
                        .color(colors::ui::LABEL),
                );
            }
        });
}

/// Small solid or dashed stroke sample in the legend row.
fn draw_line_swatch(ui: &mut egui::Ui, color: Color32, dashed: bool) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(24.0, 10.0), Sense::hover());
    let painter = ui.painter();
    let y = rect.center().y;
    let stroke = Stroke::new(3.0, color);

    if dashed {
        let mut x = rect.left();
        while x < rect.right() {
            let end = (x + 5.0).min(rect.right());
            painter.line_segment(
                [egui::Pos2::new(x, y), egui::Pos2::new(end, y)],
                stroke,
            );
            x += 10.0;
        }
    } else {
        painter.line_segment(
            [
                egui::Pos2::new(rect.left(), y),
                egui::Pos2::new(rect.right(), y),
            ],
            stroke,
        );
    }
}

fn render_stats_section(ui: &mut egui::Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("Datasets").strong())
        .default_open(true)
        .show(ui, |ui| {
            for load in state.session_stats.iter() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(load.dimension.label())
                            .size(12.0)
                            .color(colors::ui::LABEL),
                    );

                    match load.outcome {
                        LoadOutcome::Pending => {
                            ui.spinner();
                        }
                        LoadOutcome::Loaded {
                            stations,
                            lines,
                            fetch_latency_ms,
                        } => {
                            ui.label(
                                RichText::new("\u{2713}").color(colors::ui::SUCCESS),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "{} stations · {} lines · {:.0}ms",
                                    stations, lines, fetch_latency_ms
                                ))
                                .size(11.0)
                                .color(colors::ui::VALUE),
                            );
                        }
                        LoadOutcome::Failed { kind } => {
                            ui.label(
                                RichText::new("\u{2717}").color(colors::ui::FAILURE),
                            );
                            ui.label(
                                RichText::new(format!("{} failed", kind.label()))
                                    .size(11.0)
                                    .color(colors::ui::FAILURE),
                            );
                        }
                    }
                });
            }
        });
}

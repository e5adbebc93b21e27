//! Top bar UI: app title, active dimension, and status.

use crate::map::{MapController, Surface};
use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar<S: Surface>(
    ctx: &egui::Context,
    state: &AppState,
    controller: &MapController<S>,
) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} Transit Workbench",
                        egui_phosphor::regular::TRAM
                    ))
                    .strong()
                    .size(16.0)
                    .color(Color32::WHITE),
                );

                ui.separator();

                let dimension_text = match controller.active_dimension() {
                    Some(dim) => dim.label(),
                    None => "All dimensions",
                };
                ui.label(
                    RichText::new(dimension_text)
                        .size(13.0)
                        .color(super::colors::ui::VALUE),
                );

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );
            });
        });
}

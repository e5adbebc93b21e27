#![warn(clippy::all)]

//! Transit Workbench - an interactive transit network map for flat worlds.
//!
//! The application fetches one station/line dataset per dimension
//! (overworld, nether, end), renders each as a map overlay, and lets the
//! user switch which dimension is shown. Runs natively against a local
//! data directory or in the browser against the serving origin.

mod loader;
mod map;
mod network;
mod state;
mod ui;

use eframe::egui;
use loader::{LoadChannel, LoadResult};
use map::{CanvasSurface, MapController};
use state::{AppState, LoadOutcome};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Transit Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(TransitApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(TransitApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Data directory for the native build (the stand-in for static file
/// serving).
#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    std::env::var_os("TRANSIT_DATA_DIR")
        .map(Into::into)
        .unwrap_or_else(|| std::path::PathBuf::from("data"))
}

/// Main application state and logic.
pub struct TransitApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Map controller owning the per-dimension overlays
    controller: MapController<CanvasSurface>,

    /// Channel for async dataset loading
    load_channel: LoadChannel,
}

impl TransitApp {
    /// Creates a new TransitApp and starts loading the datasets.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let controller = MapController::new(CanvasSurface::new());
        let load_channel = LoadChannel::new();

        #[cfg(not(target_arch = "wasm32"))]
        load_channel.load_all(cc.egui_ctx.clone(), data_dir());
        #[cfg(target_arch = "wasm32")]
        load_channel.load_all(cc.egui_ctx.clone());

        Self {
            state: AppState::new(),
            controller,
            load_channel,
        }
    }

    /// Apply one dimension's load outcome to the controller and stats.
    fn handle_load_result(&mut self, result: LoadResult) {
        match result {
            LoadResult::Success {
                dimension,
                dataset,
                fetch_latency_ms,
            } => {
                self.controller.render(&dataset);
                self.state.session_stats.record(
                    dimension,
                    LoadOutcome::Loaded {
                        stations: dataset.stations.len(),
                        lines: dataset.lines.len(),
                        fetch_latency_ms,
                    },
                );
                self.state.status_message = format!("Loaded {}", dimension.label());
            }
            LoadResult::Error {
                dimension,
                kind,
                message,
            } => {
                // Failures are developer-facing only; the map stays
                // interactive with whatever data did load.
                log::error!(
                    "{} load failed ({}): {}",
                    dimension.label(),
                    kind.label(),
                    message
                );
                self.state
                    .session_stats
                    .record(dimension, LoadOutcome::Failed { kind });
                self.state.status_message = format!("{} dataset unavailable", dimension.label());
            }
        }

        if self.state.session_stats.is_complete() {
            let loaded = self.state.session_stats.loaded_count();
            let failed = self.state.session_stats.failed_count();
            self.state.status_message = if failed == 0 {
                format!("Ready · {loaded} datasets")
            } else {
                format!("Ready · {loaded} loaded, {failed} unavailable")
            };
        }
    }
}

impl eframe::App for TransitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed dataset loads
        while let Some(result) = self.load_channel.try_recv() {
            self.handle_load_result(result);
        }

        // Render UI panels in the correct order for egui layout
        ui::render_top_bar(ctx, &self.state, &self.controller);
        ui::render_side_panel(ctx, &mut self.state, &mut self.controller);
        ui::render_canvas(ctx, &mut self.state, &self.controller);
    }
}

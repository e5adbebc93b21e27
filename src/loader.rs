//! Dataset loading pipeline.
//!
//! Uses channel-based communication to bridge the fetches with egui's
//! synchronous update loop, in the same shape on both targets: requests
//! run off the update loop and results arrive through an mpsc channel
//! drained each frame.
//!
//! Requests are issued sequentially in the fixed dimension order, but
//! each dimension's fetch+parse is an independent failure boundary: a
//! bad document surfaces as an error result for that dimension and never
//! blocks the remaining loads.

use crate::network::{Dataset, Dimension};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use web_time::Instant;

/// What went wrong while loading one dimension's dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The document could not be retrieved.
    Fetch,
    /// The document was retrieved but is not a valid dataset.
    Parse,
}

impl LoadErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            LoadErrorKind::Fetch => "fetch",
            LoadErrorKind::Parse => "parse",
        }
    }
}

/// Outcome of one dimension's load.
#[derive(Debug, Clone)]
pub enum LoadResult {
    Success {
        dimension: Dimension,
        dataset: Dataset,
        fetch_latency_ms: f64,
    },
    Error {
        dimension: Dimension,
        kind: LoadErrorKind,
        message: String,
    },
}

/// Channel-based loader for the per-dimension dataset documents.
pub struct LoadChannel {
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for LoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Starts loading every dimension's dataset, reading from the given
    /// data directory (the native stand-in for static file serving).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_all(&self, ctx: egui::Context, data_dir: std::path::PathBuf) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            for dim in Dimension::all() {
                let result = load_from_disk(*dim, &data_dir);
                let _ = sender.send(result);
                ctx.request_repaint();
            }
        });
    }

    /// Starts loading every dimension's dataset with the browser fetch
    /// API, relative to the page URL.
    #[cfg(target_arch = "wasm32")]
    pub fn load_all(&self, ctx: egui::Context) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            for dim in Dimension::all() {
                let result = fetch_dataset(*dim).await;
                let _ = sender.send(result);
                ctx.request_repaint();
            }
        });
    }

    /// Non-blocking check for a completed load.
    pub fn try_recv(&self) -> Option<LoadResult> {
        self.receiver.try_recv().ok()
    }
}

fn parse_result(dimension: Dimension, text: &str, fetch_latency_ms: f64) -> LoadResult {
    match serde_json::from_str::<Dataset>(text) {
        Ok(dataset) => {
            log::info!(
                "loaded {}: {} stations, {} lines ({:.0}ms)",
                dimension,
                dataset.stations.len(),
                dataset.lines.len(),
                fetch_latency_ms
            );
            LoadResult::Success {
                dimension,
                dataset,
                fetch_latency_ms,
            }
        }
        Err(e) => LoadResult::Error {
            dimension,
            kind: LoadErrorKind::Parse,
            message: e.to_string(),
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_from_disk(dimension: Dimension, data_dir: &std::path::Path) -> LoadResult {
    let start = Instant::now();
    let path = data_dir.join(format!("{}.json", dimension.key()));

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            return LoadResult::Error {
                dimension,
                kind: LoadErrorKind::Fetch,
                message: format!("{}: {}", path.display(), e),
            }
        }
    };

    parse_result(dimension, &text, start.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_dataset(dimension: Dimension) -> LoadResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let fetch_error = |message: String| LoadResult::Error {
        dimension,
        kind: LoadErrorKind::Fetch,
        message,
    };

    let start = Instant::now();
    let url = dimension.data_path();

    let Some(window) = web_sys::window() else {
        return fetch_error("no window".to_string());
    };

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::SameOrigin);

    let request = match web_sys::Request::new_with_str_and_init(&url, &opts) {
        Ok(request) => request,
        Err(e) => return fetch_error(format!("bad request for {}: {:?}", url, e)),
    };

    let response = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(value) => value,
        Err(e) => return fetch_error(format!("fetch {} failed: {:?}", url, e)),
    };

    let response: web_sys::Response = match response.dyn_into() {
        Ok(response) => response,
        Err(_) => return fetch_error(format!("fetch {} returned a non-response", url)),
    };

    if !response.ok() {
        return fetch_error(format!("HTTP {} for {}", response.status(), url));
    }

    let text_promise = match response.text() {
        Ok(promise) => promise,
        Err(e) => return fetch_error(format!("no body for {}: {:?}", url, e)),
    };

    let text = match JsFuture::from(text_promise).await {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(e) => return fetch_error(format!("body read for {} failed: {:?}", url, e)),
    };

    parse_result(dimension, &text, start.elapsed().as_secs_f64() * 1000.0)
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use mimalloc::MiMalloc;

use deepsearch::client::SearchClient;
use deepsearch::config::Config;
use deepsearch::controller::SearchController;
use deepsearch::ui::{self, DeepSearchApp};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> eframe::Result {
    env_logger::init();

    // ── Config ──
    let config = Config::from_env();

    // ── Tokio runtime ──
    // Kept alive for the whole eframe session; the controller only holds a
    // handle for spawning search requests.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    let handle = runtime.handle().clone();

    let controller = SearchController::new(SearchClient::new(config.api_base_url), handle);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Deep Search")
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "deepsearch",
        options,
        Box::new(move |cc| {
            ui::install_fonts(&cc.egui_ctx);
            Ok(Box::new(DeepSearchApp::new(cc, controller)))
        }),
    )
}

//! Sightline Viewer - single-camera feed with guide-line overlays
//!
//! Main entry point for the application.

mod app;
mod ui;

use app::ViewerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Starting Sightline Viewer v{}", env!("CARGO_PKG_VERSION"));

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 500.0])
            .with_min_inner_size([560.0, 400.0])
            .with_title("Sightline Viewer"),
        vsync: true,
        ..Default::default()
    };

    // Run the app
    eframe::run_native(
        "Sightline Viewer",
        native_options,
        Box::new(|cc| Box::new(ViewerApp::new(cc))),
    )
}

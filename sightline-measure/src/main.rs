//! Sightline Measure - multi-camera measurement viewer
//!
//! Main entry point for the application.

mod app;
mod ui;
mod view;

use app::MeasureApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Starting Sightline Measure v{}", env!("CARGO_PKG_VERSION"));

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title(view::BROWSE_TITLE),
        vsync: true,
        ..Default::default()
    };

    // Run the app
    eframe::run_native(
        "Sightline Measure",
        native_options,
        Box::new(|cc| Box::new(MeasureApp::new(cc))),
    )
}

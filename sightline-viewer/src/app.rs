//! Main application state and UI composition
//!
//! One selected camera drives the live view; the side panel holds the camera
//! menu and the overlay element controls. The overlay configuration is
//! re-derived from the raw inputs every tick, so control changes take effect
//! on the next frame without any event bookkeeping.

use std::time::Duration;

use eframe::egui;

use sightline_core::capture::{self, CameraInfo, CameraSelector, NokhwaSource};
use sightline_core::overlay;

use crate::ui::camera_view::CameraView;
use crate::ui::controls;

/// Repaint cadence driving the capture poll, the original's 30 ms timer.
const TICK: Duration = Duration::from_millis(30);

/// Main application state
pub struct ViewerApp {
    cameras: Vec<CameraInfo>,
    selector: CameraSelector<NokhwaSource>,
    inputs: overlay::OverlayInputs,
    view: CameraView,
}

impl ViewerApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing Sightline Viewer...");

        let mut cameras = capture::list_cameras();
        if cameras.is_empty() {
            // assume a default device rather than presenting an empty menu
            cameras.push(CameraInfo {
                index: 0,
                name: "Camera 0".to_owned(),
            });
        }
        log::info!("Found {} camera(s)", cameras.len());

        // the first camera is selected at startup
        let mut selector = CameraSelector::new(NokhwaSource::new());
        selector.select(cameras[0].index);

        Self {
            cameras,
            selector,
            inputs: overlay::OverlayInputs::default(),
            view: CameraView::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Control column
        egui::SidePanel::right("control_panel")
            .resizable(false)
            .exact_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(5.0);
                controls::camera_input(ui, &self.cameras, &mut self.selector);
                ui.add_space(15.0);
                controls::overlay_groups(ui, &mut self.inputs);
            });

        // Poll the selected camera and burn the overlays into this tick's frame
        let config = self.inputs.config();
        let rendered = self
            .selector
            .poll()
            .map(|frame| overlay::render(&frame, &config));

        // Live view
        let placeholder = self.selector.placeholder_label();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui, ctx, rendered.as_ref(), &placeholder);
        });

        ctx.request_repaint_after(TICK);
    }
}

//! Main application state and UI composition
//!
//! Every enumerated camera gets its own capture worker at startup; the
//! `ViewController` decides which feeds are drawn where. Saving swaps the
//! live layout for the measurement report; nothing is written anywhere.

use std::time::Duration;

use eframe::egui;

use sightline_core::capture::{self, CameraInfo, CaptureWorker};

use crate::ui::{feeds, panel};
use crate::view::{ViewController, ViewState};

/// Repaint cadence driving the capture polls.
const TICK: Duration = Duration::from_millis(30);

/// Height of the camera strip while browsing.
const STRIP_HEIGHT: f32 = 140.0;

/// One fixed camera feed and its display texture.
pub struct CameraFeed {
    info: CameraInfo,
    worker: Option<CaptureWorker>,
    texture: Option<egui::TextureHandle>,
    live: bool,
}

impl CameraFeed {
    fn open(info: CameraInfo) -> Self {
        let worker = match CaptureWorker::spawn(info.index) {
            Ok(worker) => Some(worker),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        };
        Self {
            info,
            worker,
            texture: None,
            live: false,
        }
    }

    /// Pull the latest frame into the display texture. A feed with no frame
    /// this tick falls back to its placeholder.
    fn poll(&mut self, ctx: &egui::Context) {
        let frame = self.worker.as_ref().and_then(|worker| worker.latest_frame());
        match frame {
            Some(frame) => {
                let image = egui::ColorImage::from_rgb(
                    [frame.width() as usize, frame.height() as usize],
                    frame.data(),
                );
                match &mut self.texture {
                    Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                    None => {
                        let name = format!("feed-{}", self.info.index);
                        self.texture =
                            Some(ctx.load_texture(name, image, egui::TextureOptions::LINEAR));
                    }
                }
                self.live = true;
            }
            None => {
                self.live = false;
            }
        }
    }

    /// The display texture, only while a frame arrived this tick.
    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        if self.live {
            self.texture.as_ref()
        } else {
            None
        }
    }

    /// Placeholder text: the camera's 1-based number.
    pub fn placeholder(&self) -> String {
        format!("Camera {}", self.info.index + 1)
    }
}

/// Raw dimension entry fields. Values are only echoed on the report; the
/// measured numbers themselves are placeholders.
#[derive(Default)]
pub struct MeasurementEntries {
    pub width: String,
    pub height: String,
}

/// Main application state
pub struct MeasureApp {
    feeds: Vec<CameraFeed>,
    controller: ViewController,
    entries: MeasurementEntries,
    applied_title: &'static str,
}

impl MeasureApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing Sightline Measure...");

        let mut cameras = capture::list_cameras();
        if cameras.is_empty() {
            // assume a default device so the layout has at least one feed
            cameras.push(CameraInfo {
                index: 0,
                name: "Camera 0".to_owned(),
            });
        }
        log::info!("Opening {} camera feed(s)", cameras.len());

        let feeds: Vec<CameraFeed> = cameras.into_iter().map(CameraFeed::open).collect();
        let controller = ViewController::new(feeds.len());
        let applied_title = controller.title();

        Self {
            feeds,
            controller,
            entries: MeasurementEntries::default(),
            applied_title,
        }
    }
}

impl eframe::App for MeasureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for feed in &mut self.feeds {
            feed.poll(ctx);
        }

        // Title tracks the controller state
        let title = self.controller.title();
        if title != self.applied_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
            self.applied_title = title;
        }

        // Controls and measurement entry
        egui::SidePanel::right("measure_panel")
            .resizable(false)
            .exact_width(260.0)
            .show(ctx, |ui| {
                panel::measurement_panel(ui, &mut self.controller, &mut self.entries);
            });

        // Camera strip, only while browsing
        if self.controller.state() == ViewState::Browsing {
            egui::TopBottomPanel::bottom("camera_strip")
                .exact_height(STRIP_HEIGHT)
                .show(ctx, |ui| {
                    feeds::camera_strip(ui, &self.feeds, &self.controller);
                });
        }

        // Main area: focused feed, or the report while measuring
        let focus = self.controller.focus();
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.controller.state() {
                ViewState::Measuring => {
                    panel::measurement_report(ui, &self.feeds[focus], &self.entries);
                }
                _ => {
                    feeds::focused_feed(ui, &self.feeds[focus]);
                }
            }
        });

        ctx.request_repaint_after(TICK);
    }
}

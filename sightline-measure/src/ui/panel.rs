//! Measurement side panel and report
//!
//! The side panel carries the Next control and the dimension entry fields
//! while browsing, and the Reset control on the report screen. Measured
//! values on the report are fixed placeholders; Save changes only which
//! screen is shown.

use eframe::egui::{self, Color32};

use crate::app::{CameraFeed, MeasurementEntries};
use crate::ui::feeds;
use crate::view::{ViewController, ViewState};

// Placeholder measurement results shown on the report.
const MEASURED_WIDTH_MM: f32 = 123.4;
const MEASURED_HEIGHT_MM: f32 = 82.6;

/// Side panel contents for the current view state.
pub fn measurement_panel(
    ui: &mut egui::Ui,
    controller: &mut ViewController,
    entries: &mut MeasurementEntries,
) {
    ui.add_space(5.0);
    ui.heading("Measurement");
    ui.separator();

    if controller.state() == ViewState::Measuring {
        ui.label("Measurement saved.");
        ui.add_space(10.0);
        if ui.button("Reset").clicked() {
            controller.reset();
        }
        return;
    }

    ui.group(|ui| {
        ui.strong("Camera");
        ui.label(format!(
            "Feed {} of {}",
            controller.focus() + 1,
            controller.camera_count()
        ));
        if ui.button("Next").clicked() {
            controller.next();
        }
    });

    ui.add_space(15.0);

    ui.group(|ui| {
        ui.strong("Dimensions");
        entry_field(ui, "Width", &mut entries.width);
        entry_field(ui, "Height", &mut entries.height);
    });

    ui.add_space(15.0);

    if ui.button("Save").clicked() {
        controller.save();
    }
}

/// The measurement report: the camera view relocated into the report layout
/// plus the measured values.
pub fn measurement_report(ui: &mut egui::Ui, feed: &CameraFeed, entries: &MeasurementEntries) {
    ui.heading("Measure result");
    ui.separator();

    let camera_height = ui.available_height() * 0.6;
    ui.group(|ui| {
        ui.set_height(camera_height);
        feeds::feed_box(
            ui,
            feed,
            egui::Vec2::new(ui.available_width(), camera_height),
            true,
        );
    });

    ui.add_space(10.0);

    egui::Grid::new("measure_results")
        .num_columns(3)
        .spacing([30.0, 6.0])
        .show(ui, |ui| {
            ui.strong("");
            ui.strong("Entered");
            ui.strong("Measured");
            ui.end_row();

            ui.label("Width");
            ui.label(entered_or_dash(&entries.width));
            ui.colored_label(
                Color32::from_rgb(112, 172, 71),
                format!("{:.1} mm", MEASURED_WIDTH_MM),
            );
            ui.end_row();

            ui.label("Height");
            ui.label(entered_or_dash(&entries.height));
            ui.colored_label(
                Color32::from_rgb(112, 172, 71),
                format!("{:.1} mm", MEASURED_HEIGHT_MM),
            );
            ui.end_row();
        });
}

fn entry_field(ui: &mut egui::Ui, label: &str, text: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(text).desired_width(80.0));
    });
}

fn entered_or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_owned()
    } else {
        text.trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entered_or_dash() {
        assert_eq!(entered_or_dash(""), "-");
        assert_eq!(entered_or_dash("  "), "-");
        assert_eq!(entered_or_dash(" 120 "), "120");
    }
}

//! Control panel
//!
//! Camera selection menu and the three overlay element groups. Location
//! fields stay populated while disabled, so re-enabling an element restores
//! its previous coordinates.

use eframe::egui;

use sightline_core::capture::{CameraInfo, CameraSelector, NokhwaSource};
use sightline_core::overlay::OverlayInputs;

/// Camera selection group with a popup menu of enumerated devices.
pub fn camera_input(
    ui: &mut egui::Ui,
    cameras: &[CameraInfo],
    selector: &mut CameraSelector<NokhwaSource>,
) {
    ui.group(|ui| {
        ui.strong("Camera Input");
        ui.menu_button("Select Camera", |ui| {
            for info in cameras {
                let checked = selector.selected() == Some(info.index);
                if ui.selectable_label(checked, info.name.as_str()).clicked() {
                    if !checked {
                        selector.select(info.index);
                    }
                    ui.close_menu();
                }
            }
        });
    });
}

/// The three overlay element groups.
pub fn overlay_groups(ui: &mut egui::Ui, inputs: &mut OverlayInputs) {
    ui.group(|ui| {
        ui.strong("Vertical Line");
        ui.checkbox(&mut inputs.vertical_enabled, "Enable");
        location_field(
            ui,
            "X Location",
            inputs.vertical_enabled,
            &mut inputs.vertical_x,
        );
    });

    ui.add_space(15.0);

    ui.group(|ui| {
        ui.strong("Horizontal Line");
        ui.checkbox(&mut inputs.horizontal_enabled, "Enable");
        location_field(
            ui,
            "Y Location",
            inputs.horizontal_enabled,
            &mut inputs.horizontal_y,
        );
    });

    ui.add_space(15.0);

    ui.group(|ui| {
        ui.strong("Cross Hair");
        ui.checkbox(&mut inputs.cross_enabled, "Enable");
        location_field(ui, "X Location", inputs.cross_enabled, &mut inputs.cross_x);
        location_field(ui, "Y Location", inputs.cross_enabled, &mut inputs.cross_y);
    });
}

fn location_field(ui: &mut egui::Ui, label: &str, enabled: bool, text: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add_enabled(enabled, egui::TextEdit::singleline(text).desired_width(80.0));
    });
}

//! Live camera view
//!
//! Letterboxes the feed into the fixed 5:4 viewing area and draws the frame
//! texture, falling back to the camera's textual placeholder whenever no
//! frame arrived this tick.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Vec2};

use sightline_core::Frame;

/// Viewing area aspect ratio (width : height).
const X_RATIO: f32 = 5.0;
const Y_RATIO: f32 = 4.0;

/// Frame border, matching the original widget styling.
const BORDER_COLOR: Color32 = Color32::from_rgb(191, 144, 0);
const BORDER_WIDTH: f32 = 6.0;
const BORDER_ROUNDING: f32 = 5.0;

/// Live view display component
pub struct CameraView {
    texture: Option<egui::TextureHandle>,
}

impl CameraView {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Draw the current frame (or the placeholder) into the available area.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        frame: Option<&Frame>,
        placeholder: &str,
    ) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = letterbox_rect(response.rect, X_RATIO, Y_RATIO);

        if let Some(frame) = frame {
            let image = egui::ColorImage::from_rgb(
                [frame.width() as usize, frame.height() as usize],
                frame.data(),
            );
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ctx.load_texture("camera-view", image, egui::TextureOptions::LINEAR));
                }
            }
        }

        if frame.is_some() {
            if let Some(texture) = &self.texture {
                painter.image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        } else {
            // no frame this tick: textual placeholder instead of a stale image
            painter.rect_filled(rect, BORDER_ROUNDING, Color32::from_gray(20));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                placeholder,
                egui::FontId::proportional(24.0),
                Color32::from_gray(140),
            );
        }

        painter.rect_stroke(rect, BORDER_ROUNDING, Stroke::new(BORDER_WIDTH, BORDER_COLOR));
    }
}

/// Largest `x_ratio : y_ratio` rectangle centered in `available`.
pub fn letterbox_rect(available: Rect, x_ratio: f32, y_ratio: f32) -> Rect {
    let (width, height) =
        letterbox_size(available.width(), available.height(), x_ratio, y_ratio);
    Rect::from_center_size(available.center(), Vec2::new(width, height))
}

fn letterbox_size(avail_w: f32, avail_h: f32, x_ratio: f32, y_ratio: f32) -> (f32, f32) {
    if avail_w * y_ratio > avail_h * x_ratio {
        (avail_h * x_ratio / y_ratio, avail_h)
    } else {
        (avail_w, avail_w * y_ratio / x_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_in_wide_area_is_height_bound() {
        let (w, h) = letterbox_size(1000.0, 400.0, 5.0, 4.0);
        assert_eq!(h, 400.0);
        assert_eq!(w, 500.0);
    }

    #[test]
    fn test_letterbox_in_tall_area_is_width_bound() {
        let (w, h) = letterbox_size(500.0, 1000.0, 5.0, 4.0);
        assert_eq!(w, 500.0);
        assert_eq!(h, 400.0);
    }

    #[test]
    fn test_letterbox_rect_is_centered_and_contained() {
        let avail = Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::new(1000.0, 400.0));
        let rect = letterbox_rect(avail, 5.0, 4.0);
        assert_eq!(rect.center(), avail.center());
        assert!(avail.contains_rect(rect));
    }
}

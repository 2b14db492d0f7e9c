//! Camera feed drawing
//!
//! Draws individual feeds aspect-fit into their boxes, with the textual
//! placeholder when a feed has no frame this tick. The strip shows every
//! feed side by side; the focused feed fills the main area.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Vec2};

use crate::app::CameraFeed;
use crate::view::ViewController;

const FOCUS_BORDER: Color32 = Color32::from_rgb(191, 144, 0);

/// The visible feeds side by side, the focused one highlighted.
pub fn camera_strip(ui: &mut egui::Ui, feeds: &[CameraFeed], controller: &ViewController) {
    let visible: Vec<(usize, &CameraFeed)> = feeds
        .iter()
        .enumerate()
        .filter(|(idx, _)| controller.is_feed_visible(*idx))
        .collect();

    let spacing = ui.spacing().item_spacing.x;
    let count = visible.len().max(1) as f32;
    let box_width =
        ((ui.available_width() - spacing * (count - 1.0)) / count).max(40.0);
    let box_height = ui.available_height();

    ui.horizontal(|ui| {
        for (idx, feed) in visible {
            feed_box(
                ui,
                feed,
                Vec2::new(box_width, box_height),
                idx == controller.focus(),
            );
        }
    });
}

/// The focused feed, filling the available area.
pub fn focused_feed(ui: &mut egui::Ui, feed: &CameraFeed) {
    let size = ui.available_size();
    feed_box(ui, feed, size, true);
}

/// One feed in a box: frame texture aspect-fit onto a dark background, or
/// the placeholder text.
pub fn feed_box(ui: &mut egui::Ui, feed: &CameraFeed, size: Vec2, focused: bool) {
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 4.0, Color32::from_gray(20));

    if let Some(texture) = feed.texture() {
        let tex_size = texture.size_vec2();
        let aspect = if tex_size.y > 0.0 {
            tex_size.x / tex_size.y
        } else {
            1.0
        };
        painter.image(
            texture.id(),
            aspect_fit(rect, aspect),
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    } else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            feed.placeholder(),
            egui::FontId::proportional(16.0),
            Color32::from_gray(140),
        );
    }

    let stroke = if focused {
        Stroke::new(3.0, FOCUS_BORDER)
    } else {
        Stroke::new(1.0, Color32::from_gray(60))
    };
    painter.rect_stroke(rect, 4.0, stroke);
}

/// Largest rectangle of the given aspect ratio centered in `avail`.
fn aspect_fit(avail: Rect, aspect: f32) -> Rect {
    let (width, height) = if avail.width() / avail.height() > aspect {
        (avail.height() * aspect, avail.height())
    } else {
        (avail.width(), avail.width() / aspect)
    };
    Rect::from_center_size(avail.center(), Vec2::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_fit_wide_area() {
        let avail = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(400.0, 100.0));
        let rect = aspect_fit(avail, 4.0 / 3.0);
        assert_eq!(rect.height(), 100.0);
        assert!((rect.width() - 400.0 / 3.0).abs() < 0.01);
        assert_eq!(rect.center(), avail.center());
    }

    #[test]
    fn test_aspect_fit_tall_area() {
        let avail = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 400.0));
        let rect = aspect_fit(avail, 4.0 / 3.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 75.0);
        assert!(avail.contains_rect(rect));
    }
}

//! Guide-line and crosshair overlays
//!
//! `OverlayInputs` holds the raw control-panel state (enable toggles plus
//! text-field contents) and derives an `OverlayConfig` from it; `render`
//! burns the configured elements into a copy of a frame. Derivation is a pure
//! function of the inputs, so the UI can recompute it every tick.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Vertical guide line color.
pub const VERTICAL_LINE_COLOR: [u8; 3] = [68, 114, 195];
/// Horizontal guide line color.
pub const HORIZONTAL_LINE_COLOR: [u8; 3] = [112, 172, 71];
/// Crosshair color.
pub const CROSS_HAIR_COLOR: [u8; 3] = [236, 125, 49];

/// Stroke thickness of every overlay element, in pixels.
pub const LINE_THICKNESS: u32 = 4;
/// Crosshair arm length in each direction from the center, endpoints
/// included.
pub const CROSS_HAIR_ARM: u32 = 30;

/// Resolved overlay state consumed by the renderer. `None` means the element
/// is disabled for this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Column of the full-height vertical line.
    pub vertical_line: Option<u32>,
    /// Row of the full-width horizontal line.
    pub horizontal_line: Option<u32>,
    /// Center of the crosshair.
    pub cross_hair: Option<(u32, u32)>,
}

/// Raw control-panel state for the overlay elements.
///
/// Text fields keep whatever the user typed; a field that fails to parse
/// while its toggle is on simply disables that element until the text is
/// fixed, without turning the toggle off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayInputs {
    pub vertical_enabled: bool,
    pub vertical_x: String,
    pub horizontal_enabled: bool,
    pub horizontal_y: String,
    pub cross_enabled: bool,
    pub cross_x: String,
    pub cross_y: String,
}

impl Default for OverlayInputs {
    fn default() -> Self {
        Self {
            vertical_enabled: false,
            vertical_x: "100".to_owned(),
            horizontal_enabled: false,
            horizontal_y: "100".to_owned(),
            cross_enabled: false,
            cross_x: "300".to_owned(),
            cross_y: "300".to_owned(),
        }
    }
}

impl OverlayInputs {
    /// Derive the overlay configuration for the current tick.
    pub fn config(&self) -> OverlayConfig {
        let vertical_line = if self.vertical_enabled {
            parse_coordinate(&self.vertical_x)
        } else {
            None
        };
        let horizontal_line = if self.horizontal_enabled {
            parse_coordinate(&self.horizontal_y)
        } else {
            None
        };
        let cross_hair = if self.cross_enabled {
            parse_coordinate(&self.cross_x).zip(parse_coordinate(&self.cross_y))
        } else {
            None
        };
        OverlayConfig {
            vertical_line,
            horizontal_line,
            cross_hair,
        }
    }
}

/// Parse a coordinate field. Non-integer text and negative values both yield
/// `None`: a negative coordinate was never drawable, so it disables the
/// element the same way a typo does.
fn parse_coordinate(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// Paint the configured overlays onto a copy of `frame`.
///
/// Draw order is fixed: vertical line, horizontal line, crosshair. The
/// crosshair is painted last so it is never occluded. Elements reaching
/// outside the frame are clipped.
pub fn render(frame: &Frame, config: &OverlayConfig) -> Frame {
    let mut out = frame.clone();
    if let Some(x) = config.vertical_line {
        paint_vertical_line(&mut out, x);
    }
    if let Some(y) = config.horizontal_line {
        paint_horizontal_line(&mut out, y);
    }
    if let Some((x, y)) = config.cross_hair {
        paint_cross_hair(&mut out, x, y);
    }
    out
}

const HALF_THICKNESS: i64 = LINE_THICKNESS as i64 / 2;
const ARM: i64 = CROSS_HAIR_ARM as i64;

fn paint_vertical_line(frame: &mut Frame, x: u32) {
    let x = x as i64;
    let h = frame.height() as i64;
    fill_rect(
        frame,
        x - HALF_THICKNESS,
        0,
        x + HALF_THICKNESS,
        h,
        VERTICAL_LINE_COLOR,
    );
}

fn paint_horizontal_line(frame: &mut Frame, y: u32) {
    let y = y as i64;
    let w = frame.width() as i64;
    fill_rect(
        frame,
        0,
        y - HALF_THICKNESS,
        w,
        y + HALF_THICKNESS,
        HORIZONTAL_LINE_COLOR,
    );
}

fn paint_cross_hair(frame: &mut Frame, x: u32, y: u32) {
    let (x, y) = (x as i64, y as i64);
    // horizontal arm, endpoints inclusive
    fill_rect(
        frame,
        x - ARM,
        y - HALF_THICKNESS,
        x + ARM + 1,
        y + HALF_THICKNESS,
        CROSS_HAIR_COLOR,
    );
    // vertical arm
    fill_rect(
        frame,
        x - HALF_THICKNESS,
        y - ARM,
        x + HALF_THICKNESS,
        y + ARM + 1,
        CROSS_HAIR_COLOR,
    );
}

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the frame.
fn fill_rect(frame: &mut Frame, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 3]) {
    let w = frame.width() as i64;
    let h = frame.height() as i64;
    let x0 = x0.clamp(0, w);
    let x1 = x1.clamp(0, w);
    let y0 = y0.clamp(0, h);
    let y1 = y1.clamp(0, h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let row_stride = w as usize * 3;
    let data = frame.data_mut();
    for y in y0..y1 {
        let row = y as usize * row_stride;
        for x in x0..x1 {
            let i = row + x as usize * 3;
            data[i..i + 3].copy_from_slice(&color);
        }
    }
}

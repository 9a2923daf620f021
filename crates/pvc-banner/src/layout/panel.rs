//! Background and panel rectangles

use crate::constants::{BORDER_THICKNESS_MM, MARGIN_MM};

use super::{Panel, Rect};

/// The full page, used for the background fill.
pub fn background_rect(width_mm: f64, height_mm: f64) -> Rect {
    Rect::new(0.0, 0.0, width_mm, height_mm)
}

/// The panel inset by [`MARGIN_MM`] on every side.
///
/// Pages narrower or shorter than twice the margin give a zero or negative
/// panel size; this is passed through unchanged.
pub fn panel_rect(width_mm: f64, height_mm: f64) -> Panel {
    Panel {
        rect: Rect::new(
            MARGIN_MM,
            MARGIN_MM,
            width_mm - 2.0 * MARGIN_MM,
            height_mm - 2.0 * MARGIN_MM,
        ),
        border_width_mm: BORDER_THICKNESS_MM,
    }
}

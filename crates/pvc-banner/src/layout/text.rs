//! Text block placement
//!
//! Lines are stacked top to bottom with a fixed 130% line spacing. In
//! centered mode every line is centered on its own measured width and the
//! block is centered vertically using two fixed empirical corrections; in
//! left-aligned mode the block hangs from the top margin.

use crate::constants::{
    BASELINE_COMPENSATION_RATIO, HALF_LINE_ADJUSTMENT_RATIO, LEFT_TEXT_INDENT_MM,
    LINE_SPACING_RATIO, MARGIN_MM, mm_to_pt, pt_to_mm,
};
use crate::types::Result;

use super::TextLine;

/// Measures rendered text width.
///
/// Implementations may fail for characters the font cannot draw; layout
/// passes such failures through untouched.
pub trait TextMetrics {
    /// Width of `text` set at `font_size_pt`, in points.
    fn text_width_pt(&self, text: &str, font_size_pt: f64) -> Result<f64>;
}

/// Vertical metrics shared by all lines of a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlockMetrics {
    pub line_spacing_mm: f64,
    pub total_height_mm: f64,
}

impl TextBlockMetrics {
    pub fn new(font_size_mm: f64, line_count: usize) -> Self {
        let line_spacing_mm = font_size_mm * LINE_SPACING_RATIO;
        let total_height_mm = line_count.saturating_sub(1) as f64 * line_spacing_mm + font_size_mm;
        Self {
            line_spacing_mm,
            total_height_mm,
        }
    }
}

/// Place every line of `lines` on a page of the given size.
///
/// # Arguments
/// * `lines` - Text lines, top to bottom
/// * `font_size_mm` - Font size in millimeters
/// * `page_width_mm` / `page_height_mm` - Page size in millimeters
/// * `center_text` - Center each line, or left-align from the top margin
/// * `metrics` - Width provider, queried once per line when centering
pub fn layout_text<M: TextMetrics>(
    lines: &[String],
    font_size_mm: f64,
    page_width_mm: f64,
    page_height_mm: f64,
    center_text: bool,
    metrics: &M,
) -> Result<Vec<TextLine>> {
    let block = TextBlockMetrics::new(font_size_mm, lines.len());

    let start_y = if center_text {
        page_height_mm / 2.0 + block.total_height_mm / 2.0
            - font_size_mm * BASELINE_COMPENSATION_RATIO
            - block.line_spacing_mm * HALF_LINE_ADJUSTMENT_RATIO
    } else {
        page_height_mm - MARGIN_MM
    };

    let font_size_pt = mm_to_pt(font_size_mm);

    lines
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let x = if center_text {
                let width_mm = pt_to_mm(metrics.text_width_pt(content, font_size_pt)?);
                (page_width_mm - width_mm) / 2.0
            } else {
                MARGIN_MM + LEFT_TEXT_INDENT_MM
            };

            Ok(TextLine {
                content: content.clone(),
                x,
                y: start_y - i as f64 * block.line_spacing_mm,
            })
        })
        .collect()
}

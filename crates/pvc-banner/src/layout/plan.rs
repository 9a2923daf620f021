//! Full banner layout

use crate::types::{BannerSpec, Result};

use super::{LayoutPlan, TextMetrics, background_rect, layout_text, mounting_circles, panel_rect};

/// Derive the complete layout for a banner.
///
/// This is a pure function of `spec` and the widths reported by `metrics`;
/// calling it twice with the same inputs gives identical plans.
pub fn compute_layout<M: TextMetrics>(spec: &BannerSpec, metrics: &M) -> Result<LayoutPlan> {
    let text_lines = layout_text(
        &spec.text,
        spec.font_size_mm,
        spec.width_mm,
        spec.height_mm,
        spec.center_text,
        metrics,
    )?;

    let plan = LayoutPlan {
        page_width_mm: spec.width_mm,
        page_height_mm: spec.height_mm,
        font_size_mm: spec.font_size_mm,
        background: background_rect(spec.width_mm, spec.height_mm),
        panel: panel_rect(spec.width_mm, spec.height_mm),
        circles: mounting_circles(spec.width_mm, spec.height_mm),
        text_lines,
    };

    log::debug!(
        "Layout {}x{} mm: {} circles, {} text lines",
        spec.width_mm,
        spec.height_mm,
        plan.circles.len(),
        plan.text_lines.len()
    );

    Ok(plan)
}

//! Banner page rendering

use crate::color::BannerColors;
use crate::constants::mm_to_pt;
use crate::font::LoadedFont;
use crate::layout::LayoutPlan;
use crate::types::Result;
use lopdf::{Document, Object};
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions};

use super::shapes::{
    TextFont, draw_text_run, fill_circle, fill_rect, set_fill_color, set_stroke, stroke_rect,
};

/// Build the drawing operations for one banner.
///
/// Paint order is background, panel, border, circles, text, so later
/// elements always sit on top of the panel fill.
pub fn banner_ops(plan: &LayoutPlan, colors: &BannerColors, font: &TextFont) -> Vec<Op> {
    let mut ops = vec![Op::SaveGraphicsState];

    ops.push(set_fill_color(colors.background));
    ops.push(fill_rect(&plan.background));
    ops.push(fill_rect(&plan.panel.rect));

    ops.extend(set_stroke(colors.foreground, plan.panel.border_width_mm));
    ops.push(stroke_rect(&plan.panel.rect));

    ops.push(set_fill_color(colors.foreground));
    ops.extend(plan.circles.iter().map(fill_circle));

    for line in &plan.text_lines {
        ops.extend(draw_text_run(line, font, plan.font_size_mm));
    }

    ops.push(Op::RestoreGraphicsState);
    ops
}

/// Render the plan into a one-page PDF sized exactly to the banner.
pub fn render_pdf(
    plan: &LayoutPlan,
    colors: &BannerColors,
    font: &LoadedFont,
    title: &str,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(title);

    let text_font = match font {
        LoadedFont::Embedded { font, .. } => TextFont::Embedded(doc.add_font(font)),
        LoadedFont::Builtin(font) => TextFont::Builtin(*font),
    };

    let ops = banner_ops(plan, colors, &text_font);
    doc.pages.push(PdfPage::new(
        Mm(plan.page_width_mm as f32),
        Mm(plan.page_height_mm as f32),
        ops,
    ));

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF serialization produced {} warnings", warnings.len());
    }

    set_page_boxes(&bytes, mm_to_pt(plan.page_width_mm), mm_to_pt(plan.page_height_mm))
}

/// Rewrite MediaBox, TrimBox and CropBox of every page to `[0 0 width height]`.
///
/// printpdf rounds page boxes to whole points, which is up to 0.18 mm off.
pub fn set_page_boxes(bytes: &[u8], width_pt: f64, height_pt: f64) -> Result<Vec<u8>> {
    let mut doc = Document::load_mem(bytes)?;
    let page_box = Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(width_pt as f32),
        Object::Real(height_pt as f32),
    ]);

    let page_ids: Vec<_> = doc.get_pages().into_values().collect();
    for page_id in page_ids {
        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        for key in ["MediaBox", "TrimBox", "CropBox"] {
            page.set(key, page_box.clone());
        }
    }

    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

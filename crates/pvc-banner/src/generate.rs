//! Banner generation pipeline
//!
//! Font loading, layout and PDF serialization are blocking work and run on a
//! blocking task; only the final file write is async.

use crate::color::BannerColors;
use crate::font::load_font;
use crate::layout::{LayoutPlan, compute_layout};
use crate::options::BannerOptions;
use crate::render::render_pdf;
use crate::types::Result;
use std::path::PathBuf;

const DOCUMENT_TITLE: &str = "Banner PVC";

/// Summary of a generated banner
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub bytes_written: usize,
    pub circle_count: usize,
    pub line_count: usize,
    /// Description of the font that was actually used
    pub font: String,
}

struct Rendered {
    bytes: Vec<u8>,
    circle_count: usize,
    line_count: usize,
    font: String,
}

fn render_banner(options: &BannerOptions) -> Result<Rendered> {
    let font = load_font(&options.font_chain());
    let spec = options.to_spec();
    let plan = compute_layout(&spec, &font)?;
    let colors = BannerColors::resolve(&spec.foreground_color_name, &spec.background_color_name);
    let bytes = render_pdf(&plan, &colors, &font, DOCUMENT_TITLE)?;

    Ok(Rendered {
        bytes,
        circle_count: plan.circles.len(),
        line_count: plan.text_lines.len(),
        font: font.describe(),
    })
}

/// Compute the layout plan without rendering anything.
pub async fn plan_banner(options: &BannerOptions) -> Result<LayoutPlan> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        let font = load_font(&options.font_chain());
        compute_layout(&options.to_spec(), &font)
    })
    .await?
}

/// Render the banner to PDF bytes.
pub async fn generate_banner_bytes(options: &BannerOptions) -> Result<Vec<u8>> {
    let options = options.clone();
    let rendered = tokio::task::spawn_blocking(move || render_banner(&options)).await??;
    Ok(rendered.bytes)
}

/// Render the banner and write it to `options.output`.
pub async fn generate_banner(options: &BannerOptions) -> Result<GenerationReport> {
    let output = options.output.clone();
    let options = options.clone();

    let rendered = tokio::task::spawn_blocking(move || render_banner(&options)).await??;

    tokio::fs::write(&output, &rendered.bytes).await?;
    log::info!(
        "Wrote {} ({} bytes, {} circles, {} lines)",
        output.display(),
        rendered.bytes.len(),
        rendered.circle_count,
        rendered.line_count
    );

    Ok(GenerationReport {
        output,
        bytes_written: rendered.bytes.len(),
        circle_count: rendered.circle_count,
        line_count: rendered.line_count,
        font: rendered.font,
    })
}

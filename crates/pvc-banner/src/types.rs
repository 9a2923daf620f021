use thiserror::Error;

#[derive(Error, Debug)]
pub enum BannerError {
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("PDF structure error: {0}")]
    Document(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Cannot measure {ch:?} in {text:?}: glyph not supported by font")]
    UnsupportedGlyph { ch: char, text: String },
}

pub type Result<T> = std::result::Result<T, BannerError>;

/// Immutable description of one banner, in millimeters.
///
/// Dimensions are taken as given: a page smaller than twice the margin yields
/// a degenerate panel rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerSpec {
    pub width_mm: f64,
    pub height_mm: f64,
    pub font_size_mm: f64,
    /// Text lines, top to bottom
    pub text: Vec<String>,
    pub center_text: bool,
    pub foreground_color_name: String,
    pub background_color_name: String,
}

impl BannerSpec {
    /// Build a spec, splitting `raw_text` into lines on `\n`.
    pub fn new(
        width_mm: f64,
        height_mm: f64,
        font_size_mm: f64,
        raw_text: &str,
        center_text: bool,
        foreground_color_name: impl Into<String>,
        background_color_name: impl Into<String>,
    ) -> Self {
        Self {
            width_mm,
            height_mm,
            font_size_mm,
            text: split_lines(raw_text),
            center_text,
            foreground_color_name: foreground_color_name.into(),
            background_color_name: background_color_name.into(),
        }
    }
}

/// Split raw input into lines. Every `\n` starts a new line, so `k` breaks
/// always give `k + 1` lines; a trailing `\r` is dropped from each line.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

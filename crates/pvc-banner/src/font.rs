//! Font loading and text measurement
//!
//! Fonts are resolved through a fixed fallback chain: the custom font file,
//! then a system font file, then the built-in Helvetica that every PDF viewer
//! provides. File failures are logged and skipped; the built-in font cannot
//! fail, so loading always produces a usable font.

use crate::constants::BUILTIN_UNITS_PER_EM;
use crate::layout::TextMetrics;
use crate::types::{BannerError, Result};
use printpdf::{BuiltinFont, ParsedFont};
use std::path::{Path, PathBuf};

/// Default location of the custom banner font
pub const DEFAULT_CUSTOM_FONT: &str = "fonts/banner.ttf";

/// Default system font tried when the custom font is unavailable
pub const DEFAULT_SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Built-in font used as the last resort
pub const FALLBACK_BUILTIN_FONT: BuiltinFont = BuiltinFont::Helvetica;

/// One step of the font fallback chain
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// A TrueType/OpenType file on disk
    File { label: &'static str, path: PathBuf },
    /// The built-in Helvetica
    Builtin,
}

impl FontSource {
    /// Try to load this source.
    pub fn load(&self) -> Result<LoadedFont> {
        match self {
            FontSource::File { label, path } => {
                let bytes = std::fs::read(path)?;
                let font = parse_font(&bytes)?;
                Ok(LoadedFont::Embedded {
                    label: *label,
                    path: path.clone(),
                    font,
                })
            }
            FontSource::Builtin => Ok(LoadedFont::Builtin(FALLBACK_BUILTIN_FONT)),
        }
    }
}

fn parse_font(bytes: &[u8]) -> Result<ParsedFont> {
    let mut warnings = Vec::new();
    ParsedFont::from_bytes(bytes, 0, &mut warnings)
        .ok_or_else(|| BannerError::Pdf("Failed to parse font".to_string()))
}

/// Custom and system font locations, tried in that order
#[derive(Debug, Clone, PartialEq)]
pub struct FontChain {
    pub custom: PathBuf,
    pub system: PathBuf,
}

impl Default for FontChain {
    fn default() -> Self {
        Self {
            custom: PathBuf::from(DEFAULT_CUSTOM_FONT),
            system: PathBuf::from(DEFAULT_SYSTEM_FONT),
        }
    }
}

impl FontChain {
    pub fn new(custom: impl Into<PathBuf>, system: impl Into<PathBuf>) -> Self {
        Self {
            custom: custom.into(),
            system: system.into(),
        }
    }

    /// Sources in the order they are attempted
    pub fn sources(&self) -> [FontSource; 3] {
        [
            FontSource::File {
                label: "custom",
                path: self.custom.clone(),
            },
            FontSource::File {
                label: "system",
                path: self.system.clone(),
            },
            FontSource::Builtin,
        ]
    }
}

/// Load the first font of `chain` that can be read and parsed.
///
/// This does blocking file I/O and should run off the async executor.
pub fn load_font(chain: &FontChain) -> LoadedFont {
    for source in chain.sources() {
        match source.load() {
            Ok(font) => {
                log::debug!("Using {} font", font.describe());
                return font;
            }
            Err(e) => {
                if let FontSource::File { label, path } = &source {
                    log::warn!(
                        "Could not load {} font {}: {}",
                        label,
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    LoadedFont::Builtin(FALLBACK_BUILTIN_FONT)
}

/// A font ready for measuring and drawing
pub enum LoadedFont {
    Embedded {
        label: &'static str,
        path: PathBuf,
        font: ParsedFont,
    },
    Builtin(BuiltinFont),
}

impl LoadedFont {
    /// Short human-readable description, e.g. `system (/usr/share/.../x.ttf)`
    pub fn describe(&self) -> String {
        match self {
            LoadedFont::Embedded { label, path, .. } => format!("{} ({})", label, path.display()),
            LoadedFont::Builtin(font) => format!("built-in {:?}", font),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, LoadedFont::Builtin(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadedFont::Embedded { path, .. } => Some(path),
            LoadedFont::Builtin(_) => None,
        }
    }
}

impl TextMetrics for LoadedFont {
    fn text_width_pt(&self, text: &str, font_size_pt: f64) -> Result<f64> {
        match self {
            LoadedFont::Embedded { font, .. } => embedded_text_width(font, text, font_size_pt),
            LoadedFont::Builtin(_) => builtin_text_width(text, font_size_pt),
        }
    }
}

fn unsupported(ch: char, text: &str) -> BannerError {
    BannerError::UnsupportedGlyph {
        ch,
        text: text.to_string(),
    }
}

fn embedded_text_width(font: &ParsedFont, text: &str, font_size_pt: f64) -> Result<f64> {
    let units_per_em = f64::from(font.font_metrics.units_per_em);
    let mut advance = 0.0;
    for ch in text.chars() {
        let glyph_id = font
            .lookup_glyph_index(ch as u32)
            .ok_or_else(|| unsupported(ch, text))?;
        advance += f64::from(font.get_horizontal_advance(glyph_id));
    }
    Ok(advance / units_per_em * font_size_pt)
}

/// Width of `text` in the built-in Helvetica. Only printable ASCII is covered.
pub fn builtin_text_width(text: &str, font_size_pt: f64) -> Result<f64> {
    let mut advance = 0.0;
    for ch in text.chars() {
        advance += f64::from(helvetica_advance(ch).ok_or_else(|| unsupported(ch, text))?);
    }
    Ok(advance / BUILTIN_UNITS_PER_EM * font_size_pt)
}

/// Helvetica advance widths for ' ' through '~', per 1000 em units
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

fn helvetica_advance(ch: char) -> Option<u16> {
    let index = (ch as u32).checked_sub(' ' as u32)? as usize;
    HELVETICA_WIDTHS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_table_bounds() {
        assert_eq!(helvetica_advance(' '), Some(278));
        assert_eq!(helvetica_advance('A'), Some(667));
        assert_eq!(helvetica_advance('a'), Some(556));
        assert_eq!(helvetica_advance('~'), Some(584));
        assert_eq!(helvetica_advance('\u{7f}'), None);
        assert_eq!(helvetica_advance('\t'), None);
    }

    #[test]
    fn test_builtin_width() {
        // "AA" = 2 * 667 / 1000 em
        let width = builtin_text_width("AA", 10.0).unwrap();
        assert!((width - 13.34).abs() < 1e-9);
        assert_eq!(builtin_text_width("", 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_builtin_rejects_non_ascii() {
        match builtin_text_width("Ação", 10.0) {
            Err(BannerError::UnsupportedGlyph { ch, .. }) => assert_eq!(ch, 'ç'),
            other => panic!("expected UnsupportedGlyph, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_chain_order() {
        let chain = FontChain::new("a.ttf", "b.ttf");
        let sources = chain.sources();
        assert!(matches!(&sources[0], FontSource::File { label: "custom", .. }));
        assert!(matches!(&sources[1], FontSource::File { label: "system", .. }));
        assert_eq!(sources[2], FontSource::Builtin);
    }

    #[test]
    fn test_missing_files_fall_back_to_builtin() {
        let chain = FontChain::new("/nonexistent/custom.ttf", "/nonexistent/system.ttf");
        let font = load_font(&chain);
        assert!(font.is_builtin());
        assert!(font.path().is_none());
    }

    fn garbage_font() -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font file").unwrap();
        file
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let file = garbage_font();
        let source = FontSource::File {
            label: "custom",
            path: file.path().to_path_buf(),
        };
        assert!(matches!(source.load(), Err(BannerError::Pdf(_))));
    }

    #[test]
    fn test_unparseable_custom_font_falls_through() {
        let file = garbage_font();
        let font = load_font(&FontChain::new(file.path(), "/nonexistent/system.ttf"));
        assert!(font.is_builtin());

        if Path::new(DEFAULT_SYSTEM_FONT).exists() {
            let font = load_font(&FontChain::new(file.path(), DEFAULT_SYSTEM_FONT));
            assert!(!font.is_builtin());
            assert_eq!(font.path(), Some(Path::new(DEFAULT_SYSTEM_FONT)));
        }
    }

    #[test]
    fn test_embedded_font_metrics() {
        if !Path::new(DEFAULT_SYSTEM_FONT).exists() {
            eprintln!("{} not installed, skipping", DEFAULT_SYSTEM_FONT);
            return;
        }

        let font = load_font(&FontChain::new("/nonexistent/custom.ttf", DEFAULT_SYSTEM_FONT));
        assert!(matches!(font, LoadedFont::Embedded { label: "system", .. }));

        let narrow = font.text_width_pt("i", 72.0).unwrap();
        let wide = font.text_width_pt("Banner", 72.0).unwrap();
        assert!(narrow > 0.0);
        assert!(wide > narrow);
        // Advances scale linearly with the font size
        let half = font.text_width_pt("Banner", 36.0).unwrap();
        assert!((wide - 2.0 * half).abs() < 1e-9);

        match font.text_width_pt("A\u{10FFFF}", 72.0) {
            Err(BannerError::UnsupportedGlyph { ch, .. }) => assert_eq!(ch, '\u{10FFFF}'),
            other => panic!("expected UnsupportedGlyph, got {:?}", other),
        }
    }
}

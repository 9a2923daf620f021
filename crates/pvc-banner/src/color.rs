//! Named print colors
//!
//! Banners are printed on CMYK presses, so colors are kept as curated
//! process-color values rather than converted from RGB.

/// A subtractive process color, each component in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

/// Color used for any name not in the table
pub const FALLBACK_COLOR: Cmyk = Cmyk::new(0.0, 0.0, 0.0, 1.0);

const COLOR_TABLE: [(&str, Cmyk); 18] = [
    ("black", Cmyk::new(0.0, 0.0, 0.0, 1.0)),
    ("white", Cmyk::new(0.0, 0.0, 0.0, 0.0)),
    ("red", Cmyk::new(0.0, 1.0, 1.0, 0.0)),
    ("blue", Cmyk::new(1.0, 1.0, 0.0, 0.0)),
    ("yellow", Cmyk::new(0.0, 0.0, 1.0, 0.0)),
    ("green", Cmyk::new(1.0, 0.0, 1.0, 0.0)),
    ("orange", Cmyk::new(0.0, 0.5, 1.0, 0.0)),
    ("purple", Cmyk::new(0.5, 1.0, 0.0, 0.0)),
    ("pink", Cmyk::new(0.0, 0.25, 0.2, 0.0)),
    ("cyan", Cmyk::new(1.0, 0.0, 0.0, 0.0)),
    ("magenta", Cmyk::new(0.0, 1.0, 0.0, 0.0)),
    ("lime", Cmyk::new(0.25, 0.0, 1.0, 0.0)),
    ("navy", Cmyk::new(1.0, 1.0, 0.0, 0.5)),
    ("maroon", Cmyk::new(0.0, 1.0, 1.0, 0.5)),
    ("teal", Cmyk::new(1.0, 0.0, 0.0, 0.5)),
    ("olive", Cmyk::new(0.0, 0.0, 1.0, 0.5)),
    ("silver", Cmyk::new(0.0, 0.0, 0.0, 0.25)),
    ("gold", Cmyk::new(0.0, 0.16, 1.0, 0.0)),
];

/// Look up a named color. Matching ignores case and surrounding whitespace;
/// unknown names silently resolve to black.
pub fn resolve_color(name: &str) -> Cmyk {
    let key = name.trim().to_ascii_lowercase();
    match COLOR_TABLE.iter().find(|(n, _)| *n == key) {
        Some((_, color)) => *color,
        None => {
            log::debug!("Unknown color {:?}, using black", name);
            FALLBACK_COLOR
        }
    }
}

/// All known color names, in table order
pub fn color_names() -> impl Iterator<Item = &'static str> {
    COLOR_TABLE.iter().map(|(name, _)| *name)
}

/// Foreground and background resolved for one banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerColors {
    pub foreground: Cmyk,
    pub background: Cmyk,
}

impl BannerColors {
    pub fn resolve(foreground: &str, background: &str) -> Self {
        Self {
            foreground: resolve_color(foreground),
            background: resolve_color(background),
        }
    }
}

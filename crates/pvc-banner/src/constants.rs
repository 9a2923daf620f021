//! Shared constants for banner layout
//!
//! This module centralizes the fixed geometry of the banner template and the
//! typographic ratios used when placing the text block. None of these are
//! configurable at runtime.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_INCH * MM_PER_INCH
}

// =============================================================================
// Panel
// =============================================================================

/// Inset of the bordered panel from every page edge (mm)
pub const MARGIN_MM: f64 = 25.0;

/// Stroke width of the panel border (mm)
pub const BORDER_THICKNESS_MM: f64 = 0.5;

// =============================================================================
// Mounting Circles
// =============================================================================

/// Diameter of every mounting circle (mm)
pub const CIRCLE_DIAMETER_MM: f64 = 12.0;

/// Distance of circle centers from the page edge (mm)
pub const CIRCLE_OFFSET_MM: f64 = 37.5;

/// Spans shorter than this get no intermediate circles (mm)
pub const MIN_CIRCLE_SPACING_MM: f64 = 500.0;

/// Upper bound on intermediate circles along one edge (a 5 km banner)
pub const MAX_CIRCLES_PER_EDGE: usize = 10_000;

/// Control point factor for approximating circles with Bezier curves.
/// 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

// =============================================================================
// Text Block
// =============================================================================

/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_SPACING_RATIO: f64 = 1.3;

/// Shift from visual baseline to optical center, as a multiple of the font size
pub const BASELINE_COMPENSATION_RATIO: f64 = 0.35;

/// Fraction of the line spacing subtracted from the centered start position
pub const HALF_LINE_ADJUSTMENT_RATIO: f64 = 0.5;

/// Extra indent past the panel edge for left-aligned text (mm)
pub const LEFT_TEXT_INDENT_MM: f64 = 5.0;

/// Glyph advances of the built-in Helvetica are expressed per 1000 em units
pub const BUILTIN_UNITS_PER_EM: f64 = 1000.0;

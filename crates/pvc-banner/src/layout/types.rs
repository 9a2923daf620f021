//! Layout data types for banners
//!
//! Everything here is in millimeters with the origin at the bottom-left
//! corner of the page. Conversion to points happens only when rendering.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A rectangular area in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// The bordered, filled rectangle inset from the page edges
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Panel {
    pub rect: Rect,
    pub border_width_mm: f64,
}

/// Which part of the banner a mounting circle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CircleKind {
    Corner,
    /// On the top or bottom edge
    Horizontal,
    /// On the left or right edge
    Vertical,
}

/// A mounting circle, given by its center
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius_mm: f64,
    pub kind: CircleKind,
}

/// One line of text anchored at its baseline start
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TextLine {
    pub content: String,
    pub x: f64,
    pub y: f64,
}

/// Every coordinate needed to draw one banner
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LayoutPlan {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub font_size_mm: f64,
    /// Full page
    pub background: Rect,
    pub panel: Panel,
    /// Corners first, then horizontal pairs, then vertical pairs
    pub circles: Vec<Circle>,
    /// Top to bottom
    pub text_lines: Vec<TextLine>,
}

impl LayoutPlan {
    pub fn circles_of(&self, kind: CircleKind) -> impl Iterator<Item = &Circle> {
        self.circles.iter().filter(move |c| c.kind == kind)
    }
}

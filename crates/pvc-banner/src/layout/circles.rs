//! Mounting circle placement
//!
//! Four corner circles are always present. Along each axis, extra circles are
//! added between the corners once the corner-to-corner span reaches
//! [`MIN_CIRCLE_SPACING_MM`]. The span is divided into `count + 1` equal
//! segments with `count = floor(span / MIN_CIRCLE_SPACING_MM)`, so the
//! resulting spacing can end up somewhat below the nominal minimum.
//! The count is capped at [`MAX_CIRCLES_PER_EDGE`]; the span is then split
//! evenly among the capped count.

use crate::constants::{
    CIRCLE_DIAMETER_MM, CIRCLE_OFFSET_MM, MAX_CIRCLES_PER_EDGE, MIN_CIRCLE_SPACING_MM,
};

use super::{Circle, CircleKind};

/// Intermediate circle distribution along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDistribution {
    /// Distance between the two corner centers on this axis
    pub span_mm: f64,
    /// Intermediate circles per edge
    pub count: usize,
    /// Distance between neighbouring centers (0 when `count` is 0)
    pub spacing_mm: f64,
}

impl AxisDistribution {
    /// Compute the distribution for a page dimension along one axis.
    pub fn for_dimension(dimension_mm: f64) -> Self {
        let span_mm = dimension_mm - 2.0 * CIRCLE_OFFSET_MM;
        if span_mm < MIN_CIRCLE_SPACING_MM {
            return Self {
                span_mm,
                count: 0,
                spacing_mm: 0.0,
            };
        }

        // Float-to-int casts saturate, so infinite spans land on the cap too
        let count =
            ((span_mm / MIN_CIRCLE_SPACING_MM).floor() as usize).min(MAX_CIRCLES_PER_EDGE);
        Self {
            span_mm,
            count,
            spacing_mm: span_mm / (count as f64 + 1.0),
        }
    }

    /// Interior positions measured from the page edge
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.count).map(move |i| CIRCLE_OFFSET_MM + i as f64 * self.spacing_mm)
    }
}

fn circle(x: f64, y: f64, kind: CircleKind) -> Circle {
    Circle {
        x,
        y,
        radius_mm: CIRCLE_DIAMETER_MM / 2.0,
        kind,
    }
}

/// The four corner circles: bottom-left, bottom-right, top-left, top-right.
pub fn corner_circles(width_mm: f64, height_mm: f64) -> [Circle; 4] {
    let o = CIRCLE_OFFSET_MM;
    [
        circle(o, o, CircleKind::Corner),
        circle(width_mm - o, o, CircleKind::Corner),
        circle(o, height_mm - o, CircleKind::Corner),
        circle(width_mm - o, height_mm - o, CircleKind::Corner),
    ]
}

/// Circles between the corners: for each interior x a bottom/top pair, then
/// for each interior y a left/right pair.
pub fn intermediate_circles(width_mm: f64, height_mm: f64) -> Vec<Circle> {
    let o = CIRCLE_OFFSET_MM;
    let horizontal = AxisDistribution::for_dimension(width_mm);
    let vertical = AxisDistribution::for_dimension(height_mm);

    let mut circles =
        Vec::with_capacity(horizontal.count.saturating_add(vertical.count).saturating_mul(2));

    for x in horizontal.positions() {
        circles.push(circle(x, o, CircleKind::Horizontal));
        circles.push(circle(x, height_mm - o, CircleKind::Horizontal));
    }

    for y in vertical.positions() {
        circles.push(circle(o, y, CircleKind::Vertical));
        circles.push(circle(width_mm - o, y, CircleKind::Vertical));
    }

    circles
}

/// All mounting circles in plan order.
pub fn mounting_circles(width_mm: f64, height_mm: f64) -> Vec<Circle> {
    let mut circles = corner_circles(width_mm, height_mm).to_vec();
    circles.extend(intermediate_circles(width_mm, height_mm));
    circles
}

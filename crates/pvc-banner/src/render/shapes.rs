//! Drawing primitives
//!
//! Each builder takes millimeter geometry from the layout and emits printpdf
//! operations in points.

use crate::color::Cmyk;
use crate::constants::{BEZIER_CIRCLE_FACTOR, mm_to_pt};
use crate::layout::{Circle, Rect, TextLine};
use printpdf::{
    BuiltinFont, Color, FontId, LinePoint, Op, PaintMode, Point, Polygon, PolygonRing, Pt,
    TextItem, WindingOrder,
};

/// Font handle used for text runs
#[derive(Debug, Clone)]
pub enum TextFont {
    Builtin(BuiltinFont),
    Embedded(FontId),
}

fn pt(mm: f64) -> Pt {
    Pt(mm_to_pt(mm) as f32)
}

fn point(x_mm: f64, y_mm: f64) -> Point {
    Point {
        x: pt(x_mm),
        y: pt(y_mm),
    }
}

fn anchor(x_mm: f64, y_mm: f64) -> LinePoint {
    LinePoint {
        p: point(x_mm, y_mm),
        bezier: false,
    }
}

fn control(x_mm: f64, y_mm: f64) -> LinePoint {
    LinePoint {
        p: point(x_mm, y_mm),
        bezier: true,
    }
}

fn polygon(points: Vec<LinePoint>, mode: PaintMode) -> Op {
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        },
    }
}

fn rect_points(rect: &Rect) -> Vec<LinePoint> {
    vec![
        anchor(rect.x, rect.y),
        anchor(rect.right(), rect.y),
        anchor(rect.right(), rect.top()),
        anchor(rect.x, rect.top()),
    ]
}

/// Convert a process color to a printpdf color
pub fn pdf_color(color: Cmyk) -> Color {
    Color::Cmyk(printpdf::Cmyk::new(
        color.c as f32,
        color.m as f32,
        color.y as f32,
        color.k as f32,
        None,
    ))
}

pub fn set_fill_color(color: Cmyk) -> Op {
    Op::SetFillColor {
        col: pdf_color(color),
    }
}

pub fn set_stroke(color: Cmyk, width_mm: f64) -> [Op; 2] {
    [
        Op::SetOutlineColor {
            col: pdf_color(color),
        },
        Op::SetOutlineThickness { pt: pt(width_mm) },
    ]
}

/// Filled rectangle in the current fill color
pub fn fill_rect(rect: &Rect) -> Op {
    polygon(rect_points(rect), PaintMode::Fill)
}

/// Rectangle outline in the current stroke color and width
pub fn stroke_rect(rect: &Rect) -> Op {
    polygon(rect_points(rect), PaintMode::Stroke)
}

/// Filled circle in the current fill color, built from four cubic Bezier arcs
pub fn fill_circle(circle: &Circle) -> Op {
    let (cx, cy, r) = (circle.x, circle.y, circle.radius_mm);
    let k = r * BEZIER_CIRCLE_FACTOR;

    let points = vec![
        anchor(cx + r, cy),
        control(cx + r, cy + k),
        control(cx + k, cy + r),
        anchor(cx, cy + r),
        control(cx - k, cy + r),
        control(cx - r, cy + k),
        anchor(cx - r, cy),
        control(cx - r, cy - k),
        control(cx - k, cy - r),
        anchor(cx, cy - r),
        control(cx + k, cy - r),
        control(cx + r, cy - k),
        anchor(cx + r, cy),
    ];

    polygon(points, PaintMode::Fill)
}

/// One positioned text run in the current fill color
pub fn draw_text_run(line: &TextLine, font: &TextFont, font_size_mm: f64) -> Vec<Op> {
    let pos = point(line.x, line.y);
    let size = pt(font_size_mm);
    let items = vec![TextItem::Text(line.content.clone())];

    let mut ops = vec![Op::StartTextSection, Op::SetTextCursor { pos }];
    match font {
        TextFont::Builtin(font) => {
            ops.push(Op::SetFontSizeBuiltinFont { font: *font, size });
            ops.push(Op::WriteTextBuiltinFont { items, font: *font });
        }
        TextFont::Embedded(font_id) => {
            ops.push(Op::SetFontSize {
                font: font_id.clone(),
                size,
            });
            ops.push(Op::WriteText {
                items,
                font: font_id.clone(),
            });
        }
    }
    ops.push(Op::EndTextSection);
    ops
}

use pvc_banner::constants::{CIRCLE_OFFSET_MM, LINE_SPACING_RATIO, pt_to_mm};
use pvc_banner::font::{FALLBACK_BUILTIN_FONT, builtin_text_width};
use pvc_banner::layout::{AxisDistribution, CircleKind};
use pvc_banner::*;

/// Fixed-pitch metrics: every character is 0.6 em wide
struct Monospace;

impl TextMetrics for Monospace {
    fn text_width_pt(&self, text: &str, font_size_pt: f64) -> Result<f64> {
        Ok(text.chars().count() as f64 * 0.6 * font_size_pt)
    }
}

fn spec(width_mm: f64, height_mm: f64, text: &str, center_text: bool) -> BannerSpec {
    BannerSpec::new(width_mm, height_mm, 25.0, text, center_text, "black", "yellow")
}

#[test]
fn test_layout_is_deterministic() {
    let spec = spec(3000.0, 700.0, "GRAND\nOPENING", true);
    let first = compute_layout(&spec, &Monospace).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_layout(&spec, &Monospace).unwrap(), first);
    }
}

#[test]
fn test_corner_circles_at_offset() {
    for (w, h) in [(1000.0, 700.0), (3000.0, 700.0), (120.0, 90.0), (5000.0, 2500.0)] {
        let plan = compute_layout(&spec(w, h, "x", true), &Monospace).unwrap();
        let corners: Vec<_> = plan.circles_of(CircleKind::Corner).collect();
        assert_eq!(corners.len(), 4);
        for c in corners {
            let dx = c.x.min(w - c.x);
            let dy = c.y.min(h - c.y);
            assert!((dx - CIRCLE_OFFSET_MM).abs() < 1e-9);
            assert!((dy - CIRCLE_OFFSET_MM).abs() < 1e-9);
        }
    }
}

#[test]
fn test_intermediate_count_3000_by_700() {
    let horizontal = AxisDistribution::for_dimension(3000.0);
    assert_eq!(horizontal.span_mm, 2925.0);
    assert_eq!(horizontal.count, 5);
    assert!((horizontal.spacing_mm - 487.5).abs() < 1e-9);

    let vertical = AxisDistribution::for_dimension(700.0);
    assert_eq!(vertical.span_mm, 625.0);
    assert_eq!(vertical.count, 1);
    assert!((vertical.spacing_mm - 312.5).abs() < 1e-9);

    let plan = compute_layout(&spec(3000.0, 700.0, "x", true), &Monospace).unwrap();
    assert_eq!(plan.circles_of(CircleKind::Horizontal).count(), 10);
    assert_eq!(plan.circles_of(CircleKind::Vertical).count(), 2);
    assert_eq!(plan.circles.len(), 16);

    let bottom_xs: Vec<f64> = plan
        .circles_of(CircleKind::Horizontal)
        .filter(|c| c.y == CIRCLE_OFFSET_MM)
        .map(|c| c.x)
        .collect();
    assert_eq!(bottom_xs, vec![525.0, 1012.5, 1500.0, 1987.5, 2475.0]);

    let left: Vec<_> = plan
        .circles_of(CircleKind::Vertical)
        .filter(|c| c.x == CIRCLE_OFFSET_MM)
        .collect();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].y, 350.0);
}

#[test]
fn test_no_intermediates_below_spacing() {
    let plan = compute_layout(&spec(1000.0, 500.0, "x", true), &Monospace).unwrap();
    assert_eq!(plan.circles_of(CircleKind::Vertical).count(), 0);
    // 1000 - 75 = 925 still gets one pair on the long edges
    assert_eq!(plan.circles_of(CircleKind::Horizontal).count(), 2);

    let plan = compute_layout(&spec(400.0, 300.0, "x", true), &Monospace).unwrap();
    assert_eq!(plan.circles.len(), 4);
}

#[test]
fn test_plan_circle_order() {
    let plan = compute_layout(&spec(3000.0, 700.0, "x", true), &Monospace).unwrap();
    let kinds: Vec<_> = plan.circles.iter().map(|c| c.kind).collect();
    let first_horizontal = kinds.iter().position(|k| *k == CircleKind::Horizontal).unwrap();
    let first_vertical = kinds.iter().position(|k| *k == CircleKind::Vertical).unwrap();
    assert_eq!(first_horizontal, 4);
    assert!(first_vertical > first_horizontal);
    assert!(kinds[..4].iter().all(|k| *k == CircleKind::Corner));
}

#[test]
fn test_text_line_count_and_spacing() {
    let plan = compute_layout(&spec(1000.0, 700.0, "ONE\nTWO\nTHREE\nFOUR", true), &Monospace)
        .unwrap();
    assert_eq!(plan.text_lines.len(), 4);

    let spacing = 25.0 * LINE_SPACING_RATIO;
    for pair in plan.text_lines.windows(2) {
        assert!(pair[1].y < pair[0].y);
        assert!((pair[0].y - pair[1].y - spacing).abs() < 1e-9);
    }
    assert_eq!(plan.text_lines[2].content, "THREE");
}

#[test]
fn test_trailing_break_adds_line() {
    let plan = compute_layout(&spec(1000.0, 700.0, "SALE\n", false), &Monospace).unwrap();
    assert_eq!(plan.text_lines.len(), 2);
    assert_eq!(plan.text_lines[1].content, "");
}

#[test]
fn test_centered_single_line_x() {
    let plan = compute_layout(&spec(1000.0, 700.0, "Banner PVC", true), &Monospace).unwrap();
    let measured_mm = pt_to_mm(Monospace.text_width_pt("Banner PVC", 25.0 / 25.4 * 72.0).unwrap());
    let line = &plan.text_lines[0];
    assert!((line.x - (1000.0 - measured_mm) / 2.0).abs() < 1e-9);
}

#[test]
fn test_centered_multi_line_block_start() {
    let plan = compute_layout(&spec(1000.0, 700.0, "A\nB\nC", true), &Monospace).unwrap();
    let f = 25.0;
    let spacing = f * 1.3;
    let total = 2.0 * spacing + f;
    let expected = 350.0 + total / 2.0 - f * 0.35 - spacing * 0.5;
    assert!((plan.text_lines[0].y - expected).abs() < 1e-9);
}

#[test]
fn test_left_aligned_layout() {
    let plan = compute_layout(&spec(1000.0, 700.0, "short\nmuch longer line", false), &Monospace)
        .unwrap();
    assert_eq!(plan.text_lines[0].y, 675.0);
    assert!(plan.text_lines.iter().all(|l| l.x == 30.0));
}

#[test]
fn test_builtin_font_metrics_in_layout() {
    let font = LoadedFont::Builtin(FALLBACK_BUILTIN_FONT);
    let plan = compute_layout(&spec(1000.0, 700.0, "Banner PVC", true), &font).unwrap();
    let width_mm = pt_to_mm(builtin_text_width("Banner PVC", 25.0 / 25.4 * 72.0).unwrap());
    assert!((plan.text_lines[0].x - (1000.0 - width_mm) / 2.0).abs() < 1e-9);
}

#[test]
fn test_unmeasurable_text_is_an_error() {
    let font = LoadedFont::Builtin(FALLBACK_BUILTIN_FONT);
    let result = compute_layout(&spec(1000.0, 700.0, "日本", true), &font);
    assert!(matches!(result, Err(BannerError::UnsupportedGlyph { .. })));

    // Left-aligned text is never measured
    let plan = compute_layout(&spec(1000.0, 700.0, "日本", false), &font).unwrap();
    assert_eq!(plan.text_lines.len(), 1);
}

#[test]
fn test_degenerate_page_still_lays_out() {
    let plan = compute_layout(&spec(30.0, 20.0, "x", true), &Monospace).unwrap();
    assert!(plan.panel.rect.width < 0.0);
    assert!(plan.panel.rect.height < 0.0);
    assert_eq!(plan.circles.len(), 4);
}

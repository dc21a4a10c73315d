//! src/chart/grid.rs
//!
//! Background layer: axis lines through the center, tick marks and rotated
//! numeric labels.
//!
//! Ticks run from the axis center value to each extreme in ten equal steps,
//! so every axis carries at most 21 ticks. Labels are rotated clockwise by
//! the configured angle and pushed away from their tick by a margin plus the
//! rotated half-extent of the measured text, so the label's near corner sits
//! at the same distance from the tick whatever its length.

use super::config::{Extremum, GridStyle};
use super::geometry::Geometry;
use crate::surface::Surface;

/// Steps from the axis center to either extreme.
pub const TICKS_PER_HALF: usize = 10;

/// Tick values for one axis: the center first, then the upper half
/// ascending, then the lower half descending.
///
/// A degenerate range (no positive step) yields only the center value.
pub fn ticks(ext: &Extremum) -> Vec<f64> {
    let start = ext.center();
    let step = (ext.max - start) / TICKS_PER_HALF as f64;
    if !step.is_finite() || step <= 0.0 {
        return vec![start];
    }
    // absorbs rounding in `start + i * step` at the extremes
    let eps = step * 1e-9;

    let mut out = Vec::with_capacity(2 * TICKS_PER_HALF + 1);
    let mut i = 0usize;
    loop {
        let v = start + i as f64 * step;
        if v > ext.max + eps {
            break;
        }
        out.push(v);
        i += 1;
    }
    let mut i = 1usize;
    loop {
        let v = start - i as f64 * step;
        if v < ext.min - eps {
            break;
        }
        out.push(v);
        i += 1;
    }
    out
}

/// Label text for a tick value, rounded half away from zero.
pub fn format_label(value: f64, decimals: usize) -> String {
    // `{:.*}` alone rounds ties to even, which collapses 1.5 and 2.5 onto "2"
    let scale = 10f64.powi(decimals as i32);
    let text = format!("{:.*}", decimals, (value * scale).round() / scale);
    // "-0" and "-0.0" read as noise next to the origin
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Pixel column of an x tick value.
pub fn x_tick_position(geometry: &Geometry, value: f64) -> f64 {
    geometry.center.0 + (value - geometry.x.center()) * geometry.scale.x
}

/// Pixel row of a y tick value.
pub fn y_tick_position(geometry: &Geometry, value: f64) -> f64 {
    geometry.center.1 - (value - geometry.y.center()) * geometry.scale.y
}

/// Paint axes, ticks and labels. Does not clear the surface.
pub fn paint<S: Surface>(surface: &mut S, geometry: &Geometry, style: &GridStyle) {
    draw_axes(surface, geometry, style);
    for value in ticks(&geometry.x) {
        draw_x_tick(surface, geometry, style, value);
    }
    for value in ticks(&geometry.y) {
        draw_y_tick(surface, geometry, style, value);
    }
}

pub fn draw_axes<S: Surface>(surface: &mut S, geometry: &Geometry, style: &GridStyle) {
    let rect = geometry.rect;
    let (cx, cy) = geometry.center;
    surface.begin_path();
    surface.move_to(rect.left, cy);
    surface.line_to(rect.right, cy);
    surface.move_to(cx, rect.top);
    surface.line_to(cx, rect.bottom);
    surface.stroke(&style.axis);
}

/// Tick on the horizontal axis; its label hangs below, rotated clockwise.
pub fn draw_x_tick<S: Surface>(surface: &mut S, geometry: &Geometry, style: &GridStyle, value: f64) {
    let px = x_tick_position(geometry, value);
    let cy = geometry.center.1;
    let half = style.dash_size / 2.0;

    surface.begin_path();
    surface.move_to(px, cy - half);
    surface.line_to(px, cy + half);
    surface.stroke(&style.axis);

    let text = format_label(value, style.label_precision.decimals());
    let m = surface.measure_text(&text, &style.font);
    let (sin, cos) = style.label_angle.to_radians().sin_cos();
    let x = px + m.width / 2.0 * cos - m.height / 2.0 * sin;
    let y = cy + half + style.label_margin + m.width / 2.0 * sin + m.height / 2.0 * cos;
    draw_label(surface, style, &text, x, y, m.width, m.height);
}

/// Tick on the vertical axis; its label sits to the left, rotated clockwise.
pub fn draw_y_tick<S: Surface>(surface: &mut S, geometry: &Geometry, style: &GridStyle, value: f64) {
    let py = y_tick_position(geometry, value);
    let cx = geometry.center.0;
    let half = style.dash_size / 2.0;

    surface.begin_path();
    surface.move_to(cx - half, py);
    surface.line_to(cx + half, py);
    surface.stroke(&style.axis);

    let text = format_label(value, style.label_precision.decimals());
    let m = surface.measure_text(&text, &style.font);
    let (sin, cos) = style.label_angle.to_radians().sin_cos();
    let x = cx - half - style.label_margin - m.width / 2.0 * cos - m.height / 2.0 * sin;
    let y = py - m.width / 2.0 * sin + m.height / 2.0 * cos;
    draw_label(surface, style, &text, x, y, m.width, m.height);
}

/// Draw `text` centered on `(x, y)`, rotated by the label angle.
fn draw_label<S: Surface>(
    surface: &mut S,
    style: &GridStyle,
    text: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) {
    surface.save();
    surface.translate(x, y);
    surface.rotate(style.label_angle.to_radians());
    surface.fill_text(text, -width / 2.0, height / 2.0, &style.font, style.label_color);
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::config::LabelPrecision;
    use crate::surface::{DisplayList, DrawOp};

    fn geometry() -> Geometry {
        Geometry::compute(
            800,
            600,
            40,
            Extremum::new(-20.0, 20.0),
            Extremum::new(-100.0, 100.0),
        )
        .unwrap()
    }

    #[test]
    fn symmetric_axis_has_21_ticks_two_apart() {
        let t = ticks(&Extremum::new(-20.0, 20.0));
        assert_eq!(t.len(), 21);
        let expected: Vec<f64> = (0..=10)
            .map(|i| 2.0 * i as f64)
            .chain((1..=10).map(|i| -2.0 * i as f64))
            .collect();
        assert_eq!(t, expected);
    }

    #[test]
    fn offset_axis_has_ten_ticks_each_side_of_center() {
        let t = ticks(&Extremum::new(10.0, 110.0));
        assert_eq!(t[0], 60.0);
        let above = t.iter().filter(|v| **v > 60.0).count();
        let below = t.iter().filter(|v| **v < 60.0).count();
        assert_eq!((above, below), (10, 10));
        assert!((t[10] - 110.0).abs() < 1e-9);
        assert!((t[20] - 10.0).abs() < 1e-9);

        let t = ticks(&Extremum::new(-100.0, 100.0));
        assert_eq!(t.len(), 21);
        assert_eq!(t[10], 100.0);
        assert_eq!(t[20], -100.0);
    }

    #[test]
    fn inexact_steps_still_reach_the_extremes() {
        let t = ticks(&Extremum::new(-0.7, 0.7));
        assert_eq!(t.len(), 21);
    }

    #[test]
    fn degenerate_axis_yields_center_only() {
        assert_eq!(ticks(&Extremum::new(5.0, 5.0)), vec![5.0]);
        assert_eq!(ticks(&Extremum::new(5.0, 1.0)), vec![3.0]);
    }

    #[test]
    fn labels_round_to_precision() {
        assert_eq!(format_label(2.0, 0), "2");
        assert_eq!(format_label(-17.5, 1), "-17.5");
        assert_eq!(format_label(-0.04, 1), "0.0");
        assert_eq!(format_label(-0.2, 0), "0");
        assert_eq!(format_label(3.26, LabelPrecision::OneDecimal.decimals()), "3.3");
    }

    #[test]
    fn label_ties_round_away_from_zero() {
        assert_eq!(format_label(2.5, 0), "3");
        assert_eq!(format_label(-2.5, 0), "-3");
        assert_eq!(format_label(0.25, 1), "0.3");

        // 2.5 no longer collapses onto the label of 2
        let labels: Vec<_> = [1.5, 2.0, 2.5].iter().map(|v| format_label(*v, 0)).collect();
        assert_eq!(labels, ["2", "2", "3"]);
    }

    #[test]
    fn tick_positions_span_the_rectangle() {
        let g = geometry();
        assert_eq!(x_tick_position(&g, -20.0), g.rect.left);
        assert_eq!(x_tick_position(&g, 20.0), g.rect.right);
        assert_eq!(y_tick_position(&g, 100.0), g.rect.top);
        assert_eq!(y_tick_position(&g, -100.0), g.rect.bottom);
    }

    #[test]
    fn paint_draws_axes_ticks_and_labels() {
        let g = geometry();
        let mut dl = DisplayList::new(800, 600);
        paint(&mut dl, &g, &GridStyle::default());
        // two axis lines plus one segment per tick
        assert_eq!(dl.segments().count(), 2 + 21 + 21);
        assert_eq!(dl.texts().count(), 42);
        assert!(dl.texts().any(|t| t == "-100"));
        // transform is restored after every label
        assert_eq!(dl.transform(), crate::surface::Affine::IDENTITY);
    }

    #[test]
    fn labels_sit_below_x_axis_and_left_of_y_axis() {
        let g = geometry();
        let style = GridStyle::default();

        let mut dl = DisplayList::new(800, 600);
        draw_x_tick(&mut dl, &g, &style, 10.0);
        let DrawOp::Text { center, angle, .. } = &dl.ops()[1] else {
            panic!("expected label");
        };
        assert!(center.1 > g.center.1 + style.dash_size / 2.0);
        assert!(center.0 > x_tick_position(&g, 10.0));
        assert!((angle - 45f64.to_radians()).abs() < 1e-9);

        let mut dl = DisplayList::new(800, 600);
        draw_y_tick(&mut dl, &g, &style, 50.0);
        let DrawOp::Text { center, .. } = &dl.ops()[1] else {
            panic!("expected label");
        };
        assert!(center.0 < g.center.0 - style.dash_size / 2.0);
        assert!(center.1 < y_tick_position(&g, 50.0));
    }

    #[test]
    fn label_near_corner_keeps_margin_regardless_of_length() {
        let g = geometry();
        let style = GridStyle {
            label_precision: LabelPrecision::OneDecimal,
            ..GridStyle::default()
        };
        let (sin, cos) = style.label_angle.to_radians().sin_cos();
        for value in [2.0, -18.0] {
            let mut dl = DisplayList::new(800, 600);
            draw_x_tick(&mut dl, &g, &style, value);
            let DrawOp::Text { text, center, .. } = &dl.ops()[1] else {
                panic!("expected label");
            };
            let m = dl.measure_text(text, &style.font);
            // top-left corner of the rotated box
            let corner_x = center.0 - m.width / 2.0 * cos + m.height / 2.0 * sin;
            let corner_y = center.1 - m.width / 2.0 * sin - m.height / 2.0 * cos;
            let expected = g.center.1 + style.dash_size / 2.0 + style.label_margin;
            assert!((corner_x - x_tick_position(&g, value)).abs() < 1e-9);
            assert!((corner_y - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn y_label_near_corner_meets_tick_row() {
        let g = geometry();
        let style = GridStyle {
            label_precision: LabelPrecision::OneDecimal,
            ..GridStyle::default()
        };
        let (sin, cos) = style.label_angle.to_radians().sin_cos();
        for value in [10.0, -90.0, 0.0] {
            let mut dl = DisplayList::new(800, 600);
            draw_y_tick(&mut dl, &g, &style, value);
            let DrawOp::Text { text, center, .. } = &dl.ops()[1] else {
                panic!("expected label");
            };
            let m = dl.measure_text(text, &style.font);
            // right-most corner of the rotated box
            let corner_x = center.0 + m.width / 2.0 * cos + m.height / 2.0 * sin;
            let corner_y = center.1 + m.width / 2.0 * sin - m.height / 2.0 * cos;
            let expected_x = g.center.0 - style.dash_size / 2.0 - style.label_margin;
            assert!((corner_x - expected_x).abs() < 1e-9, "{}: x {}", value, corner_x);
            assert!(
                (corner_y - y_tick_position(&g, value)).abs() < 1e-9,
                "{}: y {}",
                value,
                corner_y
            );
        }
    }
}

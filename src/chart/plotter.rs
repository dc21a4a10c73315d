//! src/chart/plotter.rs
//!
//! Function sampling and polyline plotting onto the foreground layer.

use std::rc::Rc;

use super::geometry::Geometry;
use crate::surface::{Stroke, Surface};

/// A real function of one real argument, shared between transitions.
pub type PlotFn = Rc<dyn Fn(f64) -> f64>;

/// The constant-zero function.
pub fn zero() -> PlotFn {
    Rc::new(|_| 0.0)
}

/// Map an undefined (NaN) value to zero; everything else passes through.
pub fn normalize(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// Evaluate `f` at every pixel column of the drawing rectangle, left to
/// right inclusive, returning pixel-space points.
pub fn sample(geometry: &Geometry, f: &dyn Fn(f64) -> f64) -> Vec<(f64, f64)> {
    let first = geometry.rect.left.ceil() as i64;
    let last = geometry.rect.right.floor() as i64;
    (first..=last)
        .map(|col| {
            let px = col as f64;
            let value = normalize(f(geometry.data_x(px)));
            (px, geometry.pixel_y(value))
        })
        .collect()
}

/// Clear `surface` and stroke `f` as a single polyline.
pub fn plot<S: Surface>(
    surface: &mut S,
    geometry: &Geometry,
    f: &dyn Fn(f64) -> f64,
    stroke: &Stroke,
) {
    surface.clear();
    let mut points = sample(geometry, f).into_iter();
    let Some((x0, y0)) = points.next() else {
        return;
    };
    surface.begin_path();
    surface.move_to(x0, y0);
    for (x, y) in points {
        surface.line_to(x, y);
    }
    surface.stroke(stroke);
}

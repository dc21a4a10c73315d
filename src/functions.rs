//! src/functions.rs
//!
//! Built-in functions offered to the user for plotting.
//!
//! Trigonometric entries take their argument in degrees so a period fits the
//! default x range.

use std::rc::Rc;

use crate::chart::{ChartError, PlotFn};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

fn square(x: f64) -> f64 {
    x.powi(2)
}

fn cube(x: f64) -> f64 {
    x.powi(3)
}

fn sin_deg(x: f64) -> f64 {
    deg_to_rad(x).sin()
}

fn cos_deg(x: f64) -> f64 {
    deg_to_rad(x).cos()
}

/// Name and implementation of every built-in, in selector order.
pub const CATALOG: [(&str, fn(f64) -> f64); 5] = [
    ("square", square),
    ("cube", cube),
    ("sqrt", f64::sqrt),
    ("sin", sin_deg),
    ("cos", cos_deg),
];

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

/// Resolve a built-in by name.
///
/// # Errors
/// `ChartError::InvalidAssignment` when `name` is not in the catalog.
pub fn lookup(name: &str) -> Result<PlotFn, ChartError> {
    CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| {
            let f = *f;
            Rc::new(f) as PlotFn
        })
        .ok_or_else(|| ChartError::InvalidAssignment {
            name: name.to_string(),
        })
}

//! src/surface.rs
//!
//! Drawing surface contract shared by the grid and chart layers.
//!
//! A surface is a 2D pixel-addressed canvas (origin top-left, y grows
//! downward) with path stroking, filled text, a scoped affine transform and
//! text measurement. The chart core only ever talks to this trait.

pub mod display_list;

pub use display_list::{Affine, DisplayList, DrawOp};

use ratatui::style::Color;

/// Stroke parameters for `Surface::stroke`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Font used for filled text and text measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Nominal size in pixels.
    pub size: f64,
    pub family: String,
}

impl Font {
    pub fn new(size: f64, family: &str) -> Self {
        Self {
            size,
            family: family.to_string(),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0, "monospace")
    }
}

/// Rendered extent of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// 2D drawing primitives required by the chart.
pub trait Surface {
    /// (width, height) in pixels.
    fn size(&self) -> (u32, u32);

    /// Resize the surface. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase all pixel contents.
    fn clear(&mut self);

    /// Start a new, empty path.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the current path.
    fn stroke(&mut self, stroke: &Stroke);

    /// Draw `text` with its baseline-left corner at `(x, y)` in the current
    /// transform.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font, color: Color);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching `save`.
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate by `radians`; positive angles turn clockwise on screen.
    fn rotate(&mut self, radians: f64);

    fn measure_text(&self, text: &str, font: &Font) -> TextMetrics;
}

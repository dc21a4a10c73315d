//! src/chart/config.rs
//!
//! Configuration values for chart layout, labels and transitions.

use std::fmt;
use std::time::Duration;

use ratatui::style::Color;

use crate::surface::{Font, Stroke};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Inclusive data-space range of one axis. Valid when `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    pub min: f64,
    pub max: f64,
}

impl Extremum {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range; the value drawn at the axis center.
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Decimal places used for tick labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPrecision {
    #[default]
    Whole,
    OneDecimal,
}

impl LabelPrecision {
    pub fn decimals(&self) -> usize {
        match self {
            LabelPrecision::Whole => 0,
            LabelPrecision::OneDecimal => 1,
        }
    }
}

/// What the very first assignment does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstPlot {
    /// Transition in from the constant-zero function.
    #[default]
    AnimateFromZero,
    /// Paint the function immediately, no transition or notifications.
    PaintDirectly,
}

/// How overlapping transitions share the foreground layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupersedePolicy {
    /// Every run draws every frame until it completes; last writer wins.
    #[default]
    RunToCompletion,
    /// Only the most recently started run draws; older runs still complete.
    LatestWins,
}

/// Tick, label and axis styling for the grid layer.
#[derive(Clone, Debug)]
pub struct GridStyle {
    /// Length of each tick mark, centered on its axis.
    pub dash_size: f64,
    /// Gap between a tick and the near corner of its label.
    pub label_margin: f64,
    /// Clockwise label rotation in degrees.
    pub label_angle: f64,
    pub label_precision: LabelPrecision,
    pub font: Font,
    pub label_color: Color,
    pub axis: Stroke,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            dash_size: 8.0,
            label_margin: 4.0,
            label_angle: 45.0,
            label_precision: LabelPrecision::Whole,
            font: Font::default(),
            label_color: Color::Gray,
            axis: Stroke::new(1.0, Color::DarkGray),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Inset of the drawing rectangle from every surface edge.
    pub padding: u32,
    pub x: Extremum,
    pub y: Extremum,
    pub grid: GridStyle,
    /// Stroke of the plotted polyline.
    pub plot: Stroke,
    /// Length of one transition.
    pub duration: Duration,
    pub first_plot: FirstPlot,
    pub supersede: SupersedePolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 40,
            x: Extremum::new(-20.0, 20.0),
            y: Extremum::new(-100.0, 100.0),
            grid: GridStyle::default(),
            plot: Stroke::new(2.0, Color::Cyan),
            duration: Duration::from_millis(1_000),
            first_plot: FirstPlot::default(),
            supersede: SupersedePolicy::default(),
        }
    }
}

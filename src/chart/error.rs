//! src/chart/error.rs
//!
//! Error type for chart construction and assignment.

use super::config::Axis;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("cannot plot {name:?}: not a known function")]
    InvalidAssignment { name: String },
    #[error("unknown easing {name:?}")]
    UnknownEasing { name: String },
    #[error("degenerate {axis} extremum [{min}, {max}]")]
    DegenerateExtremum { axis: Axis, min: f64, max: f64 },
    #[error("surface {width}x{height} is too small for padding {padding}")]
    SurfaceTooSmall { width: u32, height: u32, padding: u32 },
    #[error("layer sizes differ: grid {grid:?}, chart {chart:?}")]
    LayerSizeMismatch { grid: (u32, u32), chart: (u32, u32) },
}

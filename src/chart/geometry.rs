//! src/chart/geometry.rs
//!
//! Pixel-space layout derived from surface size, padding and axis extrema.

use super::config::{Axis, Extremum};
use super::error::ChartError;

/// Pixel edges of the plotting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingRect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl DrawingRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Pixels per data unit along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub x: Extremum,
    pub y: Extremum,
    pub rect: DrawingRect,
    pub scale: Scale,
    /// Midpoint of `rect`.
    pub center: (f64, f64),
}

impl Geometry {
    /// Compute the layout for a `width` x `height` surface.
    ///
    /// # Errors
    /// `DegenerateExtremum` when an axis has `min >= max` (or a non-finite
    /// bound), `SurfaceTooSmall` when `2 * padding >= min(width, height)`.
    pub fn compute(
        width: u32,
        height: u32,
        padding: u32,
        x: Extremum,
        y: Extremum,
    ) -> Result<Self, ChartError> {
        for (axis, ext) in [(Axis::X, x), (Axis::Y, y)] {
            if !ext.is_valid() {
                return Err(ChartError::DegenerateExtremum {
                    axis,
                    min: ext.min,
                    max: ext.max,
                });
            }
        }
        if u64::from(padding) * 2 >= u64::from(width.min(height)) {
            return Err(ChartError::SurfaceTooSmall {
                width,
                height,
                padding,
            });
        }

        let pad = f64::from(padding);
        let rect = DrawingRect {
            top: pad,
            right: f64::from(width) - pad,
            bottom: f64::from(height) - pad,
            left: pad,
        };
        let scale = Scale {
            x: rect.width() / x.span(),
            y: rect.height() / y.span(),
        };
        let center = (
            (rect.left + rect.right) / 2.0,
            (rect.top + rect.bottom) / 2.0,
        );

        Ok(Self {
            x,
            y,
            rect,
            scale,
            center,
        })
    }

    /// Data-space x for a pixel column.
    pub fn data_x(&self, px: f64) -> f64 {
        self.x.min + (px - self.rect.left) / self.scale.x
    }

    /// Pixel row for a data-space y value.
    pub fn pixel_y(&self, value: f64) -> f64 {
        self.center.1 - self.scale.y * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_layout_800x600() {
        let g = Geometry::compute(
            800,
            600,
            40,
            Extremum::new(-20.0, 20.0),
            Extremum::new(-100.0, 100.0),
        )
        .unwrap();
        assert_eq!(
            g.rect,
            DrawingRect {
                top: 40.0,
                right: 760.0,
                bottom: 560.0,
                left: 40.0
            }
        );
        assert_eq!(g.scale, Scale { x: 18.0, y: 2.6 });
        assert_eq!(g.center, (400.0, 300.0));
        assert_eq!(g.data_x(40.0), -20.0);
        assert_eq!(g.data_x(400.0), 0.0);
        assert_eq!(g.pixel_y(0.0), 300.0);
    }

    #[test]
    fn scale_is_positive_and_finite_for_valid_inputs() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let width = rng.random_range(2..4_000u32);
            let height = rng.random_range(2..4_000u32);
            let padding = rng.random_range(0..width.min(height).div_ceil(2));
            let xmin = rng.random_range(-1e6..1e6);
            let ymin = rng.random_range(-1e6..1e6);
            let x = Extremum::new(xmin, xmin + rng.random_range(1e-3..1e6));
            let y = Extremum::new(ymin, ymin + rng.random_range(1e-3..1e6));

            let g = Geometry::compute(width, height, padding, x, y).unwrap();
            assert!(g.scale.x > 0.0 && g.scale.x.is_finite());
            assert!(g.scale.y > 0.0 && g.scale.y.is_finite());
            assert!(g.rect.right > g.rect.left && g.rect.bottom > g.rect.top);
        }
    }

    #[test]
    fn zero_span_is_rejected() {
        let err = Geometry::compute(
            800,
            600,
            40,
            Extremum::new(1.0, 1.0),
            Extremum::new(-1.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::DegenerateExtremum { axis: Axis::X, .. }));
    }

    #[test]
    fn padding_must_fit() {
        let ext = Extremum::new(-1.0, 1.0);
        assert!(matches!(
            Geometry::compute(100, 80, 40, ext, ext),
            Err(ChartError::SurfaceTooSmall { .. })
        ));
        assert!(Geometry::compute(100, 82, 40, ext, ext).is_ok());
    }
}

//! src/surface/display_list.rs
//!
//! In-memory `Surface` that records device-space draw operations.
//!
//! Paths are flattened to line segments on `stroke`, with the transform that
//! was current when each point was added. Text keeps its rotation angle and
//! the device position of its visual center so a backend without rotated
//! glyphs (the terminal canvas) can still place it.

use ratatui::style::Color;

use super::{Font, Stroke, Surface, TextMetrics};

/// Glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.6;
/// Glyph box height as a fraction of the font size.
const GLYPH_HEIGHT: f64 = 0.7;

/// 2D affine transform `[a c e; b d f; 0 0 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Map a point through the transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// `self * translate(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..*self
        }
    }

    /// `self * rotate(radians)`
    pub fn rotated(&self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..*self
        }
    }

    /// Rotation angle encoded by the linear part.
    pub fn angle(&self) -> f64 {
        self.b.atan2(self.a)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A recorded, device-space draw operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    Text {
        text: String,
        /// Device position of the text box center.
        center: (f64, f64),
        /// Clockwise rotation in radians.
        angle: f64,
        font: Font,
        color: Color,
    },
}

#[derive(Debug)]
pub struct DisplayList {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    /// Subpaths of device-space points.
    path: Vec<Vec<(f64, f64)>>,
    transform: Affine,
    saved: Vec<Affine>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            path: Vec::new(),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// All recorded operations in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Line segments only, as `(from, to)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            DrawOp::Text { .. } => None,
        })
    }

    /// Text labels only.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Line { .. } => None,
        })
    }
}

impl Surface for DisplayList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.path.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.transform.apply(x, y);
        self.path.push(vec![p]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.transform.apply(x, y);
        match self.path.last_mut() {
            Some(subpath) => subpath.push(p),
            // a line_to without a current point acts as move_to
            None => self.path.push(vec![p]),
        }
    }

    fn stroke(&mut self, stroke: &Stroke) {
        for subpath in &self.path {
            for pair in subpath.windows(2) {
                self.ops.push(DrawOp::Line {
                    from: pair[0],
                    to: pair[1],
                    stroke: *stroke,
                });
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font, color: Color) {
        let metrics = self.measure_text(text, font);
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            center: self
                .transform
                .apply(x + metrics.width / 2.0, y - metrics.height / 2.0),
            angle: self.transform.angle(),
            font: font.clone(),
            color,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translated(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform.rotated(radians);
    }

    fn measure_text(&self, text: &str, font: &Font) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * font.size * GLYPH_ADVANCE,
            height: font.size * GLYPH_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn stroke_flattens_subpaths() {
        let mut dl = DisplayList::new(100, 100);
        dl.begin_path();
        dl.move_to(0.0, 0.0);
        dl.line_to(10.0, 0.0);
        dl.line_to(10.0, 10.0);
        dl.move_to(50.0, 50.0);
        dl.line_to(60.0, 50.0);
        dl.stroke(&Stroke::new(1.0, Color::White));
        assert_eq!(dl.segments().count(), 3);
    }

    #[test]
    fn translate_then_rotate_maps_points() {
        let mut dl = DisplayList::new(100, 100);
        dl.translate(10.0, 20.0);
        dl.rotate(FRAC_PI_2);
        // clockwise quarter turn: +x goes to +y on screen
        assert!(close(dl.transform().apply(1.0, 0.0), (10.0, 21.0)));
        assert!((dl.transform().angle() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn restore_pops_saved_transform() {
        let mut dl = DisplayList::new(100, 100);
        dl.save();
        dl.translate(5.0, 5.0);
        dl.rotate(1.0);
        dl.restore();
        assert_eq!(dl.transform(), Affine::IDENTITY);
        // unbalanced restore is ignored
        dl.restore();
        assert_eq!(dl.transform(), Affine::IDENTITY);
    }

    #[test]
    fn text_records_center_and_angle() {
        let mut dl = DisplayList::new(100, 100);
        let font = Font::new(10.0, "monospace");
        let m = dl.measure_text("12", &font);
        assert!((m.width - 12.0).abs() < 1e-9);
        assert!((m.height - 7.0).abs() < 1e-9);

        dl.translate(40.0, 40.0);
        dl.fill_text("12", -m.width / 2.0, m.height / 2.0, &font, Color::Gray);
        match &dl.ops()[0] {
            DrawOp::Text { center, angle, .. } => {
                assert!(close(*center, (40.0, 40.0)));
                assert_eq!(*angle, 0.0);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn clear_and_resize_drop_ops() {
        let mut dl = DisplayList::new(10, 10);
        dl.fill_text("a", 0.0, 0.0, &Font::default(), Color::White);
        dl.clear();
        assert!(dl.ops().is_empty());
        dl.fill_text("a", 0.0, 0.0, &Font::default(), Color::White);
        dl.resize(20, 30);
        assert!(dl.ops().is_empty());
        assert_eq!(dl.size(), (20, 30));
    }
}

//! src/panels/chart.rs
//!
//! Chart panel: paints the grid layer, then the chart layer, onto a braille
//! canvas.
//!
//! Layers are in surface pixels (y down); the canvas is y up, so every y is
//! flipped against the layer height. Terminal cells cannot rotate glyphs,
//! so labels are printed unrotated around their rotated center.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Line},
    },
};

use crate::session::SharedSession;
use crate::surface::{DisplayList, DrawOp, Surface};

pub struct ChartPanel {
    pub session: SharedSession,
}

impl ChartPanel {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

/// Clip a segment to `[0, w] x [0, h]` (Liang-Barsky).
///
/// Returns `None` when the segment lies outside or has a non-finite end.
pub fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    w: f64,
    h: f64,
) -> Option<((f64, f64), (f64, f64))> {
    if ![from.0, from.1, to.0, to.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, from.0),
        (dx, w - from.0),
        (-dy, from.1),
        (dy, h - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

fn paint_layer(ctx: &mut Context<'_>, layer: &DisplayList) {
    let (w, h) = layer.size();
    let (w, h) = (f64::from(w), f64::from(h));
    for op in layer.ops() {
        match op {
            DrawOp::Line { from, to, stroke } => {
                if let Some((a, b)) = clip_segment(*from, *to, w, h) {
                    ctx.draw(&Line::new(a.0, h - a.1, b.0, h - b.1, stroke.color));
                }
            }
            DrawOp::Text {
                text,
                center,
                font,
                color,
                ..
            } => {
                let m = layer.measure_text(text, font);
                ctx.print(
                    center.0 - m.width / 2.0,
                    h - center.1,
                    TextLine::styled(text.clone(), Style::default().fg(*color)),
                );
            }
        }
    }
}

impl crate::ui::Panel for ChartPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let s = self.session.borrow();
        let (w, h) = s.chart.grid_layer().size();
        let grid = s.chart.grid_layer();
        let chart = s.chart.chart_layer();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title(format!("f = {}  ({})", s.function_name(), s.easing))
                    .borders(Borders::ALL),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(w)])
            .y_bounds([0.0, f64::from(h)])
            .paint(|ctx| {
                paint_layer(ctx, grid);
                ctx.layer();
                paint_layer(ctx, chart);
            });
        f.render_widget(canvas, area);
    }
}

//! src/panels/info.rs
//!
//! Info panel: current function, easing, transition state and whether the
//! selectors are accepting input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::chart::TransitionState;
use crate::session::{SharedControls, SharedSession};

/// Read-only; the border turns yellow while the controls are locked.
pub struct InfoPanel {
    pub session: SharedSession,
    pub controls: SharedControls,
}

impl InfoPanel {
    pub fn new(session: SharedSession, controls: SharedControls) -> Self {
        Self { session, controls }
    }
}

impl crate::ui::Panel for InfoPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let s = self.session.borrow();
        let enabled = self.controls.borrow().enabled();

        let state = match s.chart.state() {
            TransitionState::Idle => "idle".to_string(),
            TransitionState::Transitioning { runs } => format!("transitioning ({} running)", runs),
        };
        let g = s.chart.geometry();

        let lines = vec![
            Line::from(vec![
                Span::styled(s.function_name(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  easing={}", s.easing)),
            ]),
            Line::from(format!(
                "state={}  controls={}",
                state,
                if enabled { "on" } else { "locked" }
            )),
            Line::from(format!(
                "x=[{}, {}]  y=[{}, {}]  scale=({:.2}, {:.2})",
                g.x.min, g.x.max, g.y.min, g.y.max, g.scale.x, g.scale.y
            )),
        ];

        let mut block = Block::default().title("Info").borders(Borders::ALL);
        if !enabled {
            block = block.style(Style::default().fg(Color::Yellow));
        }
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

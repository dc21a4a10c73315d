//! src/panels/history.rs
//!
//! History panel: the most recent transition notifications, newest last.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::session::{LifecycleEvent, SharedControls};

pub struct HistoryPanel {
    pub controls: SharedControls,
}

impl HistoryPanel {
    pub fn new(controls: SharedControls) -> Self {
        Self { controls }
    }
}

impl crate::ui::Panel for HistoryPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let c = self.controls.borrow();
        // two rows are taken by the border
        let height = usize::from(area.height.saturating_sub(2));
        let start = c.events.len().saturating_sub(height);
        let last_index = c.events.len().saturating_sub(1);

        let lines: Vec<Line> = c
            .events
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, (at, event))| {
                let (label, run, color) = match event {
                    LifecycleEvent::Started(run) => ("start", run.0, Color::Green),
                    LifecycleEvent::Ended(run) => ("end  ", run.0, Color::Cyan),
                };
                let mut style = Style::default().fg(color);
                if i == last_index {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(format!("{:>8.3}s ", at.as_secs_f64()), Style::default().fg(Color::Yellow)),
                    Span::styled(label, style),
                    Span::raw(format!(" #{}", run)),
                ])
            })
            .collect();

        let block = Block::default().title("Transitions").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

//! src/panels/paragraph.rs
//!
//! Static text panel used for the header and the key help.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
    pub alignment: Alignment,
    pub bold: bool,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: title.to_string(),
            alignment: Alignment::Left,
            bold: false,
        }
    }

    /// Centered, bold variant for headings.
    pub fn heading(text: &str) -> Self {
        Self {
            alignment: Alignment::Center,
            bold: true,
            ..Self::new(text, "")
        }
    }
}

impl crate::ui::Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut style = Style::default();
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        let p = Paragraph::new(self.text.as_str())
            .style(style)
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(self.title.as_str()).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

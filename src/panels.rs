//! src/panels.rs
//!
//! Panels composing the terminal front end.

pub mod chart;
pub mod history;
pub mod info;
pub mod paragraph;

pub use chart::ChartPanel;
pub use history::HistoryPanel;
pub use info::InfoPanel;
pub use paragraph::ParagraphPanel;

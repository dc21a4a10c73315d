//! src/ui/node.rs
//!
//! Recursive layout tree of panels, rebuilt and drawn once per frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Anything that can draw itself into a frame area.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

pub enum Node {
    /// Children laid out along `direction`, one constraint each.
    Split {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Leaf(Box<dyn Panel>),
}

impl Node {
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split {
                direction,
                constraints,
                children,
            } => {
                let areas = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.iter().copied())
                    .split(area);
                for (child, child_area) in children.iter().zip(areas.iter()) {
                    child.draw(f, *child_area);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

/// Stack children top to bottom.
pub fn rows(constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Split {
        direction: Direction::Vertical,
        constraints,
        children,
    }
}

/// Place children left to right.
pub fn cols(constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Split {
        direction: Direction::Horizontal,
        constraints,
        children,
    }
}

pub fn leaf(panel: impl Panel + 'static) -> Node {
    Node::Leaf(Box::new(panel))
}

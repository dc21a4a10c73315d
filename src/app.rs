//! src/app.rs
//!
//! Terminal front end for the animated function chart.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the chart session, wires its transition notifications into the
//! control state, and runs the frame loop that ticks transitions and redraws
//! the layout.
//!
//! ## Overview
//! The application:
//! - Renders one function over a fixed grid (x in `[-20, 20]`, y in
//!   `[-100, 100]`) on an 800x600 pixel chart scaled into the terminal.
//! - Animates every change of function with the selected easing curve.
//! - Locks the selectors while a transition runs.
//!
//! # Building and Running
//!
//! ```text
//! cargo run --release
//! ```
//!
//! ### Environment Notes
//! - Terminal UI uses the `ratatui` and `crossterm` crates.
//! - Set `EASEPLOT_LOG=/path/to/file` to write `tracing` output (debug level)
//!   to a file; the terminal itself is owned by the UI.
//!
//! # Keyboard Controls (Interactive)
//!
//! - **Tab** / **f**: Plot the next built-in function.
//! - **r**: Plot a random built-in function.
//! - **e**: Select the next easing curve for the following transitions.
//! - **q**: Quit and restore terminal state.
//!
//! Function and easing keys are ignored while a transition is running.
//!
//! # Frame Loop
//!
//! Each iteration ticks the chart with the current time, which delivers one
//! frame to every running transition, then draws the layout and drains
//! pending key events. Iterations are paced to `FRAME_TIME`.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;
use ratatui::DefaultTerminal;
use ratatui::layout::Constraint;

use crate::chart::ChartConfig;
use crate::functions::{self, CATALOG};
use crate::panels::{ChartPanel, HistoryPanel, InfoPanel, ParagraphPanel};
use crate::session::{Controls, Session, SharedControls, SharedSession};
use crate::ui::{Node, cols, leaf, rows};

/// Chart surface size in pixels.
pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

/// Pacing of the frame loop (about 60 refreshes per second).
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Retained transition notifications for the history panel.
const MAX_EVENTS: usize = 64;

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    NextFunction,
    RandomFunction,
    NextEasing,
    Quit,
}

impl Command {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Tab | KeyCode::Char('f') => Some(Command::NextFunction),
            KeyCode::Char('r') => Some(Command::RandomFunction),
            KeyCode::Char('e') => Some(Command::NextEasing),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Install a file-backed `tracing` subscriber when `EASEPLOT_LOG` is set.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("EASEPLOT_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    tracing::info!(path = %path, "logging started");
    Ok(())
}

/// Apply one command. Returns false when the app should exit.
///
/// Selection commands are dropped while the controls are locked.
pub fn apply(command: Command, session: &SharedSession, controls: &SharedControls) -> Result<bool> {
    let locked = !controls.borrow().enabled();
    match command {
        Command::Quit => return Ok(false),
        _ if locked => tracing::debug!(?command, "ignored while transitioning"),
        Command::NextFunction => session.borrow_mut().next_function()?,
        Command::RandomFunction => {
            let idx = rand::rng().random_range(0..CATALOG.len());
            session.borrow_mut().select_function(idx)?;
        }
        Command::NextEasing => {
            let mut s = session.borrow_mut();
            let next = s.easing.next();
            s.select_easing(next);
        }
    }
    Ok(true)
}

/// Key help, listing the built-ins in the order TAB cycles through them.
fn help_text() -> String {
    let names: Vec<_> = functions::names().collect();
    format!(
        "TAB/F=Next function ({})  R=Random  E=Next easing  Q=Quit",
        names.join(" > ")
    )
}

fn layout(session: &SharedSession, controls: &SharedControls) -> Node {
    rows(
        vec![
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ],
        vec![
            leaf(ParagraphPanel::heading("easeplot - animated function chart")),
            cols(
                vec![Constraint::Percentage(70), Constraint::Percentage(30)],
                vec![
                    leaf(ChartPanel::new(Rc::clone(session))),
                    rows(
                        vec![Constraint::Length(5), Constraint::Min(3)],
                        vec![
                            leaf(InfoPanel::new(Rc::clone(session), Rc::clone(controls))),
                            leaf(HistoryPanel::new(Rc::clone(controls))),
                        ],
                    ),
                ],
            ),
            leaf(ParagraphPanel::new(&help_text(), "Controls")),
        ],
    )
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    session: &SharedSession,
    controls: &SharedControls,
) -> Result<()> {
    let root = layout(session, controls);
    let mut running = true;

    while running {
        let frame_start = Instant::now();

        session.borrow_mut().chart.tick(frame_start);
        terminal.draw(|f| root.draw(f, f.area()))?;

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = Command::from_key(key.code) {
                    running = apply(command, session, controls)?;
                }
            }
            if !running {
                break;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
    Ok(())
}

pub fn run() -> Result<()> {
    init_logging()?;

    let controls: SharedControls = Rc::new(RefCell::new(Controls::new(MAX_EVENTS)));
    let session: SharedSession = Rc::new(RefCell::new(Session::new(
        CHART_WIDTH,
        CHART_HEIGHT,
        ChartConfig::default(),
        &controls,
    )?));
    session.borrow_mut().select_function(0)?;

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &session, &controls);
    ratatui::restore();
    result
}

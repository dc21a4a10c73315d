//! src/lib.rs
//!
//! Animated function plotter.
//!
//! The chart core (`chart`, `anim`, `surface`) renders one real function on a
//! grid and blends between successive functions with an easing curve. The
//! terminal front end (`app`, `ui`, `panels`) hosts it.

pub mod anim;
pub mod app;
pub mod chart;
pub mod functions;
pub mod panels;
pub mod session;
pub mod surface;
pub mod ui;

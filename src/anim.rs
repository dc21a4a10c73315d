//! src/anim.rs
//!
//! Time-driven animation primitives: named easing curves and the frame
//! scheduler that feeds eased progress values to per-frame callbacks.

pub mod easing;
pub mod scheduler;

pub use easing::{Easing, EasingFn, identity};
pub use scheduler::{FrameCallback, FrameScheduler, RunId};

//! src/chart/transition.rs
//!
//! Animated blending between the outgoing and incoming plotted function.
//!
//! Each transition is one frame-scheduler run whose callback owns its pair
//! of functions; starting another transition never touches runs already in
//! flight. Under `SupersedePolicy::LatestWins` older runs keep ticking to
//! completion but stop drawing.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::config::SupersedePolicy;
use super::geometry::Geometry;
use super::plotter::{self, PlotFn, normalize};
use crate::anim::{EasingFn, FrameScheduler, RunId};
use crate::surface::{Stroke, Surface};

/// `from + progress * (to - from)`, both sides NaN-normalized.
pub fn blend(from: &PlotFn, to: &PlotFn, progress: f64) -> impl Fn(f64) -> f64 + use<> {
    let from = Rc::clone(from);
    let to = Rc::clone(to);
    move |x| {
        let a = normalize(from(x));
        let b = normalize(to(x));
        a + progress * (b - a)
    }
}

/// Foreground layer plus what is needed to draw on it every frame.
pub struct Foreground<S> {
    pub surface: S,
    pub geometry: Geometry,
    pub stroke: Stroke,
}

impl<S: Surface> Foreground<S> {
    pub fn draw(&mut self, f: &dyn Fn(f64) -> f64) {
        plotter::plot(&mut self.surface, &self.geometry, f, &self.stroke);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    /// `runs` transitions are still in flight.
    Transitioning { runs: usize },
}

pub struct TransitionController<S> {
    scheduler: FrameScheduler<Foreground<S>>,
    policy: SupersedePolicy,
    /// Id of the most recently started run.
    latest: Rc<Cell<u64>>,
}

impl<S: Surface + 'static> TransitionController<S> {
    pub fn new(policy: SupersedePolicy) -> Self {
        Self {
            scheduler: FrameScheduler::new(),
            policy,
            latest: Rc::new(Cell::new(0)),
        }
    }

    /// Start blending `from` into `to` over `duration`.
    ///
    /// The foreground is redrawn at progress 0 immediately; later frames
    /// arrive through `tick`.
    pub fn begin(
        &mut self,
        from: PlotFn,
        to: PlotFn,
        easing: EasingFn,
        duration: Duration,
        fg: &mut Foreground<S>,
    ) -> RunId {
        fg.draw(&blend(&from, &to, 0.0));

        let latest = Rc::clone(&self.latest);
        let policy = self.policy;
        // the id is only known after scheduling; the callback reads it back
        let own = Rc::new(Cell::new(u64::MAX));
        let own_in_cb = Rc::clone(&own);
        let callback = Box::new(move |progress: f64, fg: &mut Foreground<S>| {
            if policy == SupersedePolicy::LatestWins && latest.get() != own_in_cb.get() {
                tracing::trace!(run = own_in_cb.get(), "superseded frame skipped");
                return;
            }
            fg.draw(&blend(&from, &to, progress));
        });

        let id = self.scheduler.schedule(duration, callback, Some(easing));
        own.set(id.0);
        self.latest.set(id.0);
        id
    }

    /// Deliver one display refresh; returns the transitions that finished.
    pub fn tick(&mut self, now: Instant, fg: &mut Foreground<S>) -> Vec<RunId> {
        self.scheduler.tick(now, fg)
    }

    pub fn state(&self) -> TransitionState {
        if self.scheduler.is_idle() {
            TransitionState::Idle
        } else {
            TransitionState::Transitioning {
                runs: self.scheduler.in_flight(),
            }
        }
    }
}

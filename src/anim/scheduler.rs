//! src/anim/scheduler.rs
//!
//! Frame scheduler: drives timed runs, one callback per display refresh.
//!
//! Each run owns its callback and easing. A run's clock starts on the first
//! frame it sees; raw progress is `elapsed / duration` capped at 1 and is
//! eased before being handed to the callback. The frame whose raw progress
//! reaches 1 is the last one, and the run is reported complete only after
//! that callback has returned. Runs are never cancelled.
//!
//! The callback context `C` is passed in on every `tick`, so callbacks can
//! mutate state the scheduler does not own (the chart's foreground layer).

use std::time::{Duration, Instant};

use super::easing::{EasingFn, identity};

/// Per-frame callback receiving eased progress.
pub type FrameCallback<C> = Box<dyn FnMut(f64, &mut C)>;

/// Identifies one scheduled run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

struct FrameRun<C> {
    id: RunId,
    duration: Duration,
    started: Option<Instant>,
    /// Largest elapsed time delivered so far.
    elapsed: Duration,
    callback: FrameCallback<C>,
    easing: EasingFn,
}

impl<C> FrameRun<C> {
    /// Deliver one frame. Returns true when this was the final frame.
    fn frame(&mut self, now: Instant, ctx: &mut C) -> bool {
        let started = *self.started.get_or_insert(now);
        // keep elapsed non-decreasing even if the caller's clock steps back
        self.elapsed = self.elapsed.max(now.saturating_duration_since(started));

        let raw = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        (self.callback)((self.easing)(raw), ctx);
        raw >= 1.0
    }
}

/// Collection of in-flight runs, ticked in issuance order.
pub struct FrameScheduler<C> {
    runs: Vec<FrameRun<C>>,
    next_id: u64,
}

impl<C> FrameScheduler<C> {
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule a run. `easing` defaults to identity.
    pub fn schedule(
        &mut self,
        duration: Duration,
        callback: FrameCallback<C>,
        easing: Option<EasingFn>,
    ) -> RunId {
        let id = RunId(self.next_id);
        self.next_id += 1;
        self.runs.push(FrameRun {
            id,
            duration,
            started: None,
            elapsed: Duration::ZERO,
            callback,
            easing: easing.unwrap_or_else(identity),
        });
        tracing::trace!(run = id.0, ?duration, "frame run scheduled");
        id
    }

    /// Deliver one display refresh at `now` to every in-flight run.
    ///
    /// Returns the runs that delivered their final frame during this tick,
    /// in issuance order; they are no longer in flight.
    pub fn tick(&mut self, now: Instant, ctx: &mut C) -> Vec<RunId> {
        let mut completed = Vec::new();
        self.runs.retain_mut(|run| {
            let done = run.frame(now, ctx);
            if done {
                completed.push(run.id);
            }
            !done
        });
        completed
    }

    /// Number of runs still in flight.
    pub fn in_flight(&self) -> usize {
        self.runs.len()
    }

    pub fn is_idle(&self) -> bool {
        self.runs.is_empty()
    }
}

impl<C> Default for FrameScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

//! src/session.rs
//!
//! Host-side state shared between the frame loop and the panels: the chart
//! with the user's current selections, and the control state driven by the
//! chart's transition notifications.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::anim::{Easing, RunId};
use crate::chart::{Chart, ChartConfig, ChartError};
use crate::functions::CATALOG;
use crate::surface::DisplayList;

/// A transition notification as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Started(RunId),
    Ended(RunId),
}

/// Selector state. Function and easing changes are refused while disabled.
#[derive(Debug)]
pub struct Controls {
    /// Transitions started and not yet ended.
    active: usize,
    /// Recent notifications, oldest at front, with time since `origin`.
    pub events: VecDeque<(Duration, LifecycleEvent)>,
    /// Maximum number of retained events (bounded memory).
    pub max_events: usize,
    origin: Instant,
}

impl Controls {
    pub fn new(max_events: usize) -> Self {
        Self {
            active: 0,
            events: VecDeque::with_capacity(max_events),
            max_events,
            origin: Instant::now(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.active == 0
    }

    pub fn transition_started(&mut self, run: RunId) {
        self.active += 1;
        self.push(LifecycleEvent::Started(run));
    }

    pub fn transition_ended(&mut self, run: RunId) {
        self.active = self.active.saturating_sub(1);
        self.push(LifecycleEvent::Ended(run));
    }

    fn push(&mut self, event: LifecycleEvent) {
        self.events.push_back((self.origin.elapsed(), event));
        while self.events.len() > self.max_events {
            self.events.pop_front();
        }
    }
}

/// Alias: Rc<RefCell<Controls>>
pub type SharedControls = Rc<RefCell<Controls>>;

/// The chart plus which catalog entry and easing the user picked.
pub struct Session {
    pub chart: Chart<DisplayList>,
    /// Index into `functions::CATALOG`; `None` before the first pick.
    pub function: Option<usize>,
    pub easing: Easing,
}

impl Session {
    /// Build the chart and route its notifications into `controls`.
    pub fn new(
        width: u32,
        height: u32,
        config: ChartConfig,
        controls: &SharedControls,
    ) -> Result<Self, ChartError> {
        let mut chart = Chart::new(width, height, config)?;
        let c = Rc::clone(controls);
        chart.on_transition_start(move |run| c.borrow_mut().transition_started(run));
        let c = Rc::clone(controls);
        chart.on_transition_end(move |run| c.borrow_mut().transition_ended(run));

        let easing = Easing::default();
        chart.set_easing(easing.to_fn());
        Ok(Self {
            chart,
            function: None,
            easing,
        })
    }

    /// Plot catalog entry `idx` (wrapping).
    pub fn select_function(&mut self, idx: usize) -> Result<(), ChartError> {
        let idx = idx % CATALOG.len();
        self.chart.set_function_by_name(CATALOG[idx].0)?;
        self.function = Some(idx);
        Ok(())
    }

    pub fn next_function(&mut self) -> Result<(), ChartError> {
        self.select_function(self.function.map_or(0, |i| i + 1))
    }

    pub fn function_name(&self) -> &'static str {
        self.function.map_or("-", |i| CATALOG[i].0)
    }

    pub fn select_easing(&mut self, easing: Easing) {
        self.chart.set_easing(easing.to_fn());
        self.easing = easing;
    }
}

/// Alias: Rc<RefCell<Session>>
pub type SharedSession = Rc<RefCell<Session>>;

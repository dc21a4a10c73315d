//! src/chart.rs
//!
//! The function chart: a static grid layer, a foreground layer redrawn on
//! every transition frame, and the assignment entry points the host uses.
//!
//! Assigning a function starts a transition from whatever function the chart
//! currently holds. The chart does not lock out overlapping assignments; the
//! host is expected to disable its controls between the start and end
//! notifications.

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod plotter;
pub mod transition;

use std::rc::Rc;
use std::time::Instant;

pub use config::{
    Axis, ChartConfig, Extremum, FirstPlot, GridStyle, LabelPrecision, SupersedePolicy,
};
pub use error::ChartError;
pub use geometry::{DrawingRect, Geometry, Scale};
pub use plotter::{PlotFn, normalize, zero};
pub use transition::{TransitionController, TransitionState, blend};

use crate::anim::{EasingFn, RunId, identity};
use crate::functions;
use crate::surface::{DisplayList, Surface};
use transition::Foreground;

/// Handler for transition lifecycle notifications.
pub type TransitionHandler = Box<dyn FnMut(RunId)>;

pub struct Chart<S> {
    config: ChartConfig,
    grid: S,
    foreground: Foreground<S>,
    function: Option<PlotFn>,
    easing: EasingFn,
    transitions: TransitionController<S>,
    on_start: Vec<TransitionHandler>,
    on_end: Vec<TransitionHandler>,
}

impl Chart<DisplayList> {
    /// A chart drawing into two in-memory display lists.
    pub fn new(width: u32, height: u32, config: ChartConfig) -> Result<Self, ChartError> {
        Self::from_layers(
            DisplayList::new(width, height),
            DisplayList::new(width, height),
            config,
        )
    }
}

impl<S: Surface + 'static> Chart<S> {
    /// Build a chart over a grid (background) and chart (foreground) layer
    /// of equal size, and paint the grid.
    ///
    /// # Errors
    /// `LayerSizeMismatch` for layers of different size, or any geometry
    /// error from `Geometry::compute`.
    pub fn from_layers(mut grid: S, chart: S, config: ChartConfig) -> Result<Self, ChartError> {
        if grid.size() != chart.size() {
            return Err(ChartError::LayerSizeMismatch {
                grid: grid.size(),
                chart: chart.size(),
            });
        }
        let (width, height) = grid.size();
        let geometry = Geometry::compute(width, height, config.padding, config.x, config.y)?;
        tracing::debug!(width, height, ?geometry, "chart geometry");

        grid.clear();
        grid::paint(&mut grid, &geometry, &config.grid);

        Ok(Self {
            foreground: Foreground {
                surface: chart,
                geometry,
                stroke: config.plot,
            },
            grid,
            function: None,
            easing: identity(),
            transitions: TransitionController::new(config.supersede),
            on_start: Vec::new(),
            on_end: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.foreground.geometry
    }

    /// Background layer.
    pub fn grid_layer(&self) -> &S {
        &self.grid
    }

    /// Foreground layer.
    pub fn chart_layer(&self) -> &S {
        &self.foreground.surface
    }

    /// The most recently assigned function.
    pub fn plotted_function(&self) -> Option<&PlotFn> {
        self.function.as_ref()
    }

    pub fn state(&self) -> TransitionState {
        self.transitions.state()
    }

    /// Replace the easing used by transitions started from now on.
    pub fn set_easing(&mut self, easing: EasingFn) {
        self.easing = easing;
    }

    pub fn on_transition_start(&mut self, handler: impl FnMut(RunId) + 'static) {
        self.on_start.push(Box::new(handler));
    }

    pub fn on_transition_end(&mut self, handler: impl FnMut(RunId) + 'static) {
        self.on_end.push(Box::new(handler));
    }

    /// Make `f` the plotted function and start a transition to it from the
    /// function currently held.
    ///
    /// Fires transition-start before returning. A transition already in
    /// flight keeps running with the pair it started with.
    pub fn set_plotted_function(&mut self, f: PlotFn) {
        let previous = self.function.replace(Rc::clone(&f));
        let from = match previous {
            Some(prev) => prev,
            None if self.config.first_plot == FirstPlot::PaintDirectly => {
                self.foreground.draw(&*f);
                tracing::debug!("first function painted directly");
                return;
            }
            None => zero(),
        };

        let id = self.transitions.begin(
            from,
            f,
            Rc::clone(&self.easing),
            self.config.duration,
            &mut self.foreground,
        );
        tracing::debug!(run = id.0, "transition started");
        for handler in &mut self.on_start {
            handler(id);
        }
    }

    /// Assign a built-in function by name.
    ///
    /// # Errors
    /// `ChartError::InvalidAssignment` for an unknown name; nothing is drawn.
    pub fn set_function_by_name(&mut self, name: &str) -> Result<(), ChartError> {
        let f = functions::lookup(name)?;
        self.set_plotted_function(f);
        Ok(())
    }

    /// Deliver one display refresh to every running transition and fire
    /// transition-end for those that finished.
    pub fn tick(&mut self, now: Instant) {
        for id in self.transitions.tick(now, &mut self.foreground) {
            tracing::debug!(run = id.0, "transition finished");
            for handler in &mut self.on_end {
                handler(id);
            }
        }
    }

    /// Recompute geometry for a new surface size, repaint the grid and
    /// redraw the held function.
    ///
    /// # Errors
    /// Geometry errors; the chart is left unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ChartError> {
        let geometry =
            Geometry::compute(width, height, self.config.padding, self.config.x, self.config.y)?;
        tracing::debug!(width, height, ?geometry, "chart resized");

        self.grid.resize(width, height);
        grid::paint(&mut self.grid, &geometry, &self.config.grid);

        self.foreground.surface.resize(width, height);
        self.foreground.geometry = geometry;
        if let Some(f) = self.function.clone() {
            self.foreground.draw(&*f);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    fn chart() -> Chart<DisplayList> {
        Chart::new(800, 600, ChartConfig::default()).unwrap()
    }

    #[test]
    fn construction_paints_grid_only() {
        let c = chart();
        assert_eq!(c.grid_layer().texts().count(), 42);
        assert!(c.chart_layer().ops().is_empty());
        assert_eq!(c.state(), TransitionState::Idle);
        assert!(c.plotted_function().is_none());
    }

    #[test]
    fn mismatched_layers_are_rejected() {
        let err = Chart::from_layers(
            DisplayList::new(800, 600),
            DisplayList::new(800, 500),
            ChartConfig::default(),
        );
        assert!(matches!(err, Err(ChartError::LayerSizeMismatch { .. })));
    }

    #[test]
    fn first_assignment_animates_from_zero() {
        let mut c = chart();
        let starts = Rc::new(RefCell::new(0));
        let s = Rc::clone(&starts);
        c.on_transition_start(move |_| *s.borrow_mut() += 1);

        c.set_plotted_function(Rc::new(|_| 50.0));
        assert_eq!(*starts.borrow(), 1);
        // progress 0 of a transition from zero
        assert!(c.chart_layer().segments().all(|(a, _)| a.1 == 300.0));
        assert_eq!(c.state(), TransitionState::Transitioning { runs: 1 });
    }

    #[test]
    fn first_assignment_can_paint_directly() {
        let config = ChartConfig {
            first_plot: FirstPlot::PaintDirectly,
            ..ChartConfig::default()
        };
        let mut c = Chart::new(800, 600, config).unwrap();
        let starts = Rc::new(RefCell::new(0));
        let s = Rc::clone(&starts);
        c.on_transition_start(move |_| *s.borrow_mut() += 1);

        c.set_plotted_function(Rc::new(|_| 50.0));
        assert_eq!(*starts.borrow(), 0);
        assert_eq!(c.state(), TransitionState::Idle);
        let y = c.geometry().pixel_y(50.0);
        assert!(c.chart_layer().segments().all(|(a, _)| a.1 == y));
    }

    #[test]
    fn unknown_name_draws_nothing() {
        let mut c = chart();
        let err = c.set_function_by_name("gamma");
        assert!(matches!(err, Err(ChartError::InvalidAssignment { .. })));
        assert!(c.chart_layer().ops().is_empty());
        assert!(c.plotted_function().is_none());
        assert!(c.set_function_by_name("cube").is_ok());
        assert!(c.plotted_function().is_some());
    }

    #[test]
    fn reassignment_while_transitioning_anchors_at_held_function() {
        let mut c = chart();
        let t0 = Instant::now();
        c.set_plotted_function(Rc::new(|_| 20.0));
        c.tick(t0);
        c.set_plotted_function(Rc::new(|_| 60.0));
        // the new run starts from the held target (20), not from the
        // in-flight blend
        let y = c.geometry().pixel_y(20.0);
        assert!(c.chart_layer().segments().all(|(a, _)| a.1 == y));
        assert_eq!(c.plotted_function().map(|f| f(0.0)), Some(60.0));
        assert_eq!(c.state(), TransitionState::Transitioning { runs: 2 });
    }

    #[test]
    fn resize_recomputes_geometry_and_redraws() {
        let mut c = Chart::new(
            800,
            600,
            ChartConfig {
                first_plot: FirstPlot::PaintDirectly,
                ..ChartConfig::default()
            },
        )
        .unwrap();
        c.set_plotted_function(Rc::new(|x| x));
        c.resize(400, 300).unwrap();
        assert_eq!(c.geometry().center, (200.0, 150.0));
        assert_eq!(c.chart_layer().size(), (400, 300));
        assert_eq!(c.chart_layer().segments().count(), 320);
        assert_eq!(c.grid_layer().texts().count(), 42);

        assert!(matches!(
            c.resize(60, 60),
            Err(ChartError::SurfaceTooSmall { .. })
        ));
        assert_eq!(c.geometry().center, (200.0, 150.0));
    }

    #[test]
    fn resize_mid_transition_moves_later_frames_to_new_geometry() {
        let mut c = chart();
        c.set_plotted_function(Rc::new(|_| 100.0));
        let t0 = Instant::now();
        c.tick(t0);
        assert_eq!(c.chart_layer().segments().count(), 720);

        c.resize(400, 300).unwrap();
        c.tick(t0 + Duration::from_millis(500));
        // columns 40..=360 at the new size
        assert_eq!(c.chart_layer().segments().count(), 320);
        let mid = c.geometry().pixel_y(50.0);
        assert!(
            c.chart_layer()
                .segments()
                .all(|(a, b)| (a.1 - mid).abs() < 1e-9 && (b.1 - mid).abs() < 1e-9)
        );

        c.tick(t0 + Duration::from_millis(1_000));
        assert_eq!(c.state(), TransitionState::Idle);
        let top = c.geometry().rect.top;
        assert!(c.chart_layer().segments().all(|(a, _)| (a.1 - top).abs() < 1e-9));
        assert_eq!(c.chart_layer().segments().last().map(|(_, b)| b.0), Some(360.0));
    }

    #[test]
    fn easing_is_captured_when_a_transition_starts() {
        let mut c = chart();
        c.set_easing(Rc::new(|t: f64| t * t));
        c.set_plotted_function(Rc::new(|_| 100.0));
        c.set_easing(identity());
        let t0 = Instant::now();
        c.tick(t0);
        c.tick(t0 + Duration::from_millis(500));
        // quadratic easing at half time -> quarter of the way
        let y = c.geometry().pixel_y(25.0);
        assert!(c.chart_layer().segments().all(|(a, _)| (a.1 - y).abs() < 1e-9));
    }
}

//! src/anim/easing.rs
//!
//! Easing curves mapping linear time progress to display progress.
//!
//! Curves are not required to stay inside `[0, 1]`: `Elastic` and `OutBack`
//! overshoot. Every curve maps 0 to 0 and 1 to 1.

use std::f64::consts::PI;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::chart::ChartError;

/// A progress-to-progress function owned by whoever installs it.
pub type EasingFn = Rc<dyn Fn(f64) -> f64>;

/// Identity easing, the scheduler's default.
pub fn identity() -> EasingFn {
    Rc::new(|t| t)
}

/// Named easing curves offered to the host application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    Quadratic,
    Cubic,
    Elastic,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    OutBack,
}

impl Easing {
    /// Every curve, in selector order.
    pub const ALL: [Easing; 26] = [
        Easing::Linear,
        Easing::Quadratic,
        Easing::Cubic,
        Easing::Elastic,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::OutBack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Quadratic => "quadratic",
            Easing::Cubic => "cubic",
            Easing::Elastic => "elastic",
            Easing::InQuad => "inQuad",
            Easing::OutQuad => "outQuad",
            Easing::InOutQuad => "inOutQuad",
            Easing::InCubic => "inCubic",
            Easing::OutCubic => "outCubic",
            Easing::InOutCubic => "inOutCubic",
            Easing::InQuart => "inQuart",
            Easing::OutQuart => "outQuart",
            Easing::InOutQuart => "inOutQuart",
            Easing::InQuint => "inQuint",
            Easing::OutQuint => "outQuint",
            Easing::InOutQuint => "inOutQuint",
            Easing::InSine => "inSine",
            Easing::OutSine => "outSine",
            Easing::InOutSine => "inOutSine",
            Easing::InExpo => "inExpo",
            Easing::OutExpo => "outExpo",
            Easing::InOutExpo => "inOutExpo",
            Easing::InCirc => "inCirc",
            Easing::OutCirc => "outCirc",
            Easing::InOutCirc => "inOutCirc",
            Easing::OutBack => "outBack",
        }
    }

    /// Apply the curve to a linear progress value.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Quadratic => t * (-(t * t) * t + 4.0 * t * t - 6.0 * t + 4.0),
            Easing::Cubic => t * (4.0 * t * t - 9.0 * t + 6.0),
            Easing::Elastic => {
                t * (33.0 * t.powi(4) - 106.0 * t.powi(3) + 126.0 * t * t - 67.0 * t + 15.0)
            }
            Easing::InQuad => t * t,
            Easing::OutQuad => t * (2.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::InCubic => t.powi(3),
            Easing::OutCubic => (t - 1.0).powi(3) + 1.0,
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::InQuart => t.powi(4),
            Easing::OutQuart => 1.0 - (t - 1.0).powi(4),
            Easing::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Easing::InQuint => t.powi(5),
            Easing::OutQuint => 1.0 + (t - 1.0).powi(5),
            Easing::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Easing::InSine => 1.0 - (t * PI / 2.0).cos(),
            Easing::OutSine => (t * PI / 2.0).sin(),
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::InExpo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Easing::InOutExpo => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::InCirc => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Easing::OutCirc => (1.0 - (t - 1.0).powi(2)).max(0.0).sqrt(),
            Easing::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).max(0.0).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
                }
            }
            Easing::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }

    /// Shareable function form, suitable for `Chart::set_easing`.
    pub fn to_fn(self) -> EasingFn {
        Rc::new(move |t| self.apply(t))
    }

    /// The curve after this one in `ALL`, wrapping around.
    pub fn next(self) -> Easing {
        let idx = Easing::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Easing::ALL[(idx + 1) % Easing::ALL.len()]
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| ChartError::UnknownEasing {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_hits_endpoints() {
        for easing in Easing::ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{} at 1", easing);
        }
    }

    #[test]
    fn out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::OutBack.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn names_round_trip_and_unknown_is_rejected() {
        assert_eq!("inOutCubic".parse::<Easing>().unwrap(), Easing::InOutCubic);
        assert!(matches!(
            "bouncy".parse::<Easing>(),
            Err(ChartError::UnknownEasing { .. })
        ));
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Easing::OutBack.next(), Easing::Linear);
        assert_eq!(Easing::Linear.next(), Easing::Quadratic);
    }
}

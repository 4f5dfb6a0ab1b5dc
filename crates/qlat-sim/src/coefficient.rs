//! Scalar coefficients that may vary over the evolution window.

use serde::Serialize;

use crate::error::{SimError, SimResult};

/// Linear interpolation from `start` at `t = 0` to `end` at `t = total_time`:
///
///   coeff(t) = (1 − t/T)·start + (t/T)·end
///
/// ```rust
/// use qlat_sim::LinearRamp;
///
/// let ramp = LinearRamp::new(-5.0, 5.0, 4.0).unwrap();
/// assert_eq!(ramp.evaluate(0.0), -5.0);
/// assert_eq!(ramp.evaluate(2.0), 0.0);
/// assert_eq!(ramp.evaluate(4.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearRamp {
    start: f64,
    end: f64,
    total_time: f64,
}

impl LinearRamp {
    /// Create a ramp. `total_time` must be finite and positive.
    pub fn new(start: f64, end: f64, total_time: f64) -> SimResult<Self> {
        if !(total_time.is_finite() && total_time > 0.0) {
            return Err(SimError::InvalidTime(total_time));
        }
        Ok(Self {
            start,
            end,
            total_time,
        })
    }

    /// Value at time `t`. Not clamped outside `[0, T]`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let s = t / self.total_time;
        (1.0 - s) * self.start + s * self.end
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

/// A model coupling: either fixed or ramped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Coefficient {
    Constant(f64),
    Ramp(LinearRamp),
}

impl Coefficient {
    /// Value at time `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            Coefficient::Constant(c) => *c,
            Coefficient::Ramp(ramp) => ramp.evaluate(t),
        }
    }

    /// True for ramps.
    pub fn is_time_dependent(&self) -> bool {
        matches!(self, Coefficient::Ramp(_))
    }

    /// The constant value, if this coefficient does not vary.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Coefficient::Constant(c) => Some(*c),
            Coefficient::Ramp(_) => None,
        }
    }

    /// `factor · self`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Coefficient::Constant(c) => Coefficient::Constant(factor * c),
            Coefficient::Ramp(r) => Coefficient::Ramp(LinearRamp {
                start: factor * r.start,
                end: factor * r.end,
                total_time: r.total_time,
            }),
        }
    }
}

impl From<f64> for Coefficient {
    fn from(c: f64) -> Self {
        Coefficient::Constant(c)
    }
}

impl From<LinearRamp> for Coefficient {
    fn from(ramp: LinearRamp) -> Self {
        Coefficient::Ramp(ramp)
    }
}

//! Evolution requests.
//!
//! An [`EvolutionRequest`] describes one run: evolve `|0…0⟩` under a
//! Hamiltonian for time `T` and measure every qubit. Time-dependent
//! Hamiltonians are evolved piecewise-constant over a [`TimeGrid`];
//! [`EvolutionRequest::segments`] performs that discretization so every
//! backend sees the same schedule.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::hamiltonian::Hamiltonian;
use crate::schedule::ModelHamiltonian;

/// Relative tolerance when checking that a grid ends at `T`.
const GRID_END_TOLERANCE: f64 = 1e-9;

/// Strictly increasing sample times `0 = t_0 < t_1 < … < t_{m-1} = T`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// `m` evenly spaced points from 0 to `total_time` inclusive.
    ///
    /// ```rust
    /// use qlat_sim::TimeGrid;
    ///
    /// let grid = TimeGrid::uniform(4.0, 5).unwrap();
    /// assert_eq!(grid.points(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(grid.n_intervals(), 4);
    /// ```
    pub fn uniform(total_time: f64, m: usize) -> SimResult<Self> {
        if !(total_time.is_finite() && total_time > 0.0) {
            return Err(SimError::InvalidTime(total_time));
        }
        if m < 2 {
            return Err(SimError::InvalidTimeGrid(format!(
                "need at least 2 points, got {m}"
            )));
        }
        let last = (m - 1) as f64;
        let points = (0..m)
            .map(|k| if k == m - 1 { total_time } else { total_time * k as f64 / last })
            .collect();
        Ok(Self { points })
    }

    /// Use explicit sample times. They must be finite, strictly increasing
    /// and start at 0.
    pub fn from_points(points: Vec<f64>) -> SimResult<Self> {
        if points.len() < 2 {
            return Err(SimError::InvalidTimeGrid(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|t| !t.is_finite()) {
            return Err(SimError::InvalidTimeGrid(format!("non-finite point {bad}")));
        }
        if points[0] != 0.0 {
            return Err(SimError::InvalidTimeGrid(format!(
                "grid must start at 0, starts at {}",
                points[0]
            )));
        }
        if let Some(w) = points.windows(2).find(|w| w[1] <= w[0]) {
            return Err(SimError::InvalidTimeGrid(format!(
                "points not strictly increasing: {} then {}",
                w[0], w[1]
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Final time.
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Number of piecewise-constant intervals (`points - 1`).
    pub fn n_intervals(&self) -> usize {
        self.points.len() - 1
    }
}

/// Where within an interval `H(t)` is sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleRule {
    /// `H(t_k)` on `[t_k, t_{k+1})`.
    #[default]
    Left,
    /// `H((t_k + t_{k+1}) / 2)`; second-order accurate in the interval width.
    Midpoint,
}

/// A piece of the evolution with a fixed Hamiltonian.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
    pub hamiltonian: Hamiltonian,
}

/// One evolution from the all-zero state, measured on every qubit.
#[derive(Debug, Clone)]
pub struct EvolutionRequest {
    hamiltonian: ModelHamiltonian,
    total_time: f64,
    time_grid: Option<TimeGrid>,
    sample_rule: SampleRule,
    n_qubits: Option<u32>,
}

impl EvolutionRequest {
    /// Evolve under `hamiltonian` for `total_time`.
    ///
    /// Nothing is checked until [`validate`](Self::validate).
    pub fn new(hamiltonian: impl Into<ModelHamiltonian>, total_time: f64) -> Self {
        Self {
            hamiltonian: hamiltonian.into(),
            total_time,
            time_grid: None,
            sample_rule: SampleRule::default(),
            n_qubits: None,
        }
    }

    #[must_use]
    pub fn with_time_grid(mut self, grid: TimeGrid) -> Self {
        self.time_grid = Some(grid);
        self
    }

    /// Use a uniform grid of `m` points over `[0, T]`.
    pub fn with_time_points(self, m: usize) -> SimResult<Self> {
        let grid = TimeGrid::uniform(self.total_time, m)?;
        Ok(self.with_time_grid(grid))
    }

    #[must_use]
    pub fn with_sample_rule(mut self, rule: SampleRule) -> Self {
        self.sample_rule = rule;
        self
    }

    /// Measure `n` qubits instead of the width inferred from the terms.
    #[must_use]
    pub fn with_n_qubits(mut self, n: u32) -> Self {
        self.n_qubits = Some(n);
        self
    }

    pub fn hamiltonian(&self) -> &ModelHamiltonian {
        &self.hamiltonian
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn time_grid(&self) -> Option<&TimeGrid> {
        self.time_grid.as_ref()
    }

    pub fn sample_rule(&self) -> SampleRule {
        self.sample_rule
    }

    /// Number of measured qubits: the explicit width, else the highest
    /// qubit the Hamiltonian touches plus one.
    pub fn n_qubits(&self) -> u32 {
        self.n_qubits
            .unwrap_or_else(|| self.hamiltonian.min_qubits())
    }

    /// Check the request is runnable.
    ///
    /// A Hamiltonian without terms is fine as long as the width is known;
    /// it evolves as the identity.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.total_time.is_finite() && self.total_time > 0.0) {
            return Err(SimError::InvalidTime(self.total_time));
        }
        if let (ModelHamiltonian::Driven(_), None) = (&self.hamiltonian, &self.time_grid) {
            return Err(SimError::MissingTimeGrid);
        }
        if let Some(grid) = &self.time_grid {
            let end = grid.end();
            if (end - self.total_time).abs() > GRID_END_TOLERANCE * self.total_time {
                return Err(SimError::InvalidTimeGrid(format!(
                    "grid ends at {end}, evolution time is {}",
                    self.total_time
                )));
            }
        }
        let needed = self.hamiltonian.min_qubits();
        if let Some(n) = self.n_qubits {
            if needed > n {
                return Err(SimError::QubitOutOfRange {
                    qubit: needed - 1,
                    n_qubits: n,
                });
            }
        }
        if self.n_qubits() == 0 {
            return Err(SimError::EmptyHamiltonian);
        }
        Ok(())
    }

    /// Piecewise-constant schedule.
    ///
    /// A static Hamiltonian is a single segment over `[0, T]` regardless of
    /// any grid. A driven one yields one segment per grid interval, sampled
    /// according to the [`SampleRule`].
    pub fn segments(&self) -> SimResult<Vec<Segment>> {
        self.validate()?;
        let segments = match (&self.hamiltonian, &self.time_grid) {
            (ModelHamiltonian::Static(h), _) => vec![Segment {
                start: 0.0,
                duration: self.total_time,
                hamiltonian: h.clone(),
            }],
            (ModelHamiltonian::Driven(h), Some(grid)) => grid
                .points()
                .windows(2)
                .map(|w| {
                    let t = match self.sample_rule {
                        SampleRule::Left => w[0],
                        SampleRule::Midpoint => 0.5 * (w[0] + w[1]),
                    };
                    Segment {
                        start: w[0],
                        duration: w[1] - w[0],
                        hamiltonian: h.evaluate(t),
                    }
                })
                .collect(),
            (ModelHamiltonian::Driven(_), None) => return Err(SimError::MissingTimeGrid),
        };
        debug!(
            segments = segments.len(),
            total_time = self.total_time,
            rule = ?self.sample_rule,
            "discretized evolution"
        );
        Ok(segments)
    }
}

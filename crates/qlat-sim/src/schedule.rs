//! Time-parameterized Hamiltonians.

use std::fmt;
use std::sync::Arc;

use crate::coefficient::Coefficient;
use crate::hamiltonian::{Hamiltonian, HamiltonianTerm};

/// A Hamiltonian that is a pure function of time.
pub trait TimeDependentHamiltonian: Send + Sync {
    /// `H(t)`.
    fn evaluate(&self, t: f64) -> Hamiltonian;

    /// Qubits touched by `H(t)`. Defaults to the width of `H(0)`.
    fn min_qubits(&self) -> u32 {
        self.evaluate(0.0).min_qubits()
    }
}

impl<F> TimeDependentHamiltonian for F
where
    F: Fn(f64) -> Hamiltonian + Send + Sync,
{
    fn evaluate(&self, t: f64) -> Hamiltonian {
        self(t)
    }
}

/// `H(t) = Σ_k a_k(t) · H_k` over fixed operator components.
///
/// ```rust
/// use qlat_sim::{Coefficient, DrivenHamiltonian, Hamiltonian, HamiltonianTerm, LinearRamp};
/// use qlat_sim::schedule::TimeDependentHamiltonian;
///
/// let ramp = LinearRamp::new(0.0, 2.0, 1.0).unwrap();
/// let h = DrivenHamiltonian::new()
///     .with_component(Coefficient::Ramp(ramp), Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]));
/// assert_eq!(h.evaluate(0.5).terms()[0].coeff, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DrivenHamiltonian {
    components: Vec<(Coefficient, Hamiltonian)>,
}

impl DrivenHamiltonian {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coeff(t) · h`.
    #[must_use]
    pub fn with_component(mut self, coeff: Coefficient, h: Hamiltonian) -> Self {
        self.components.push((coeff, h));
        self
    }

    pub fn components(&self) -> &[(Coefficient, Hamiltonian)] {
        &self.components
    }

    /// True if any component coefficient varies.
    pub fn is_time_dependent(&self) -> bool {
        self.components.iter().any(|(c, _)| c.is_time_dependent())
    }
}

impl TimeDependentHamiltonian for DrivenHamiltonian {
    /// Concatenates the scaled components without merging, so the term
    /// list has the same shape at every `t`.
    fn evaluate(&self, t: f64) -> Hamiltonian {
        self.components
            .iter()
            .flat_map(|(coeff, h)| {
                let a = coeff.evaluate(t);
                h.terms()
                    .iter()
                    .map(move |term| HamiltonianTerm::new(a * term.coeff, term.pauli.clone()))
            })
            .collect()
    }

    fn min_qubits(&self) -> u32 {
        self.components
            .iter()
            .map(|(_, h)| h.min_qubits())
            .max()
            .unwrap_or(0)
    }
}

/// The Hamiltonian handed to an evolution: fixed, or a function of time.
#[derive(Clone)]
pub enum ModelHamiltonian {
    Static(Hamiltonian),
    Driven(Arc<dyn TimeDependentHamiltonian>),
}

impl ModelHamiltonian {
    /// Wrap any time-dependent Hamiltonian.
    pub fn driven(h: impl TimeDependentHamiltonian + 'static) -> Self {
        ModelHamiltonian::Driven(Arc::new(h))
    }

    /// `H(t)`; static Hamiltonians ignore `t`.
    pub fn evaluate(&self, t: f64) -> Hamiltonian {
        match self {
            ModelHamiltonian::Static(h) => h.clone(),
            ModelHamiltonian::Driven(h) => h.evaluate(t),
        }
    }

    pub fn is_time_dependent(&self) -> bool {
        matches!(self, ModelHamiltonian::Driven(_))
    }

    /// The fixed Hamiltonian, if there is one.
    pub fn as_static(&self) -> Option<&Hamiltonian> {
        match self {
            ModelHamiltonian::Static(h) => Some(h),
            ModelHamiltonian::Driven(_) => None,
        }
    }

    pub fn min_qubits(&self) -> u32 {
        match self {
            ModelHamiltonian::Static(h) => h.min_qubits(),
            ModelHamiltonian::Driven(h) => h.min_qubits(),
        }
    }
}

impl From<Hamiltonian> for ModelHamiltonian {
    fn from(h: Hamiltonian) -> Self {
        ModelHamiltonian::Static(h)
    }
}

impl From<DrivenHamiltonian> for ModelHamiltonian {
    fn from(h: DrivenHamiltonian) -> Self {
        ModelHamiltonian::driven(h)
    }
}

impl fmt::Debug for ModelHamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelHamiltonian::Static(h) => f.debug_tuple("Static").field(h).finish(),
            ModelHamiltonian::Driven(_) => f.write_str("Driven(..)"),
        }
    }
}

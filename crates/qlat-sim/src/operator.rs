//! Complex-coefficient Pauli sums.
//!
//! Fermionic operators mapped to qubits are sums of Pauli strings with
//! complex coefficients. Products of such sums only become Hermitian once
//! all terms are collected, so the algebra runs in [`OperatorSum`] and the
//! result is converted to a real [`Hamiltonian`](crate::Hamiltonian) through
//! [`HamiltonianBuilder`](crate::hamiltonian::HamiltonianBuilder).

use num_complex::Complex64;
use rustc_hash::FxHashMap;

use crate::hamiltonian::PauliString;

/// `Σ_k c_k · P_k` with `c_k ∈ ℂ`.
///
/// Equal Pauli strings are merged on insertion; terms keep the position of
/// their first occurrence.
#[derive(Debug, Clone, Default)]
pub struct OperatorSum {
    terms: Vec<(PauliString, Complex64)>,
    index: FxHashMap<PauliString, usize>,
}

impl OperatorSum {
    /// The zero operator.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The identity operator.
    pub fn identity() -> Self {
        Self::pauli(Complex64::new(1.0, 0.0), PauliString::identity())
    }

    /// A single term `coeff · pauli`.
    pub fn pauli(coeff: Complex64, pauli: PauliString) -> Self {
        let mut op = Self::zero();
        op.add_term(coeff, pauli);
        op
    }

    /// Add `coeff · pauli` in place.
    pub fn add_term(&mut self, coeff: Complex64, pauli: PauliString) {
        match self.index.get(&pauli) {
            Some(&i) => self.terms[i].1 += coeff,
            None => {
                self.index.insert(pauli.clone(), self.terms.len());
                self.terms.push((pauli, coeff));
            }
        }
    }

    /// Add `coeff · other` in place.
    pub fn add_scaled(&mut self, coeff: Complex64, other: &OperatorSum) {
        for (pauli, c) in &other.terms {
            self.add_term(coeff * c, pauli.clone());
        }
    }

    /// Operator product `self · other`.
    #[must_use]
    pub fn product(&self, other: &OperatorSum) -> OperatorSum {
        let mut out = OperatorSum::zero();
        for (pa, ca) in &self.terms {
            for (pb, cb) in &other.terms {
                let (phase, p) = pa.multiply(pb);
                out.add_term(ca * cb * phase, p);
            }
        }
        out
    }

    /// Hermitian adjoint. Pauli strings are Hermitian, so only the
    /// coefficients are conjugated.
    #[must_use]
    pub fn adjoint(&self) -> OperatorSum {
        let mut out = self.clone();
        for (_, c) in &mut out.terms {
            *c = c.conj();
        }
        out
    }

    /// A copy multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Complex64) -> OperatorSum {
        let mut out = self.clone();
        for (_, c) in &mut out.terms {
            *c *= factor;
        }
        out
    }

    /// Coefficient of `pauli` (zero if absent).
    pub fn coefficient(&self, pauli: &PauliString) -> Complex64 {
        self.index
            .get(pauli)
            .map_or(Complex64::new(0.0, 0.0), |&i| self.terms[i].1)
    }

    /// All `(pauli, coeff)` pairs, including any that cancelled to zero.
    pub fn terms(&self) -> impl Iterator<Item = (&PauliString, Complex64)> + '_ {
        self.terms.iter().map(|(p, c)| (p, *c))
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no terms are stored.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if every coefficient is within `tol` of zero.
    pub fn is_zero(&self, tol: f64) -> bool {
        self.terms.iter().all(|(_, c)| c.norm() <= tol)
    }

    /// `self · other + other · self`.
    #[must_use]
    pub fn anticommutator(&self, other: &OperatorSum) -> OperatorSum {
        let mut out = self.product(other);
        out.add_scaled(Complex64::new(1.0, 0.0), &other.product(self));
        out
    }
}

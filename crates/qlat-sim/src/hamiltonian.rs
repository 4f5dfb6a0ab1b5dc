//! Hamiltonian data structures.
//!
//! A Hamiltonian is a sum of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℝ.
//!
//! # Example
//!
//! ```rust
//! use qlat_sim::hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
//!
//! // H = -1.0·Z₀Z₁  +  0.5·X₀
//! let h = Hamiltonian::from_terms(vec![
//!     HamiltonianTerm::new(-1.0, PauliString::from_ops(vec![(0, PauliOp::Z), (1, PauliOp::Z)])),
//!     HamiltonianTerm::new( 0.5, PauliString::from_ops(vec![(0, PauliOp::X)])),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! assert_eq!(h.min_qubits(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::operator::OperatorSum;

/// Coefficients with magnitude below this are dropped by [`HamiltonianBuilder::build`].
pub const COEFF_TOLERANCE: f64 = 1e-12;

/// Largest imaginary part [`HamiltonianBuilder::build`] treats as round-off.
pub const HERMITICITY_TOLERANCE: f64 = 1e-9;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Single-qubit product `self · other = phase · result`.
    pub fn multiply(self, other: PauliOp) -> (Complex64, PauliOp) {
        use PauliOp::{I, X, Y, Z};
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match (self, other) {
            (I, p) | (p, I) => (one, p),
            (X, X) | (Y, Y) | (Z, Z) => (one, I),
            (X, Y) => (i, Z),
            (Y, Z) => (i, X),
            (Z, X) => (i, Y),
            (Y, X) => (-i, Z),
            (Z, Y) => (-i, X),
            (X, Z) => (-i, Y),
        }
    }

    fn symbol(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with Identity terms
/// omitted.  Qubits not listed are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity terms, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// The identity string.
    pub fn identity() -> Self {
        Self { ops: Vec::new() }
    }

    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped and the remaining ops are sorted by
    /// qubit. If a qubit is listed twice the later entry wins.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let by_qubit: BTreeMap<u32, PauliOp> = ops.into_iter().collect();
        Self {
            ops: by_qubit
                .into_iter()
                .filter(|(_, op)| *op != PauliOp::I)
                .collect(),
        }
    }

    /// A single non-identity operator.
    pub fn single(qubit: u32, op: PauliOp) -> Self {
        Self::from_ops([(qubit, op)])
    }

    /// Construct a Z⊗Z⊗...⊗Z string spanning the given qubits.
    pub fn zz(qubits: impl IntoIterator<Item = u32>) -> Self {
        Self::from_ops(qubits.into_iter().map(|q| (q, PauliOp::Z)))
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// The operator acting on `qubit` (I if not listed).
    pub fn op_at(&self, qubit: u32) -> PauliOp {
        self.ops
            .binary_search_by_key(&qubit, |(q, _)| *q)
            .map_or(PauliOp::I, |i| self.ops[i].1)
    }

    /// True if there are no non-identity operators (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Operator product `self · other = phase · result`.
    pub fn multiply(&self, other: &PauliString) -> (Complex64, PauliString) {
        let mut phase = Complex64::new(1.0, 0.0);
        let mut ops = Vec::with_capacity(self.ops.len() + other.ops.len());
        let (mut a, mut b) = (self.ops.iter().peekable(), other.ops.iter().peekable());

        loop {
            match (a.peek(), b.peek()) {
                (Some(&&(qa, pa)), Some(&&(qb, pb))) => {
                    if qa < qb {
                        ops.push((qa, pa));
                        a.next();
                    } else if qb < qa {
                        ops.push((qb, pb));
                        b.next();
                    } else {
                        let (p, op) = pa.multiply(pb);
                        phase *= p;
                        if op != PauliOp::I {
                            ops.push((qa, op));
                        }
                        a.next();
                        b.next();
                    }
                }
                (Some(&&entry), None) => {
                    ops.push(entry);
                    a.next();
                }
                (None, Some(&&entry)) => {
                    ops.push(entry);
                    b.next();
                }
                (None, None) => break,
            }
        }
        (phase, PauliString { ops })
    }

    /// True if the two strings commute.
    ///
    /// Pauli strings either commute or anticommute; they anticommute exactly
    /// when they differ (both non-identity) on an odd number of qubits.
    pub fn commutes_with(&self, other: &PauliString) -> bool {
        let clashes = self
            .ops
            .iter()
            .filter(|(q, op)| {
                let theirs = other.op_at(*q);
                theirs != PauliOp::I && theirs != *op
            })
            .count();
        clashes % 2 == 0
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (k, (q, op)) in self.ops.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", op.symbol(), q)?;
        }
        Ok(())
    }
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl HamiltonianTerm {
    /// Create a new term.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// Shorthand: single-qubit X term.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::X))
    }

    /// Shorthand: single-qubit Y term.
    pub fn y(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Y))
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Z))
    }

    /// Shorthand: ZZ coupling term. `zz(q, q, c)` is `c·I`.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        let (phase, pauli) =
            PauliString::single(q0, PauliOp::Z).multiply(&PauliString::single(q1, PauliOp::Z));
        Self::new(coeff * phase.re, pauli)
    }
}

/// A sum-of-Pauli-strings Hamiltonian.
///
/// H = Σ_k  c_k · P_k
///
/// Term order is preserved; product formulas apply terms in this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<HamiltonianTerm>) -> Self {
        Self { terms }
    }

    /// All terms.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Append a term.
    pub fn push(&mut self, term: HamiltonianTerm) {
        self.terms.push(term);
    }

    /// Spectral norm upper bound: Σ |c_k| (used by QDrift).
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// The minimum number of qubits required to represent this Hamiltonian.
    ///
    /// Returns 0 if the Hamiltonian is empty or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|t| t.pauli.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }

    /// A copy with every coefficient multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.terms
            .iter()
            .map(|t| HamiltonianTerm::new(t.coeff * factor, t.pauli.clone()))
            .collect()
    }

    /// Merge terms with equal Pauli strings and drop negligible coefficients.
    ///
    /// Merged terms keep the position of their first occurrence.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut index: FxHashMap<&PauliString, usize> = FxHashMap::default();
        let mut merged: Vec<HamiltonianTerm> = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match index.get(&term.pauli) {
                Some(&i) => merged[i].coeff += term.coeff,
                None => {
                    index.insert(&term.pauli, merged.len());
                    merged.push(term.clone());
                }
            }
        }
        merged.retain(|t| t.coeff.abs() >= COEFF_TOLERANCE);
        Self { terms: merged }
    }
}

impl FromIterator<HamiltonianTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = HamiltonianTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<HamiltonianTerm> for Hamiltonian {
    fn extend<T: IntoIterator<Item = HamiltonianTerm>>(&mut self, iter: T) {
        self.terms.extend(iter);
    }
}

impl fmt::Display for Hamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (k, term) in self.terms.iter().enumerate() {
            match (k, term.coeff < 0.0) {
                (0, _) => write!(f, "{}", term.coeff)?,
                (_, true) => write!(f, " - {}", -term.coeff)?,
                (_, false) => write!(f, " + {}", term.coeff)?,
            }
            write!(f, "·{}", term.pauli)?;
        }
        Ok(())
    }
}

/// Accumulates real and complex operator contributions into a [`Hamiltonian`].
///
/// ```rust
/// use qlat_sim::hamiltonian::{HamiltonianBuilder, PauliOp, PauliString};
///
/// let mut builder = HamiltonianBuilder::new();
/// builder
///     .add_term(1.0, PauliString::single(0, PauliOp::Z))
///     .add_term(0.5, PauliString::single(0, PauliOp::Z));
/// let h = builder.build().unwrap();
/// assert_eq!(h.n_terms(), 1);
/// assert_eq!(h.terms()[0].coeff, 1.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HamiltonianBuilder {
    acc: OperatorSum,
}

impl HamiltonianBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coeff · pauli`.
    pub fn add_term(&mut self, coeff: f64, pauli: PauliString) -> &mut Self {
        self.acc.add_term(Complex64::new(coeff, 0.0), pauli);
        self
    }

    /// Add `coeff · op` for a complex-coefficient operator.
    pub fn add_operator(&mut self, coeff: f64, op: &OperatorSum) -> &mut Self {
        self.acc.add_scaled(Complex64::new(coeff, 0.0), op);
        self
    }

    /// Add `scale · h`.
    pub fn add_hamiltonian(&mut self, scale: f64, h: &Hamiltonian) -> &mut Self {
        for term in h.terms() {
            self.add_term(scale * term.coeff, term.pauli.clone());
        }
        self
    }

    /// Produce the Hamiltonian.
    ///
    /// Equal strings have already been merged; terms with |c| below
    /// [`COEFF_TOLERANCE`] are dropped. Fails if any surviving imaginary part
    /// exceeds [`HERMITICITY_TOLERANCE`].
    pub fn build(&self) -> SimResult<Hamiltonian> {
        let mut terms = Vec::with_capacity(self.acc.len());
        for (pauli, coeff) in self.acc.terms() {
            if coeff.im.abs() > HERMITICITY_TOLERANCE {
                return Err(SimError::NonHermitian {
                    pauli: pauli.to_string(),
                    imag: coeff.im,
                });
            }
            if coeff.re.abs() >= COEFF_TOLERANCE {
                terms.push(HamiltonianTerm::new(coeff.re, pauli.clone()));
            }
        }
        Ok(Hamiltonian::from_terms(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_single_qubit_products() {
        assert_eq!(PauliOp::X.multiply(PauliOp::Y), (c(0.0, 1.0), PauliOp::Z));
        assert_eq!(PauliOp::Y.multiply(PauliOp::X), (c(0.0, -1.0), PauliOp::Z));
        assert_eq!(PauliOp::Z.multiply(PauliOp::Z), (c(1.0, 0.0), PauliOp::I));
        assert_eq!(PauliOp::I.multiply(PauliOp::Y), (c(1.0, 0.0), PauliOp::Y));
    }

    #[test]
    fn test_string_product_merges_qubits() {
        let a = PauliString::from_ops([(0, PauliOp::X), (2, PauliOp::Z)]);
        let b = PauliString::from_ops([(0, PauliOp::Y), (1, PauliOp::X)]);
        let (phase, p) = a.multiply(&b);
        assert_eq!(phase, c(0.0, 1.0));
        assert_eq!(
            p.ops(),
            &[(0, PauliOp::Z), (1, PauliOp::X), (2, PauliOp::Z)]
        );
    }

    #[test]
    fn test_commutation() {
        let xx = PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::X)]);
        let zz = PauliString::zz([0, 1]);
        let z0 = PauliString::single(0, PauliOp::Z);
        assert!(xx.commutes_with(&zz));
        assert!(!xx.commutes_with(&z0));
    }

    #[test]
    fn test_zz_on_same_qubit_is_identity() {
        let t = HamiltonianTerm::zz(3, 3, -2.0);
        assert!(t.pauli.is_identity());
        assert_eq!(t.coeff, -2.0);
    }

    #[test]
    fn test_display() {
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::zz(0, 1, -1.0),
            HamiltonianTerm::x(0, -0.5),
            HamiltonianTerm::x(1, 2.0),
        ]);
        assert_eq!(h.to_string(), "-1·Z0 Z1 - 0.5·X0 + 2·X1");
        assert_eq!(Hamiltonian::default().to_string(), "0");
    }

    #[test]
    fn test_builder_rejects_imaginary_residue() {
        let mut op = OperatorSum::zero();
        op.add_term(c(0.0, 1.0), PauliString::single(0, PauliOp::X));
        let err = HamiltonianBuilder::new().add_operator(1.0, &op).build();
        assert!(matches!(err, Err(SimError::NonHermitian { .. })));
    }

    #[test]
    fn test_builder_drops_cancelled_terms() {
        let h = HamiltonianBuilder::new()
            .add_term(1.0, PauliString::single(0, PauliOp::X))
            .add_term(-1.0, PauliString::single(0, PauliOp::X))
            .add_term(0.25, PauliString::single(1, PauliOp::Z))
            .build()
            .unwrap();
        assert_eq!(h.terms(), &[HamiltonianTerm::z(1, 0.25)]);
    }
}

//! Exact piecewise-constant propagation.
//!
//! Each segment applies `exp(-i H τ)` through a truncated Taylor series.
//! The segment is split into substeps with `λ·δt ≤ MAX_STEP_NORM`, where
//! `λ = Σ|c_k|` bounds `‖H‖`, so the series converges in a handful of terms.

use num_complex::Complex64;
use tracing::trace;

use qlat_hal::{HalError, HalResult};
use qlat_sim::{Hamiltonian, PauliOp, SimError};

use crate::statevector::Statevector;

/// Largest `λ·δt` per substep.
pub const MAX_STEP_NORM: f64 = 0.5;

/// Series terms below this norm end the expansion.
pub const TAYLOR_CUTOFF: f64 = 1e-15;

/// Hard cap on series length.
const MAX_TAYLOR_TERMS: usize = 64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// One Pauli term as bit masks: `c·P|b⟩ = factor · (−1)^|b ∧ sign_mask| · |b ⊕ flip⟩`.
#[derive(Debug, Clone, Copy)]
struct MaskedTerm {
    flip: usize,
    sign_mask: usize,
    factor: Complex64,
}

/// A Hamiltonian lowered to bit masks for a fixed register width.
#[derive(Debug, Clone)]
pub struct SparseHamiltonian {
    terms: Vec<MaskedTerm>,
    lambda: f64,
    n_qubits: usize,
}

impl SparseHamiltonian {
    /// Lower `h` onto `n_qubits`.
    pub fn new(h: &Hamiltonian, n_qubits: usize) -> HalResult<Self> {
        let mut terms = Vec::with_capacity(h.n_terms());
        for term in h.terms() {
            let mut flip = 0usize;
            let mut sign_mask = 0usize;
            let mut n_y = 0u32;
            for &(q, op) in term.pauli.ops() {
                if q as usize >= n_qubits {
                    return Err(HalError::InvalidRequest(SimError::QubitOutOfRange {
                        qubit: q,
                        n_qubits: n_qubits as u32,
                    }));
                }
                let bit = 1usize << q;
                match op {
                    PauliOp::I => {}
                    PauliOp::X => flip |= bit,
                    PauliOp::Y => {
                        flip |= bit;
                        sign_mask |= bit;
                        n_y += 1;
                    }
                    PauliOp::Z => sign_mask |= bit,
                }
            }
            // Y = i·X·Z, so each Y contributes a factor of i.
            let i_pow = match n_y % 4 {
                0 => Complex64::new(1.0, 0.0),
                1 => Complex64::new(0.0, 1.0),
                2 => Complex64::new(-1.0, 0.0),
                _ => Complex64::new(0.0, -1.0),
            };
            terms.push(MaskedTerm {
                flip,
                sign_mask,
                factor: i_pow * term.coeff,
            });
        }
        Ok(Self {
            terms,
            lambda: h.lambda(),
            n_qubits,
        })
    }

    /// `Σ|c_k|`.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// `out = H·psi`.
    pub fn apply(&self, psi: &[Complex64], out: &mut [Complex64]) {
        out.fill(ZERO);
        for term in &self.terms {
            for (b, amp) in psi.iter().enumerate() {
                if *amp == ZERO {
                    continue;
                }
                let value = term.factor * amp;
                let target = b ^ term.flip;
                if (b & term.sign_mask).count_ones() % 2 == 0 {
                    out[target] += value;
                } else {
                    out[target] -= value;
                }
            }
        }
    }
}

/// Apply `exp(-i H τ)` to `state`; returns the number of substeps used.
pub fn evolve_exact(state: &mut Statevector, h: &SparseHamiltonian, duration: f64) -> usize {
    if h.is_empty() || duration == 0.0 {
        return 0;
    }
    let substeps = ((h.lambda() * duration.abs()) / MAX_STEP_NORM).ceil().max(1.0) as usize;
    let dt = duration / substeps as f64;

    let psi = state.amplitudes_mut();
    let mut term = vec![ZERO; psi.len()];
    let mut next = vec![ZERO; psi.len()];

    for _ in 0..substeps {
        term.copy_from_slice(psi);
        let mut order = 0;
        for k in 1..=MAX_TAYLOR_TERMS {
            h.apply(&term, &mut next);
            let factor = Complex64::new(0.0, -dt / k as f64);
            let mut norm_sqr = 0.0;
            for (t, n) in term.iter_mut().zip(&next) {
                *t = factor * n;
                norm_sqr += t.norm_sqr();
            }
            for (p, t) in psi.iter_mut().zip(&term) {
                *p += t;
            }
            order = k;
            if norm_sqr.sqrt() < TAYLOR_CUTOFF {
                break;
            }
        }
        trace!(order, dt, "taylor substep");
    }
    substeps
}

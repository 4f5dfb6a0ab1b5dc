//! Trotter-Suzuki product-formula synthesis.
//!
//! Approximates `exp(-i H t)` by splitting the evolution into `n_steps`
//! slices, each evolved exactly under each term in sequence.
//!
//! # First-order Trotter (Lie-Trotter)
//!
//!   exp(-i H t) ≈ [∏_k exp(-i c_k P_k t/n)]^n
//!
//! Error: O(t² / n).
//!
//! # Second-order Trotter (Suzuki-Trotter)
//!
//!   exp(-i H t) ≈ [S₂(t/n)]^n
//!   S₂(τ) = [∏_k exp(-i c_k P_k τ/2)] · [∏_k exp(-i c_{n-k} P_{n-k} τ/2)]
//!
//! Error: O(t³ / n²).

use qlat_ir::Circuit;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::hamiltonian::Hamiltonian;
use crate::synthesis::append_exp_pauli;

/// Product-formula order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrotterOrder {
    #[default]
    First,
    Second,
}

impl TryFrom<u8> for TrotterOrder {
    type Error = SimError;

    fn try_from(order: u8) -> SimResult<Self> {
        match order {
            1 => Ok(TrotterOrder::First),
            2 => Ok(TrotterOrder::Second),
            other => Err(SimError::InvalidOrder(other)),
        }
    }
}

/// Trotter product-formula time-evolution synthesiser.
pub struct TrotterEvolution {
    hamiltonian: Hamiltonian,
    /// Total evolution time t.
    t: f64,
    /// Number of Trotter steps (repetitions).
    n_steps: usize,
    /// Number of qubits; if None, inferred from the Hamiltonian.
    n_qubits: Option<u32>,
}

impl TrotterEvolution {
    /// Construct a new first- or second-order Trotter synthesiser.
    ///
    /// # Arguments
    /// * `hamiltonian`: the Hamiltonian H = Σ c_k P_k
    /// * `t`: total evolution time
    /// * `n_steps`: number of Trotter slices (higher → more accurate)
    pub fn new(hamiltonian: Hamiltonian, t: f64, n_steps: usize) -> Self {
        Self {
            hamiltonian,
            t,
            n_steps,
            n_qubits: None,
        }
    }

    /// Override the circuit width (number of qubits).
    #[must_use]
    pub fn with_n_qubits(mut self, n: u32) -> Self {
        self.n_qubits = Some(n);
        self
    }

    /// Synthesise a first-order Trotter circuit.
    pub fn first_order(&self) -> SimResult<Circuit> {
        self.circuit(TrotterOrder::First)
    }

    /// Synthesise a second-order Suzuki-Trotter circuit.
    pub fn second_order(&self) -> SimResult<Circuit> {
        self.circuit(TrotterOrder::Second)
    }

    /// Synthesise a fresh circuit of the requested order.
    pub fn circuit(&self, order: TrotterOrder) -> SimResult<Circuit> {
        let name = match order {
            TrotterOrder::First => "trotter1",
            TrotterOrder::Second => "trotter2",
        };
        let mut circuit = Circuit::with_size(name, self.effective_n_qubits());
        self.append_to(&mut circuit, order)?;
        Ok(circuit)
    }

    /// Append the product formula to an existing circuit.
    pub fn append_to(&self, circuit: &mut Circuit, order: TrotterOrder) -> SimResult<()> {
        self.validate()?;
        debug!(
            n_terms = self.hamiltonian.n_terms(),
            n_steps = self.n_steps,
            ?order,
            n_qubits = circuit.num_qubits(),
            "synthesising Trotter circuit"
        );

        match order {
            TrotterOrder::First => {
                let step_t = self.t / self.n_steps as f64;
                for _ in 0..self.n_steps {
                    for term in self.hamiltonian.terms() {
                        append_exp_pauli(circuit, term, step_t)?;
                    }
                }
            }
            TrotterOrder::Second => {
                let half_t = self.t / (2.0 * self.n_steps as f64);
                for _ in 0..self.n_steps {
                    for term in self.hamiltonian.terms() {
                        append_exp_pauli(circuit, term, half_t)?;
                    }
                    for term in self.hamiltonian.terms().iter().rev() {
                        append_exp_pauli(circuit, term, half_t)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn validate(&self) -> SimResult<()> {
        if self.hamiltonian.n_terms() == 0 {
            return Err(SimError::EmptyHamiltonian);
        }
        if self.n_steps == 0 {
            return Err(SimError::InvalidSteps(0));
        }
        Ok(())
    }

    fn effective_n_qubits(&self) -> u32 {
        self.n_qubits
            .unwrap_or_else(|| self.hamiltonian.min_qubits())
    }
}

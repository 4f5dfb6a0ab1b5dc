//! Statevector simulation engine.
//!
//! Basis index bit `q` is the state of qubit `q`.

use num_complex::Complex64;
use std::f64::consts::PI;

use qlat_hal::{HalError, HalResult};
use qlat_ir::{Circuit, Instruction, StandardGate};
use rand::Rng;

/// Widest register a statevector is ever allocated for; 2^30 amplitudes is 16 GiB.
pub const MAX_SUPPORTED_QUBITS: u32 = 30;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// A statevector representing a quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// Fails with [`HalError::RequestTooLarge`] above [`MAX_SUPPORTED_QUBITS`].
    pub fn new(num_qubits: usize) -> HalResult<Self> {
        let width = u32::try_from(num_qubits).unwrap_or(u32::MAX);
        let size = Some(width)
            .filter(|&n| n <= MAX_SUPPORTED_QUBITS)
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or(HalError::RequestTooLarge {
                n_qubits: width,
                max_qubits: MAX_SUPPORTED_QUBITS,
            })?;
        let mut amplitudes = vec![ZERO; size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// ⟨ψ|ψ⟩.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Apply every instruction of `circuit` in order.
    pub fn apply_circuit(&mut self, circuit: &Circuit) {
        for inst in circuit.instructions() {
            self.apply(inst);
        }
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) {
        let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.0 as usize).collect();
        self.apply_standard_gate(&instruction.gate, &qubits);
    }

    fn apply_standard_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match *gate {
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], theta),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= if i & mask == 0 { phase_0 } else { phase_1 };
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Per-basis-state counts from `shots` independent measurements.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: u32, rng: &mut R) -> Vec<u64> {
        let cdf: Vec<f64> = self
            .amplitudes
            .iter()
            .scan(0.0, |acc, amp| {
                *acc += amp.norm_sqr();
                Some(*acc)
            })
            .collect();
        let total = cdf.last().copied().unwrap_or(0.0);
        let last = self.amplitudes.len() - 1;

        let mut counts = vec![0u64; self.amplitudes.len()];
        for _ in 0..shots {
            let r: f64 = rng.r#gen::<f64>() * total;
            let outcome = cdf.partition_point(|&c| c <= r).min(last);
            counts[outcome] += 1;
        }
        counts
    }
}

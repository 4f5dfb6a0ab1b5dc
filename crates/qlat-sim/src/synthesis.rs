//! Pauli-string exponentiation.
//!
//! Implements the standard gate synthesis for
//!
//!   exp(-i · coeff · t · P)
//!
//! where P is a tensor product of Pauli operators, using the circuit identity:
//!
//!   exp(-i θ/2 · Z⊗Z⊗...⊗Z) = CNOT_ladder · Rz(θ) · CNOT_ladder†
//!
//! with basis rotations applied before/after to handle X and Y factors:
//!   X → H · Z · H
//!   Y → Sdg · H · Z · H · S
//!   Z → identity
//!
//! Gate count per term: 2·(k-1) CX + up to 4·k basis gates + 1 Rz,
//! where k = number of non-identity qubits.

use qlat_ir::{Circuit, QubitId};

use crate::error::{SimError, SimResult};
use crate::hamiltonian::{HamiltonianTerm, PauliOp};

/// Append the circuit for `exp(-i · coeff · t · P)` to `circuit`.
///
/// Identity strings are a global phase and append nothing.
pub fn append_exp_pauli(circuit: &mut Circuit, term: &HamiltonianTerm, t: f64) -> SimResult<()> {
    let ops = term.pauli.ops();
    let Some(&(last, _)) = ops.last() else {
        return Ok(());
    };

    let n_qubits = circuit.num_qubits() as u32;
    if last >= n_qubits {
        return Err(SimError::QubitOutOfRange {
            qubit: last,
            n_qubits,
        });
    }

    // Rz(θ) implements exp(-i θ/2 Z)
    let theta = 2.0 * term.coeff * t;
    let qubits: Vec<u32> = ops.iter().map(|(q, _)| *q).collect();

    basis_change(circuit, ops, false)?;
    cnot_ladder(circuit, &qubits, false)?;
    circuit.rz(theta, QubitId(last))?;
    cnot_ladder(circuit, &qubits, true)?;
    basis_change(circuit, ops, true)?;

    Ok(())
}

/// Rotate each factor into the Z basis (`undo = false`) or back.
///
///   X → H            (undo: H)
///   Y → Sdg · H      (undo: H · S)
fn basis_change(circuit: &mut Circuit, ops: &[(u32, PauliOp)], undo: bool) -> SimResult<()> {
    for &(q, op) in ops {
        let qid = QubitId(q);
        match (op, undo) {
            (PauliOp::X, _) => {
                circuit.h(qid)?;
            }
            (PauliOp::Y, false) => {
                circuit.sdg(qid)?.h(qid)?;
            }
            (PauliOp::Y, true) => {
                circuit.h(qid)?.s(qid)?;
            }
            (PauliOp::Z | PauliOp::I, _) => {}
        }
    }
    Ok(())
}

/// CX(q[0],q[1]), CX(q[1],q[2]), … collecting the parity on the last qubit.
/// `reverse` runs the same ladder backwards, which undoes it.
fn cnot_ladder(circuit: &mut Circuit, qubits: &[u32], reverse: bool) -> SimResult<()> {
    let mut pairs: Vec<&[u32]> = qubits.windows(2).collect();
    if reverse {
        pairs.reverse();
    }
    for pair in pairs {
        circuit.cx(QubitId(pair[0]), QubitId(pair[1]))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::PauliString;

    #[test]
    fn test_identity_term_appends_nothing() {
        let mut circuit = Circuit::with_size("t", 2);
        let term = HamiltonianTerm::new(1.0, PauliString::identity());
        append_exp_pauli(&mut circuit, &term, 1.0).unwrap();
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_gate_counts_for_xyz() {
        let mut circuit = Circuit::with_size("t", 3);
        let term = HamiltonianTerm::new(
            0.3,
            PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::Y), (2, PauliOp::Z)]),
        );
        append_exp_pauli(&mut circuit, &term, 1.0).unwrap();
        assert_eq!(circuit.count_ops("cx"), 4);
        assert_eq!(circuit.count_ops("rz"), 1);
        assert_eq!(circuit.count_ops("h"), 4);
        assert_eq!(circuit.count_ops("sdg"), 1);
        assert_eq!(circuit.count_ops("s"), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut circuit = Circuit::with_size("t", 1);
        let err = append_exp_pauli(&mut circuit, &HamiltonianTerm::z(4, 1.0), 1.0);
        assert!(matches!(err, Err(SimError::QubitOutOfRange { qubit: 4, n_qubits: 1 })));
    }
}

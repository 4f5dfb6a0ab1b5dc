//! qlat Circuit Intermediate Representation
//!
//! A deliberately small gate-level circuit type. Product-formula synthesis in
//! `qlat-sim` lowers a Hamiltonian evolution into a [`Circuit`], and the
//! statevector backend in `qlat-adapter-sim` executes it instruction by
//! instruction.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qlat_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `Rz` | 1 | Z rotation |
//! | `CX` | 2 | Controlled-NOT |
//!
//! These are exactly the gates needed to exponentiate a Pauli string: basis
//! changes, a CNOT parity ladder and one Z rotation.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use qubit::QubitId;

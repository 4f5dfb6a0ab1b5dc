//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while building models, evolution requests and circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Hamiltonian contains no terms and no register width was given.
    #[error("Hamiltonian is empty and no qubit count was given")]
    EmptyHamiltonian,

    /// A Pauli string references a qubit index that is out of range.
    #[error("Pauli string references qubit {qubit} but the system only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the target system.
        n_qubits: u32,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qlat_ir::IrError),

    /// n_steps must be ≥ 1.
    #[error("n_steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    /// n_samples must be ≥ 1 for QDrift.
    #[error("n_samples must be at least 1, got {0}")]
    InvalidSamples(usize),

    /// Only first- and second-order product formulas exist.
    #[error("Trotter order must be 1 or 2, got {0}")]
    InvalidOrder(u8),

    /// Evolution time must be finite and positive.
    #[error("evolution time must be finite and positive, got {0}")]
    InvalidTime(f64),

    /// The time grid is malformed or does not span `[0, T]`.
    #[error("invalid time grid: {0}")]
    InvalidTimeGrid(String),

    /// A time-dependent Hamiltonian was submitted without a time grid.
    #[error("time-dependent Hamiltonian requires a time grid")]
    MissingTimeGrid,

    /// Accumulated operator has a non-negligible imaginary coefficient.
    #[error("operator is not Hermitian: term {pauli} has imaginary coefficient {imag:e}")]
    NonHermitian {
        /// Display form of the offending Pauli string.
        pauli: String,
        /// Its imaginary part.
        imag: f64,
    },
}

/// Result type for sim crate operations.
pub type SimResult<T> = Result<T, SimError>;

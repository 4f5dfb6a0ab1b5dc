//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// The evolution request itself is malformed.
    #[error("Invalid evolution request: {0}")]
    InvalidRequest(#[from] qlat_sim::SimError),

    /// Request exceeds backend capabilities.
    #[error("Request needs {n_qubits} qubits but backend supports at most {max_qubits}")]
    RequestTooLarge {
        /// Qubits the request measures.
        n_qubits: u32,
        /// Backend limit.
        max_qubits: u32,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// An outcome was looked up that the result does not contain.
    #[error("Outcome '{key}' not present in a distribution over {n_qubits} qubits")]
    MissingOutcome {
        /// The requested bitstring.
        key: String,
        /// Width of the distribution's bitstrings.
        n_qubits: u32,
    },

    /// Generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;

//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines how an evolution request is run:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ run()
//!    (&ref)              (check)       (blocking)
//! ```
//!
//! Runs are synchronous. A backend either returns the full probability
//! distribution or an error; there is no job queue and no retry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use qlat_sim::EvolutionRequest;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::result::EvolutionResult;

/// Configuration for a backend instance.
///
/// Backend-specific options live in `extra` and are read by
/// [`BackendFactory::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Parse a configuration from JSON, e.g. `{"name": "sim", "shots": 30}`.
    pub fn from_json(source: &str) -> HalResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an unsigned integer option.
    pub fn get_u64(&self, key: &str) -> HalResult<Option<u64>> {
        match self.extra.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(v) => v.as_u64().map(Some).ok_or_else(|| {
                HalError::Configuration(format!("'{key}' must be a non-negative integer, got {v}"))
            }),
        }
    }

    /// Read a string option.
    pub fn get_str(&self, key: &str) -> HalResult<Option<&str>> {
        match self.extra.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| {
                HalError::Configuration(format!("'{key}' must be a string, got {v}"))
            }),
        }
    }
}

/// Result of checking a request against backend constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The request can be run as-is.
    Valid,
    /// The request cannot run on this backend.
    Invalid {
        /// Reasons the request is invalid.
        reasons: Vec<String>,
    },
}

impl ValidationResult {
    /// Check if the request is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Trait for evolution backends.
///
/// # Contract
///
/// - `capabilities()` is infallible; implementations cache it at
///   construction time.
/// - `validate()` reports problems as [`ValidationResult::Invalid`] and
///   reserves `Err` for failures of the check itself.
/// - `run()` evolves `|0…0⟩` and returns a distribution over every
///   measured qubit whose probabilities sum to 1.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Validate a request against backend constraints.
    fn validate(&self, request: &EvolutionRequest) -> HalResult<ValidationResult> {
        let caps = self.capabilities();
        let mut reasons = Vec::new();
        if let Err(e) = request.validate() {
            reasons.push(e.to_string());
        }
        let n = request.n_qubits();
        if n > caps.max_qubits {
            reasons.push(format!(
                "request needs {n} qubits, backend supports {}",
                caps.max_qubits
            ));
        }
        if request.hamiltonian().is_time_dependent() && !caps.time_dependent {
            reasons.push("time-dependent Hamiltonians are not supported".into());
        }
        if reasons.is_empty() {
            return Ok(ValidationResult::Valid);
        }
        debug!(backend = self.name(), ?reasons, "request rejected");
        Ok(ValidationResult::Invalid { reasons })
    }

    /// Run the evolution and return the measured distribution.
    fn run(&self, request: &EvolutionRequest) -> HalResult<EvolutionResult>;
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

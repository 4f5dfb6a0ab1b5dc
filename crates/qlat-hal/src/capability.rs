//! Backend capability introspection.

use serde::{Deserialize, Serialize};

/// What a backend can run.
///
/// Runners check a request against these before submitting it; the
/// simulator additionally enforces them in `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Widest request the backend accepts.
    pub max_qubits: u32,
    /// Maximum number of shots per run when sampling.
    pub max_shots: u32,
    /// Whether time-dependent (gridded) Hamiltonians are accepted.
    pub time_dependent: bool,
    /// Whether this is a classical simulator (`true`) vs real hardware.
    pub is_simulator: bool,
    /// Additional capability flags: `"statevector"`, `"exact"`, `"trotter"`,
    /// `"qdrift"`, `"sampling"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a statevector simulator.
    pub fn simulator(max_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            max_qubits,
            max_shots: 1_000_000,
            time_dependent: true,
            is_simulator: true,
            features: ["statevector", "exact", "trotter", "qdrift", "sampling"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Set the backend name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// True if `feature` is advertised.
    pub fn supports(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(20).with_name("statevector");
        assert_eq!(caps.max_qubits, 20);
        assert_eq!(caps.name, "statevector");
        assert!(caps.is_simulator);
        assert!(caps.supports("exact"));
        assert!(!caps.supports("noise"));
    }

    #[test]
    fn test_capabilities_roundtrip_json() {
        let caps = Capabilities::simulator(8);
        let json = serde_json::to_string(&caps).unwrap();
        let back: Capabilities = serde_json::from_str(&json).unwrap();
        assert_eq!(back, caps);
    }
}

//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard gates with known semantics.
///
/// Rotation angles are concrete radians; synthesis always knows the
/// evolution time when it emits a gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Basis changes into and out of the Z basis
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,

    /// Rotation around Z axis: `Rz(θ) = exp(-i θ/2 Z)`.
    Rz(f64),

    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX => 2,
            _ => 1,
        }
    }

    /// The rotation angle, for parameterised gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Rz(theta) => Some(*theta),
            _ => None,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({theta:.6})", self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}

//! Lowering a whole [`EvolutionRequest`] to a circuit.

use qlat_ir::Circuit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SimResult;
use crate::evolution::EvolutionRequest;
use crate::qdrift::QDriftEvolution;
use crate::trotter::{TrotterEvolution, TrotterOrder};

/// Product formula used per segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SynthesisMethod {
    /// `steps` Trotter slices per segment.
    Trotter { order: TrotterOrder, steps: usize },
    /// `samples` QDrift draws per segment; one RNG is shared across segments.
    QDrift { samples: usize, seed: Option<u64> },
}

/// Concatenate the per-segment circuits of `request`.
///
/// Segments whose Hamiltonian is empty (all couplings vanished at the
/// sample time) contribute nothing.
#[instrument(skip(request), fields(n_qubits = request.n_qubits()))]
pub fn compile_request(request: &EvolutionRequest, method: &SynthesisMethod) -> SimResult<Circuit> {
    let segments = request.segments()?;
    let n_qubits = request.n_qubits();
    let mut circuit = Circuit::with_size("evolution", n_qubits);

    let mut rng = match method {
        SynthesisMethod::QDrift { seed: Some(seed), .. } => StdRng::seed_from_u64(*seed),
        _ => StdRng::from_entropy(),
    };

    for segment in &segments {
        let h = segment.hamiltonian.simplified();
        if h.is_empty() {
            continue;
        }
        match *method {
            SynthesisMethod::Trotter { order, steps } => {
                TrotterEvolution::new(h, segment.duration, steps).append_to(&mut circuit, order)?;
            }
            SynthesisMethod::QDrift { samples, .. } => {
                QDriftEvolution::new(h, segment.duration, samples).append_to(&mut circuit, &mut rng)?;
            }
        }
    }

    debug!(
        segments = segments.len(),
        ops = circuit.num_ops(),
        depth = circuit.depth(),
        "compiled evolution request"
    );
    Ok(circuit)
}

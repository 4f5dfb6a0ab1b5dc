//! qlat Local Statevector Simulator
//!
//! A [`qlat_hal::Backend`] that runs evolution requests on a full
//! statevector. Results are exact up to the chosen method's error and limited
//! to ~20 qubits by memory.
//!
//! # Methods
//!
//! - **Exact**: Taylor-series propagation per piecewise-constant segment
//!   (accuracy ~1e-12)
//! - **Trotter**: first- or second-order product-formula circuits
//! - **QDrift**: randomized product formula, reproducible with a seed
//!
//! Any method can report sampled frequencies instead of exact probabilities
//! by configuring `shots`.
//!
//! # Memory
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 8 | 4 KB |
//! | 12 | 64 KB |
//! | 16 | 1 MB |
//! | 20 | 16 MB |
//! | 30 | 16 GB |
//!
//! The default limit is 20 qubits; a backend cannot be configured past
//! [`MAX_SUPPORTED_QUBITS`].
//!
//! # Example
//!
//! ```rust
//! use qlat_adapter_sim::SimulatorBackend;
//! use qlat_hal::Backend;
//! use qlat_lattice::Lattice;
//! use qlat_sim::{EvolutionRequest, IsingModel, LatticeModel};
//!
//! // H = -4·(X₀ + X₁) + 3·Z₀Z₁ for T = 10
//! let lattice = Lattice::chain(2);
//! let model = IsingModel::new(3.0, -4.0);
//! let request = EvolutionRequest::new(model.hamiltonian(&lattice).unwrap(), 10.0)
//!     .with_n_qubits(model.n_qubits(&lattice));
//!
//! let result = SimulatorBackend::new().run(&request).unwrap();
//! assert_eq!(result.distribution.len(), 4);
//! println!("P(00) = {}", result.ground_state_probability().unwrap());
//! ```

mod propagator;
mod simulator;
mod statevector;

pub use propagator::{MAX_STEP_NORM, SparseHamiltonian, TAYLOR_CUTOFF, evolve_exact};
pub use simulator::{
    DEFAULT_MAX_QUBITS, DEFAULT_QDRIFT_SAMPLES, DEFAULT_TROTTER_STEPS, Method, SimulatorBackend,
};
pub use statevector::{MAX_SUPPORTED_QUBITS, Statevector};

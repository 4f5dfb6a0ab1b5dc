//! qlat Hardware Abstraction Layer
//!
//! The contract between evolution runners and the backends that execute
//! them.
//!
//! - [`Backend`]: synchronous `validate` / `run` over a
//!   [`qlat_sim::EvolutionRequest`]
//! - [`Capabilities`]: what a backend accepts
//! - [`EvolutionResult`] / [`Distribution`]: outcome bitstring → probability
//!
//! # Implementing a Custom Backend
//!
//! ```rust
//! use qlat_hal::{Backend, Capabilities, Distribution, EvolutionResult, HalResult};
//! use qlat_sim::EvolutionRequest;
//!
//! /// Reports |0…0⟩ with certainty, whatever the Hamiltonian.
//! struct FrozenBackend {
//!     capabilities: Capabilities,
//! }
//!
//! impl Backend for FrozenBackend {
//!     fn name(&self) -> &str { "frozen" }
//!
//!     fn capabilities(&self) -> &Capabilities { &self.capabilities }
//!
//!     fn run(&self, request: &EvolutionRequest) -> HalResult<EvolutionResult> {
//!         request.validate()?;
//!         let n = request.n_qubits();
//!         let mut probs = vec![0.0; 1 << n];
//!         probs[0] = 1.0;
//!         Ok(EvolutionResult::new(Distribution::from_probabilities(&probs, n), n, self.name()))
//!     }
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, ValidationResult};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use result::{Distribution, EvolutionResult};

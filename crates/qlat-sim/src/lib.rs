//! `qlat-sim`: lattice model Hamiltonians and their time evolution.
//!
//! - **Operator algebra**: [`PauliString`], real [`Hamiltonian`]s, complex
//!   [`OperatorSum`]s and Jordan–Wigner [`FermionMode`]s.
//! - **Models**: [`IsingModel`] and [`HubbardModel`] on a
//!   [`qlat_lattice::Lattice`], with constant or [`LinearRamp`]ed couplings.
//! - **Evolution**: [`EvolutionRequest`] discretizes time-dependent
//!   Hamiltonians into piecewise-constant segments.
//! - **Synthesis**: Trotter-Suzuki and QDrift product formulas lowering a
//!   request to a [`qlat_ir::Circuit`].
//!
//! # Quick start
//!
//! ```rust
//! use qlat_lattice::Lattice;
//! use qlat_sim::{EvolutionRequest, IsingModel, LatticeModel};
//!
//! // Two-site model: H = -4·(X₀ + X₁) + 3·Z₀Z₁
//! let lattice = Lattice::chain(2);
//! let model = IsingModel::new(3.0, -4.0);
//! let h = model.hamiltonian(&lattice).unwrap();
//!
//! let request = EvolutionRequest::new(h, 10.0).with_n_qubits(model.n_qubits(&lattice));
//! assert_eq!(request.segments().unwrap().len(), 1);
//! ```

pub mod coefficient;
pub mod compile;
pub mod error;
pub mod evolution;
pub mod fermion;
pub mod hamiltonian;
pub mod models;
pub mod operator;
pub mod qdrift;
pub mod schedule;
pub mod synthesis;
pub mod trotter;

pub use coefficient::{Coefficient, LinearRamp};
pub use compile::{SynthesisMethod, compile_request};
pub use error::{SimError, SimResult};
pub use evolution::{EvolutionRequest, SampleRule, Segment, TimeGrid};
pub use fermion::FermionMode;
pub use hamiltonian::{Hamiltonian, HamiltonianBuilder, HamiltonianTerm, PauliOp, PauliString};
pub use models::{HubbardModel, IsingModel, LatticeModel, OnSitePlacement};
pub use operator::OperatorSum;
pub use qdrift::QDriftEvolution;
pub use schedule::{DrivenHamiltonian, ModelHamiltonian, TimeDependentHamiltonian};
pub use trotter::{TrotterEvolution, TrotterOrder};

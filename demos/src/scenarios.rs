//! The three demo systems, built from their configs.

use anyhow::{Context, Result};
use serde::Serialize;

use qlat_lattice::Lattice;
use qlat_sim::{EvolutionRequest, HubbardModel, IsingModel, LatticeModel, LinearRamp};

use crate::config::{HubbardChainConfig, IsingConfig, TwoSiteConfig};

/// A lattice and the evolution to run on it.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short identifier, e.g. `"ising"`.
    pub name: &'static str,
    /// Human-readable Hamiltonian.
    pub formula: String,
    pub lattice: Lattice,
    pub request: EvolutionRequest,
}

/// Shape of a scenario, for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub formula: String,
    pub sites: u32,
    pub edges: usize,
    pub n_qubits: u32,
    pub total_time: f64,
    pub time_dependent: bool,
    pub segments: usize,
}

impl Scenario {
    pub fn summary(&self) -> Result<ScenarioSummary> {
        Ok(ScenarioSummary {
            name: self.name.to_string(),
            formula: self.formula.clone(),
            sites: self.lattice.num_sites(),
            edges: self.lattice.num_edges(),
            n_qubits: self.request.n_qubits(),
            total_time: self.request.total_time(),
            time_dependent: self.request.hamiltonian().is_time_dependent(),
            segments: self.request.segments()?.len(),
        })
    }
}

/// Transverse-field Ising model on a grid.
pub fn ising(config: &IsingConfig) -> Result<Scenario> {
    let lattice = Lattice::grid(&config.dims).context("Invalid Ising grid")?;
    let model = IsingModel::new(-config.coupling, -config.field);
    let request = EvolutionRequest::new(model.hamiltonian(&lattice)?, config.total_time)
        .with_n_qubits(model.n_qubits(&lattice));
    Ok(Scenario {
        name: "ising",
        formula: format!(
            "H = Σ −{J} ZᵢZⱼ + Σ −{h} Xᵢ on a {dims:?} grid",
            J = config.coupling,
            h = config.field,
            dims = config.dims
        ),
        lattice,
        request,
    })
}

/// Hubbard chain with a ramped on-site interaction.
pub fn hubbard_chain(config: &HubbardChainConfig) -> Result<Scenario> {
    let lattice = Lattice::chain(config.sites);
    let ramp = LinearRamp::new(
        config.interaction_start,
        config.interaction_end,
        config.total_time,
    )
    .context("Invalid interaction ramp")?;
    let model = HubbardModel::new(-config.hopping, ramp).with_on_site(config.on_site);
    let request = EvolutionRequest::new(model.hamiltonian(&lattice)?, config.total_time)
        .with_time_points(config.time_points)
        .context("Invalid time grid")?
        .with_sample_rule(config.sample_rule)
        .with_n_qubits(model.n_qubits(&lattice));
    Ok(Scenario {
        name: "hubbard-chain",
        formula: format!(
            "H(t) = −{z} H_hop + U(t) H_int, U: {u0} → {u1} over {n} atoms",
            z = config.hopping,
            u0 = config.interaction_start,
            u1 = config.interaction_end,
            n = config.sites
        ),
        lattice,
        request,
    })
}

/// Two coupled spins.
pub fn two_site(config: &TwoSiteConfig) -> Result<Scenario> {
    let lattice = Lattice::chain(2);
    let model = IsingModel::new(config.interaction, -config.coupling);
    let request = EvolutionRequest::new(model.hamiltonian(&lattice)?, config.total_time)
        .with_n_qubits(model.n_qubits(&lattice));
    Ok(Scenario {
        name: "two-site",
        formula: format!(
            "H = −{J}(X₁ + X₂) + {U} Z₁Z₂",
            J = config.coupling,
            U = config.interaction
        ),
        lattice,
        request,
    })
}

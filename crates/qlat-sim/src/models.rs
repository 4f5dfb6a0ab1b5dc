//! Lattice models: Ising and Fermi-Hubbard.
//!
//! A [`LatticeModel`] turns a [`Lattice`] into a [`ModelHamiltonian`]. When
//! every coupling is a constant the result is static; if any coupling is a
//! ramp it is a [`DrivenHamiltonian`] with one component per coupling.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use qlat_lattice::Lattice;

use crate::coefficient::Coefficient;
use crate::error::SimResult;
use crate::fermion::{FermionMode, density_density, hopping};
use crate::hamiltonian::{Hamiltonian, HamiltonianBuilder, HamiltonianTerm};
use crate::operator::OperatorSum;
use crate::schedule::{DrivenHamiltonian, ModelHamiltonian};

/// A physical model defined on a lattice.
pub trait LatticeModel {
    /// Short model name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Number of qubits the model needs for `lattice`.
    fn n_qubits(&self, lattice: &Lattice) -> u32;

    /// Build the Hamiltonian for `lattice`.
    fn hamiltonian(&self, lattice: &Lattice) -> SimResult<ModelHamiltonian>;
}

/// Combine `(coupling, operator)` parts into a static or driven Hamiltonian.
fn assemble(parts: Vec<(Coefficient, Hamiltonian)>) -> SimResult<ModelHamiltonian> {
    if parts.iter().all(|(c, _)| !c.is_time_dependent()) {
        let mut builder = HamiltonianBuilder::new();
        for (coeff, h) in &parts {
            builder.add_hamiltonian(coeff.evaluate(0.0), h);
        }
        return Ok(ModelHamiltonian::Static(builder.build()?));
    }
    let driven = parts
        .into_iter()
        .fold(DrivenHamiltonian::new(), |acc, (c, h)| acc.with_component(c, h));
    Ok(ModelHamiltonian::driven(driven))
}

/// Transverse-field Ising model, one qubit per site:
///
///   H = Σ_{(i,j)} coupling·Z_i Z_j + Σ_i field·X_i
///
/// Signs are taken as given; the ferromagnetic model with `J, h > 0` is
/// `coupling = -J`, `field = -h`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsingModel {
    pub coupling: Coefficient,
    pub field: Coefficient,
}

impl IsingModel {
    pub fn new(coupling: impl Into<Coefficient>, field: impl Into<Coefficient>) -> Self {
        Self {
            coupling: coupling.into(),
            field: field.into(),
        }
    }

    /// `Σ_{(i,j)} Z_i Z_j` over the lattice edges.
    pub fn coupling_operator(lattice: &Lattice) -> Hamiltonian {
        lattice
            .edges()
            .map(|(i, j)| HamiltonianTerm::zz(i, j, 1.0))
            .collect()
    }

    /// `Σ_i X_i` over the lattice sites.
    pub fn field_operator(lattice: &Lattice) -> Hamiltonian {
        (0..lattice.num_sites())
            .map(|i| HamiltonianTerm::x(i, 1.0))
            .collect()
    }
}

impl LatticeModel for IsingModel {
    fn name(&self) -> &'static str {
        "ising"
    }

    fn n_qubits(&self, lattice: &Lattice) -> u32 {
        lattice.num_sites()
    }

    fn hamiltonian(&self, lattice: &Lattice) -> SimResult<ModelHamiltonian> {
        debug!(
            sites = lattice.num_sites(),
            edges = lattice.num_edges(),
            "building Ising Hamiltonian"
        );
        assemble(vec![
            (self.coupling, Self::coupling_operator(lattice)),
            (self.field, Self::field_operator(lattice)),
        ])
    }
}

/// Where the Hubbard on-site interaction is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnSitePlacement {
    /// `n_i↑ n_i↓` once for every site.
    #[default]
    EverySite,
    /// `n_i↑ n_i↓` for the first endpoint `i` of every edge `(i, j)`.
    ///
    /// Sites that are never a first endpoint (e.g. the last site of a chain)
    /// get no interaction; sites that are the first endpoint of several
    /// edges get it several times.
    EdgeSource,
}

/// Fermi-Hubbard model with two spin modes per site:
///
///   H = hopping·Σ_{(i,j),σ} (c†_iσ c_jσ + c†_jσ c_iσ) + interaction·Σ_i n_i↑ n_i↓
///
/// Site `i` owns modes (and qubits) `2i` (spin-up) and `2i + 1` (spin-down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HubbardModel {
    pub hopping: Coefficient,
    pub interaction: Coefficient,
    pub on_site: OnSitePlacement,
}

impl HubbardModel {
    pub fn new(hopping: impl Into<Coefficient>, interaction: impl Into<Coefficient>) -> Self {
        Self {
            hopping: hopping.into(),
            interaction: interaction.into(),
            on_site: OnSitePlacement::default(),
        }
    }

    #[must_use]
    pub fn with_on_site(mut self, placement: OnSitePlacement) -> Self {
        self.on_site = placement;
        self
    }

    /// Spin-up mode of `site`.
    pub fn up(site: u32) -> FermionMode {
        FermionMode(2 * site)
    }

    /// Spin-down mode of `site`.
    pub fn down(site: u32) -> FermionMode {
        FermionMode(2 * site + 1)
    }

    /// `Σ_{(i,j),σ} (c†_iσ c_jσ + h.c.)`.
    pub fn hopping_operator(lattice: &Lattice) -> SimResult<Hamiltonian> {
        let one = Complex64::new(1.0, 0.0);
        let mut op = OperatorSum::zero();
        for (i, j) in lattice.edges() {
            op.add_scaled(one, &hopping(Self::up(i), Self::up(j)));
            op.add_scaled(one, &hopping(Self::down(i), Self::down(j)));
        }
        HamiltonianBuilder::new().add_operator(1.0, &op).build()
    }

    /// `Σ_i n_i↑ n_i↓` with sites chosen by `placement`.
    pub fn interaction_operator(
        lattice: &Lattice,
        placement: OnSitePlacement,
    ) -> SimResult<Hamiltonian> {
        let sites: Vec<u32> = match placement {
            OnSitePlacement::EverySite => (0..lattice.num_sites()).collect(),
            OnSitePlacement::EdgeSource => lattice.edges().map(|(i, _)| i).collect(),
        };
        let one = Complex64::new(1.0, 0.0);
        let mut op = OperatorSum::zero();
        for i in sites {
            op.add_scaled(one, &density_density(Self::up(i), Self::down(i)));
        }
        HamiltonianBuilder::new().add_operator(1.0, &op).build()
    }
}

impl LatticeModel for HubbardModel {
    fn name(&self) -> &'static str {
        "hubbard"
    }

    fn n_qubits(&self, lattice: &Lattice) -> u32 {
        2 * lattice.num_sites()
    }

    fn hamiltonian(&self, lattice: &Lattice) -> SimResult<ModelHamiltonian> {
        debug!(
            sites = lattice.num_sites(),
            edges = lattice.num_edges(),
            on_site = ?self.on_site,
            "building Hubbard Hamiltonian"
        );
        assemble(vec![
            (self.hopping, Self::hopping_operator(lattice)?),
            (
                self.interaction,
                Self::interaction_operator(lattice, self.on_site)?,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::PauliString;

    #[test]
    fn test_ising_two_site_terms() {
        let model = IsingModel::new(3.0, -4.0);
        let h = model.hamiltonian(&Lattice::chain(2)).unwrap();
        let h = h.as_static().unwrap();
        assert_eq!(
            h.terms(),
            &[
                HamiltonianTerm::zz(0, 1, 3.0),
                HamiltonianTerm::x(0, -4.0),
                HamiltonianTerm::x(1, -4.0),
            ]
        );
    }

    #[test]
    fn test_hubbard_interaction_expansion() {
        // n↑n↓ = (I - Z0 - Z1 + Z0 Z1) / 4
        let h = HubbardModel::interaction_operator(&Lattice::chain(1), OnSitePlacement::EverySite)
            .unwrap();
        assert_eq!(h.n_terms(), 4);
        let zz = h
            .terms()
            .iter()
            .find(|t| t.pauli == PauliString::zz([0, 1]))
            .unwrap();
        assert!((zz.coeff - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_edge_source_skips_chain_end() {
        let chain = Lattice::chain(2);
        let h = HubbardModel::interaction_operator(&chain, OnSitePlacement::EdgeSource).unwrap();
        // Only site 0 (qubits 0, 1) carries the interaction.
        assert_eq!(h.min_qubits(), 2);
        let every = HubbardModel::interaction_operator(&chain, OnSitePlacement::EverySite).unwrap();
        assert_eq!(every.min_qubits(), 4);
    }

    #[test]
    fn test_ramped_hubbard_is_driven() {
        let ramp = crate::coefficient::LinearRamp::new(-5.0, 5.0, 4.0).unwrap();
        let model = HubbardModel::new(-1.0, Coefficient::Ramp(ramp));
        let h = model.hamiltonian(&Lattice::chain(2)).unwrap();
        assert!(h.is_time_dependent());
        assert_eq!(model.n_qubits(&Lattice::chain(2)), 4);
    }
}

//! Lattice model construction and evolution requests.

use qlat_lattice::Lattice;
use qlat_sim::{
    Coefficient, EvolutionRequest, HamiltonianTerm, HubbardModel, IsingModel, LatticeModel,
    LinearRamp, OnSitePlacement, PauliOp, PauliString, SimError, TimeGrid,
};

#[test]
fn ramp_matches_script_constants() {
    let ramp = LinearRamp::new(-5.0, 5.0, 4.0).unwrap();
    assert_eq!(ramp.evaluate(0.0), -5.0);
    assert_eq!(ramp.evaluate(4.0), 5.0);
    assert_eq!(ramp.evaluate(2.0), 0.0);
}

#[test]
fn ising_cube_has_one_coupling_per_edge() {
    let cube = Lattice::grid(&[2, 2, 2]).unwrap();
    let model = IsingModel::new(-1.0, -1.0);
    assert_eq!(model.n_qubits(&cube), 8);

    let h = model.hamiltonian(&cube).unwrap();
    let h = h.as_static().unwrap();
    assert_eq!(h.n_terms(), 12 + 8);
    let zz = h.terms().iter().filter(|t| t.pauli.weight() == 2).count();
    assert_eq!(zz, 12);
    assert!(h.terms().iter().all(|t| t.coeff == -1.0));
}

#[test]
fn ising_with_ramped_field_is_driven() {
    let ramp = LinearRamp::new(0.0, -2.0, 1.0).unwrap();
    let model = IsingModel::new(-1.0, Coefficient::Ramp(ramp));
    let h = model.hamiltonian(&Lattice::chain(3)).unwrap();
    assert!(h.is_time_dependent());
    let at_end = h.evaluate(1.0);
    let x0 = at_end
        .terms()
        .iter()
        .find(|t| t.pauli == PauliString::single(0, PauliOp::X))
        .unwrap();
    assert_eq!(x0.coeff, -2.0);
}

#[test]
fn two_site_model_terms() {
    // H = -J(X0 + X1) + U·Z0 Z1 with J = 4, U = 3
    let model = IsingModel::new(3.0, -4.0);
    let h = model.hamiltonian(&Lattice::chain(2)).unwrap();
    let h = h.as_static().unwrap().clone();
    assert!(h.terms().contains(&HamiltonianTerm::zz(0, 1, 3.0)));
    assert!(h.terms().contains(&HamiltonianTerm::x(0, -4.0)));
    assert!(h.terms().contains(&HamiltonianTerm::x(1, -4.0)));
}

#[test]
fn hubbard_chain_hopping_terms() {
    // Two sites: spin-up hops between qubits 0 and 2 (Z1 in between),
    // spin-down between 1 and 3 (Z2 in between).
    let h = HubbardModel::hopping_operator(&Lattice::chain(2)).unwrap();
    assert_eq!(h.n_terms(), 4);
    let up_xx = PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::Z), (2, PauliOp::X)]);
    let term = h.terms().iter().find(|t| t.pauli == up_xx).unwrap();
    assert!((term.coeff - 0.5).abs() < 1e-12);
}

#[test]
fn hubbard_self_loop_flows_through() {
    let lattice = Lattice::from_edges([(0, 0)]).unwrap();
    let model = HubbardModel::new(1.0, 0.0);
    // Self-hopping becomes 2·n on each spin mode; no error is raised.
    let h = model.hamiltonian(&lattice).unwrap();
    assert!(!h.as_static().unwrap().is_empty());
}

#[test]
fn hubbard_edge_source_counts_repeated_sources() {
    // Star: site 0 is the first endpoint of two edges.
    let star = Lattice::from_edges([(0, 1), (0, 2)]).unwrap();
    let h = HubbardModel::interaction_operator(&star, OnSitePlacement::EdgeSource).unwrap();
    let zz = h
        .terms()
        .iter()
        .find(|t| t.pauli == PauliString::zz([0, 1]))
        .unwrap();
    assert!((zz.coeff - 0.5).abs() < 1e-12);
    assert_eq!(h.min_qubits(), 2);
}

#[test]
fn hubbard_chain_request_segments() {
    let lattice = Lattice::chain(2);
    let ramp = LinearRamp::new(-5.0, 5.0, 4.0).unwrap();
    let model = HubbardModel::new(-1.0, Coefficient::Ramp(ramp));
    let h = model.hamiltonian(&lattice).unwrap();

    let request = EvolutionRequest::new(h, 4.0)
        .with_time_grid(TimeGrid::uniform(4.0, 30).unwrap())
        .with_n_qubits(model.n_qubits(&lattice));
    assert_eq!(request.n_qubits(), 4);

    let segments = request.segments().unwrap();
    assert_eq!(segments.len(), 29);
    let total: f64 = segments.iter().map(|s| s.duration).sum();
    assert!((total - 4.0).abs() < 1e-12);
}

#[test]
fn time_dependent_request_without_grid_fails() {
    let ramp = LinearRamp::new(-5.0, 5.0, 4.0).unwrap();
    let model = HubbardModel::new(-1.0, Coefficient::Ramp(ramp));
    let h = model.hamiltonian(&Lattice::chain(2)).unwrap();
    let request = EvolutionRequest::new(h, 4.0);
    assert!(matches!(request.segments(), Err(SimError::MissingTimeGrid)));
}

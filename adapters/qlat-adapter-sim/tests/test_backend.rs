//! End-to-end runs of lattice models on the statevector backend.

use proptest::prelude::*;

use qlat_adapter_sim::{Method, SimulatorBackend, SparseHamiltonian, Statevector, evolve_exact};
use qlat_hal::{Backend, BackendConfig, BackendFactory, EvolutionResult, HalError};
use qlat_lattice::Lattice;
use qlat_sim::{
    EvolutionRequest, Hamiltonian, HamiltonianTerm, HubbardModel, IsingModel, LatticeModel,
    LinearRamp, TrotterOrder,
};

fn two_site_request(total_time: f64) -> EvolutionRequest {
    let lattice = Lattice::chain(2);
    let model = IsingModel::new(3.0, -4.0);
    EvolutionRequest::new(model.hamiltonian(&lattice).unwrap(), total_time)
        .with_n_qubits(model.n_qubits(&lattice))
}

fn max_deviation(a: &EvolutionResult, b: &EvolutionResult) -> f64 {
    a.distribution
        .iter()
        .map(|(k, p)| (p - b.probability(k).unwrap()).abs())
        .fold(0.0, f64::max)
}

#[test]
fn rabi_oscillation_matches_analytic() {
    let c = 1.3;
    let backend = SimulatorBackend::new();
    for t in [0.2, 0.9, 1.7, 4.0] {
        let request = EvolutionRequest::new(
            Hamiltonian::from_terms(vec![HamiltonianTerm::x(0, c)]),
            t,
        );
        let result = backend.run(&request).unwrap();
        let expected = (c * t).cos().powi(2);
        let p0 = result.ground_state_probability().unwrap();
        assert!((p0 - expected).abs() < 1e-12, "t = {t}: {p0} vs {expected}");
    }
}

#[test]
fn ising_cube_distributions_are_normalized() {
    let cube = Lattice::grid(&[2, 2, 2]).unwrap();
    let model = IsingModel::new(-1.0, -1.0);
    let request = EvolutionRequest::new(model.hamiltonian(&cube).unwrap(), 1.0)
        .with_n_qubits(model.n_qubits(&cube));

    let backends = [
        SimulatorBackend::new(),
        SimulatorBackend::new().with_method(Method::Trotter {
            order: TrotterOrder::Second,
            steps: 10,
        }),
        SimulatorBackend::new()
            .with_method(Method::QDrift { samples: 200 })
            .with_seed(1),
        SimulatorBackend::new().with_shots(500).with_seed(2),
    ];
    for backend in &backends {
        let result = backend.run(&request).unwrap();
        assert_eq!(result.n_qubits, 8);
        assert_eq!(result.distribution.len(), 256);
        assert!(result.is_normalized(), "{:?}", backend.method());
        assert!(result.ground_state_probability().is_ok());
    }
}

#[test]
fn two_site_seeded_runs_are_identical() {
    let request = two_site_request(10.0);
    let backend = || {
        SimulatorBackend::new()
            .with_method(Method::QDrift { samples: 300 })
            .with_shots(1000)
            .with_seed(42)
    };
    let first = backend().run(&request).unwrap();
    let second = backend().run(&request).unwrap();
    assert_eq!(first.distribution, second.distribution);
    assert_eq!(first.shots, Some(1000));
}

#[test]
fn two_site_reports_every_outcome() {
    let result = SimulatorBackend::new().run(&two_site_request(10.0)).unwrap();
    let keys: Vec<&str> = result.distribution.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["00", "01", "10", "11"]);
    assert_eq!(result.ground_state_key(), "00");
    assert!(result.is_normalized());
}

#[test]
fn trotter_converges_to_exact() {
    let request = two_site_request(0.5);
    let exact = SimulatorBackend::new().run(&request).unwrap();
    let trotter = |steps| {
        SimulatorBackend::new()
            .with_method(Method::Trotter {
                order: TrotterOrder::Second,
                steps,
            })
            .run(&request)
            .unwrap()
    };

    let coarse = max_deviation(&trotter(4), &exact);
    let fine = max_deviation(&trotter(128), &exact);
    assert!(fine < coarse, "fine {fine} coarse {coarse}");
    assert!(fine < 5e-3, "fine {fine}");
}

#[test]
fn hubbard_vacuum_is_stationary() {
    // Hopping and on-site terms conserve particle number, so the empty
    // lattice |0000⟩ only picks up a phase.
    let lattice = Lattice::chain(2);
    let ramp = LinearRamp::new(-5.0, 5.0, 4.0).unwrap();
    let model = HubbardModel::new(-1.0, ramp);
    let request = EvolutionRequest::new(model.hamiltonian(&lattice).unwrap(), 4.0)
        .with_time_points(30)
        .unwrap()
        .with_n_qubits(model.n_qubits(&lattice));

    let result = SimulatorBackend::new().run(&request).unwrap();
    assert_eq!(result.n_qubits, 4);
    assert_eq!(result.distribution.len(), 16);
    assert!((result.ground_state_probability().unwrap() - 1.0).abs() < 1e-10);
}

#[test]
fn oversized_request_is_rejected() {
    let config = BackendConfig::new("tiny").with_extra("max_qubits", serde_json::json!(4));
    let backend = SimulatorBackend::from_config(config).unwrap();

    let cube = Lattice::grid(&[2, 2, 2]).unwrap();
    let model = IsingModel::new(-1.0, -1.0);
    let request = EvolutionRequest::new(model.hamiltonian(&cube).unwrap(), 1.0);

    assert!(!backend.validate(&request).unwrap().is_valid());
    assert!(matches!(
        backend.run(&request),
        Err(HalError::RequestTooLarge {
            n_qubits: 8,
            max_qubits: 4
        })
    ));
}

proptest! {
    #[test]
    fn exact_evolution_preserves_norm(
        a in -3.0f64..3.0,
        b in -3.0f64..3.0,
        c in -3.0f64..3.0,
        t in 0.01f64..5.0,
    ) {
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::x(0, a),
            HamiltonianTerm::y(1, b),
            HamiltonianTerm::zz(0, 1, c),
        ]);
        let sparse = SparseHamiltonian::new(&h, 2).unwrap();
        let mut sv = Statevector::new(2).unwrap();
        evolve_exact(&mut sv, &sparse, t);
        prop_assert!((sv.norm_sqr() - 1.0).abs() < 1e-10);
    }
}

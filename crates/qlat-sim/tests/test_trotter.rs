//! Tests for Trotter product-formula synthesis.

use qlat_sim::SimError;
use qlat_sim::hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
use qlat_sim::trotter::{TrotterEvolution, TrotterOrder};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn empty_hamiltonian_returns_error() {
    let evol = TrotterEvolution::new(Hamiltonian::from_terms(vec![]), 1.0, 1);
    assert!(matches!(evol.first_order(), Err(SimError::EmptyHamiltonian)));
    assert!(matches!(evol.second_order(), Err(SimError::EmptyHamiltonian)));
}

#[test]
fn zero_steps_returns_error() {
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
    let evol = TrotterEvolution::new(h, 1.0, 0);
    assert!(matches!(evol.first_order(), Err(SimError::InvalidSteps(0))));
}

#[test]
fn order_from_integer() {
    assert_eq!(TrotterOrder::try_from(1).unwrap(), TrotterOrder::First);
    assert_eq!(TrotterOrder::try_from(2).unwrap(), TrotterOrder::Second);
    assert!(matches!(
        TrotterOrder::try_from(4),
        Err(SimError::InvalidOrder(4))
    ));
}

// ---------------------------------------------------------------------------
// Circuit structure
// ---------------------------------------------------------------------------

#[test]
fn qubit_count_inferred() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::zz(0, 1, 1.0),
        HamiltonianTerm::z(2, -0.5),
    ]);
    let circuit = TrotterEvolution::new(h, 1.0, 1).first_order().unwrap();
    assert_eq!(circuit.num_qubits(), 3);
}

#[test]
fn with_n_qubits_overrides_inferred_width() {
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
    let circuit = TrotterEvolution::new(h, 1.0, 1)
        .with_n_qubits(5)
        .first_order()
        .unwrap();
    assert_eq!(circuit.num_qubits(), 5);
}

#[test]
fn more_steps_produce_deeper_circuit() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::zz(0, 1, 1.0),
        HamiltonianTerm::z(0, -0.5),
    ]);
    let c1 = TrotterEvolution::new(h.clone(), 1.0, 1).first_order().unwrap();
    let c4 = TrotterEvolution::new(h, 1.0, 4).first_order().unwrap();
    assert!(c4.depth() > c1.depth());
}

#[test]
fn rotation_angle_is_twice_coeff_times_step() {
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 0.75)]);
    let circuit = TrotterEvolution::new(h, 2.0, 4).first_order().unwrap();
    assert_eq!(circuit.count_ops("rz"), 4);
    for inst in circuit.instructions() {
        let angle = inst.gate.angle().unwrap();
        assert!((angle - 2.0 * 0.75 * 0.5).abs() < 1e-15);
    }
}

#[test]
fn second_order_applies_each_term_twice_per_step() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::zz(0, 1, 1.0),
        HamiltonianTerm::x(0, -0.5),
        HamiltonianTerm::x(1, -0.5),
    ]);
    let c1 = TrotterEvolution::new(h.clone(), 1.0, 3).first_order().unwrap();
    let c2 = TrotterEvolution::new(h, 1.0, 3).second_order().unwrap();
    assert_eq!(c1.count_ops("rz"), 9);
    assert_eq!(c2.count_ops("rz"), 18);
}

#[test]
fn y_operator_basis_change_compiles() {
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::new(
        0.5,
        PauliString::from_ops([(0, PauliOp::Y), (1, PauliOp::Y)]),
    )]);
    let circuit = TrotterEvolution::new(h, 1.0, 1).first_order().unwrap();
    assert_eq!(circuit.count_ops("sdg"), 2);
    assert_eq!(circuit.count_ops("s"), 2);
}

#[test]
fn qubit_out_of_range_returns_error() {
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(5, 1.0)]);
    let evol = TrotterEvolution::new(h, 1.0, 1).with_n_qubits(2);
    assert!(matches!(
        evol.first_order(),
        Err(SimError::QubitOutOfRange { .. })
    ));
}

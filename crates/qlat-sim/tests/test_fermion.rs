//! Canonical anticommutation relations for the Jordan–Wigner encoding.

use num_complex::Complex64;
use proptest::prelude::*;

use qlat_sim::fermion::{FermionMode, density_density, hopping};
use qlat_sim::hamiltonian::PauliString;
use qlat_sim::operator::OperatorSum;

const TOL: f64 = 1e-12;

fn is_identity_times(op: &OperatorSum, c: f64) -> bool {
    let mut diff = op.clone();
    diff.add_scaled(Complex64::new(-c, 0.0), &OperatorSum::identity());
    diff.is_zero(TOL)
}

#[test]
fn annihilation_is_adjoint_of_creation() {
    for j in 0..5 {
        let mode = FermionMode(j);
        let mut diff = mode.creation().adjoint();
        diff.add_scaled(Complex64::new(-1.0, 0.0), &mode.annihilation());
        assert!(diff.is_zero(TOL), "mode {j}");
    }
}

#[test]
fn creation_squares_to_zero() {
    let mode = FermionMode(3);
    assert!(mode.creation().product(&mode.creation()).is_zero(TOL));
    assert!(mode.annihilation().product(&mode.annihilation()).is_zero(TOL));
}

#[test]
fn number_operator_is_projector() {
    let n = FermionMode(2).number();
    let mut diff = n.product(&n);
    diff.add_scaled(Complex64::new(-1.0, 0.0), &n);
    assert!(diff.is_zero(TOL));
}

#[test]
fn hopping_and_interaction_are_hermitian() {
    for op in [
        hopping(FermionMode(0), FermionMode(3)),
        density_density(FermionMode(1), FermionMode(4)),
    ] {
        for (_, c) in op.terms() {
            assert!(c.im.abs() < TOL);
        }
    }
}

#[test]
fn density_density_on_one_site_pair() {
    // n0 n1 = (I - Z0 - Z1 + Z0 Z1) / 4
    let op = density_density(FermionMode(0), FermionMode(1));
    let quarter = Complex64::new(0.25, 0.0);
    assert!((op.coefficient(&PauliString::identity()) - quarter).norm() < TOL);
    assert!((op.coefficient(&PauliString::zz([0, 1])) - quarter).norm() < TOL);
}

proptest! {
    #[test]
    fn anticommutation_relations(i in 0u32..6, j in 0u32..6) {
        let (a, b) = (FermionMode(i), FermionMode(j));

        let mixed = a.annihilation().anticommutator(&b.creation());
        let expected = if i == j { 1.0 } else { 0.0 };
        prop_assert!(is_identity_times(&mixed, expected));

        prop_assert!(a.annihilation().anticommutator(&b.annihilation()).is_zero(TOL));
        prop_assert!(a.creation().anticommutator(&b.creation()).is_zero(TOL));
    }
}

//! Jordan–Wigner encoding of fermionic modes.
//!
//! Mode `j` maps onto qubit `j`. An occupied mode is `|1⟩`:
//!
//!   c†_j = Z_0 ⋯ Z_{j-1} ⊗ (X_j − iY_j)/2
//!   c_j  = Z_0 ⋯ Z_{j-1} ⊗ (X_j + iY_j)/2
//!   n_j  = c†_j c_j = (I − Z_j)/2
//!
//! The Z string supplies the sign that makes operators on different modes
//! anticommute.

use num_complex::Complex64;

use crate::hamiltonian::{PauliOp, PauliString};
use crate::operator::OperatorSum;

/// A fermionic mode index (also its qubit index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FermionMode(pub u32);

impl FermionMode {
    /// Creation operator c†.
    pub fn creation(self) -> OperatorSum {
        self.ladder(-1.0)
    }

    /// Annihilation operator c.
    pub fn annihilation(self) -> OperatorSum {
        self.ladder(1.0)
    }

    /// Number operator n = c†c = (I − Z)/2.
    pub fn number(self) -> OperatorSum {
        let mut op = OperatorSum::identity().scale(Complex64::new(0.5, 0.0));
        op.add_term(
            Complex64::new(-0.5, 0.0),
            PauliString::single(self.0, PauliOp::Z),
        );
        op
    }

    /// Z string ⊗ (X + sign·iY)/2.
    fn ladder(self, y_sign: f64) -> OperatorSum {
        let parity = (0..self.0).map(|q| (q, PauliOp::Z));
        let x = PauliString::from_ops(parity.clone().chain([(self.0, PauliOp::X)]));
        let y = PauliString::from_ops(parity.chain([(self.0, PauliOp::Y)]));

        let mut op = OperatorSum::pauli(Complex64::new(0.5, 0.0), x);
        op.add_term(Complex64::new(0.0, 0.5 * y_sign), y);
        op
    }
}

/// Hopping between two modes: `c†_i c_j + c†_j c_i`.
pub fn hopping(i: FermionMode, j: FermionMode) -> OperatorSum {
    let mut op = i.creation().product(&j.annihilation());
    op.add_scaled(
        Complex64::new(1.0, 0.0),
        &j.creation().product(&i.annihilation()),
    );
    op
}

/// Density-density interaction `n_i n_j`.
pub fn density_density(i: FermionMode, j: FermionMode) -> OperatorSum {
    i.number().product(&j.number())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_ladder_product() {
        let mode = FermionMode(2);
        let n = mode.creation().product(&mode.annihilation());
        let mut diff = n.clone();
        diff.add_scaled(Complex64::new(-1.0, 0.0), &mode.number());
        assert!(diff.is_zero(1e-12));
    }

    #[test]
    fn test_hopping_is_xx_plus_yy_for_neighbours() {
        // c†_0 c_1 + h.c. = (X0 X1 + Y0 Y1) / 2
        let op = hopping(FermionMode(0), FermionMode(1));
        let xx = PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::X)]);
        let yy = PauliString::from_ops([(0, PauliOp::Y), (1, PauliOp::Y)]);
        assert!((op.coefficient(&xx) - Complex64::new(0.5, 0.0)).norm() < 1e-12);
        assert!((op.coefficient(&yy) - Complex64::new(0.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_hopping_self_loop_is_twice_number() {
        let op = hopping(FermionMode(1), FermionMode(1));
        let mut diff = op.clone();
        diff.add_scaled(Complex64::new(-2.0, 0.0), &FermionMode(1).number());
        assert!(diff.is_zero(1e-12));
    }
}

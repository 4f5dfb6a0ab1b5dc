//! Property tests for lattice construction.

use proptest::prelude::*;
use qlat_lattice::Lattice;

proptest! {
    #[test]
    fn chain_has_n_minus_one_edges(n in 1u32..64) {
        let lattice = Lattice::chain(n);
        prop_assert_eq!(lattice.num_sites(), n);
        prop_assert_eq!(lattice.num_edges(), (n - 1) as usize);
        for (a, b) in lattice.edges() {
            prop_assert_eq!(b, a + 1);
        }
    }

    #[test]
    fn grid_edge_count_matches_formula(shape in prop::collection::vec(1u32..5, 1..4)) {
        let lattice = Lattice::grid(&shape).unwrap();
        let total: u32 = shape.iter().product();
        // Sum over axes of (d_k - 1) * prod_{j != k} d_j
        let expected: u32 = shape
            .iter()
            .map(|&d| (d - 1) * (total / d))
            .sum();
        prop_assert_eq!(lattice.num_sites(), total);
        prop_assert_eq!(lattice.num_edges(), expected as usize);
    }

    #[test]
    fn edges_are_normalized_and_in_range(shape in prop::collection::vec(1u32..4, 1..4)) {
        let lattice = Lattice::grid(&shape).unwrap();
        let n = lattice.num_sites();
        for (a, b) in lattice.edges() {
            prop_assert!(a < b);
            prop_assert!(b < n);
        }
    }

    #[test]
    fn from_edges_labels_are_contiguous(
        raw in prop::collection::vec((0u16..40, 0u16..40), 1..30)
    ) {
        let lattice = Lattice::from_edges(raw.iter().copied()).unwrap();
        let mut distinct: Vec<u16> = raw.iter().flat_map(|&(a, b)| [a, b]).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(lattice.num_sites() as usize, distinct.len());
        for (a, b) in lattice.edges() {
            prop_assert!(a <= b && b < lattice.num_sites());
        }
    }
}

#[test]
fn cube_neighbourhood() {
    let cube = Lattice::grid(&[2, 2, 2]).unwrap();
    assert_eq!(cube.neighbors(0), vec![1, 2, 4]);
    assert_eq!(cube.neighbors(7), vec![3, 5, 6]);
}

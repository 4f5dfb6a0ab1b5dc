//! `qlat-lattice`: lattice geometry for qlat models.
//!
//! A [`Lattice`] is an undirected graph of sites with nearest-neighbour
//! edges. Whatever the construction, sites are normalized to the contiguous
//! range `0..num_sites()`, which is also the qubit (or mode) index used by
//! the model builders in `qlat-sim`.
//!
//! # Quick start
//!
//! ```rust
//! use qlat_lattice::Lattice;
//!
//! let chain = Lattice::chain(5);
//! assert_eq!(chain.num_sites(), 5);
//! assert_eq!(chain.num_edges(), 4);
//!
//! // 2x2x2 cube: 8 vertices, 12 edges.
//! let cube = Lattice::grid(&[2, 2, 2]).unwrap();
//! assert_eq!(cube.num_sites(), 8);
//! assert_eq!(cube.num_edges(), 12);
//! ```

pub mod error;
pub mod export;
pub mod lattice;

pub use error::{LatticeError, LatticeResult};
pub use export::{LatticeLayout, SiteLayout};
pub use lattice::{Lattice, Site};

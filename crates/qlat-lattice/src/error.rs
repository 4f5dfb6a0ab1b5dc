//! Error types for lattice construction.

use thiserror::Error;

/// Errors produced while building a lattice.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LatticeError {
    /// A grid was requested with no axes.
    #[error("grid shape has no axes")]
    EmptyShape,

    /// A grid axis has zero extent.
    #[error("grid axis {axis} has zero extent")]
    ZeroExtent {
        /// Index of the offending axis.
        axis: usize,
    },

    /// The lattice would not fit the u32 site index space.
    #[error("lattice would contain {0} sites, more than can be indexed")]
    TooManySites(usize),
}

/// Result type for lattice construction.
pub type LatticeResult<T> = Result<T, LatticeError>;

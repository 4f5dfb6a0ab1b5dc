//! Lattice export for visualization.
//!
//! Two formats are provided: a serializable [`LatticeLayout`] (sites with
//! positions plus the edge list) and Graphviz DOT text.

use petgraph::dot::{Config, Dot};
use serde::Serialize;

use crate::lattice::Lattice;

/// A single site in an exported layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLayout {
    pub index: u32,
    pub label: String,
    /// Position with one entry per spatial axis of the layout.
    pub position: Vec<f64>,
}

/// Serializable snapshot of a lattice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatticeLayout {
    /// Spatial axes, 1 to 3; grids with more axes are folded into three.
    pub dimension: usize,
    pub sites: Vec<SiteLayout>,
    pub edges: Vec<(u32, u32)>,
}

impl Lattice {
    /// Snapshot the lattice for plotting.
    pub fn layout(&self) -> LatticeLayout {
        let dim = self.dimension().clamp(1, 3);
        LatticeLayout {
            dimension: dim,
            sites: self
                .sites()
                .enumerate()
                .map(|(i, site)| SiteLayout {
                    index: i as u32,
                    label: site.label.clone(),
                    position: site.position[..dim].to_vec(),
                })
                .collect(),
            edges: self.edges().collect(),
        }
    }

    /// Render the lattice as an undirected Graphviz graph.
    ///
    /// Each node carries a `pos` attribute so `neato -n` reproduces the
    /// lattice geometry; 3D positions are projected onto the first two axes
    /// with a small shear along the third.
    pub fn to_dot(&self) -> String {
        let graph = self.graph();
        let dot = Dot::with_attr_getters(
            graph,
            &[Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, site)| {
                let [x, y, z] = site.position;
                format!("pos=\"{:.2},{:.2}!\"", x + 0.4 * z, y + 0.3 * z)
            },
        );
        format!("{dot}")
    }
}

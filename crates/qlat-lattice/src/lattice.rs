//! Lattice graph and its constructors.

use std::fmt;
use std::hash::Hash;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{LatticeError, LatticeResult};

/// A lattice site.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Label the site had before normalization (e.g. `"(0, 1, 1)"`).
    pub label: String,
    /// Spatial position, padded with zeros to three dimensions.
    pub position: [f64; 3],
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// An undirected lattice with sites indexed `0..num_sites()`.
///
/// Edges are stored once; adding the reversed pair of an existing edge is a
/// no-op. Self-loops are kept as given: interpreting them is the model's
/// business, not the lattice's.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Sites as nodes; the edge weight is the insertion ordinal.
    graph: UnGraph<Site, u32>,
    /// Spatial dimensionality used when exporting positions, at most 3.
    dimension: usize,
}

impl Lattice {
    fn with_dimension(dimension: usize) -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            dimension: dimension.min(3),
        }
    }

    fn add_site(&mut self, label: String, position: [f64; 3]) -> u32 {
        self.graph.add_node(Site { label, position }).index() as u32
    }

    /// Add an edge between two existing sites.
    ///
    /// Duplicate edges (including reversed pairs) are silently ignored.
    fn add_edge(&mut self, a: u32, b: u32) {
        let (na, nb) = (NodeIndex::new(a as usize), NodeIndex::new(b as usize));
        if self.graph.find_edge(na, nb).is_some() {
            return;
        }
        let ordinal = self.graph.edge_count() as u32;
        self.graph.add_edge(na, nb, ordinal);
    }

    /// Create a linear chain `0-1-2-...-(n-1)`.
    pub fn chain(n: u32) -> Self {
        let mut lattice = Self::with_dimension(1);
        for i in 0..n {
            lattice.add_site(i.to_string(), [f64::from(i), 0.0, 0.0]);
        }
        for i in 0..n.saturating_sub(1) {
            lattice.add_edge(i, i + 1);
        }
        debug!(sites = n, edges = lattice.num_edges(), "built chain lattice");
        lattice
    }

    /// Create a periodic chain: a [`chain`](Self::chain) closed by the edge
    /// `(n-1, 0)` when `n > 2`.
    pub fn ring(n: u32) -> Self {
        let mut lattice = Self::chain(n);
        if n > 2 {
            lattice.add_edge(n - 1, 0);
        }
        lattice
    }

    /// Create a hyper-rectangular grid with nearest-neighbour edges along
    /// every axis.
    ///
    /// Sites are numbered lexicographically by coordinate, last axis fastest,
    /// and labelled with their coordinate tuple. Axis `k ≥ 3` is drawn along
    /// spatial axis `k mod 3`, as a row of spaced copies of the lower axes,
    /// so every site keeps a distinct position.
    pub fn grid(shape: &[u32]) -> LatticeResult<Self> {
        if shape.is_empty() {
            return Err(LatticeError::EmptyShape);
        }
        if let Some(axis) = shape.iter().position(|&d| d == 0) {
            return Err(LatticeError::ZeroExtent { axis });
        }
        let total = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
            .filter(|&n| u32::try_from(n).is_ok())
            .ok_or(LatticeError::TooManySites(usize::MAX))?;

        // strides[k] = product of extents after axis k
        let mut strides = vec![1usize; shape.len()];
        for k in (0..shape.len() - 1).rev() {
            strides[k] = strides[k + 1] * shape[k + 1] as usize;
        }

        // Spatial spacing of each axis; folded axes skip one slot between copies.
        let mut spacing = vec![1.0f64; shape.len()];
        for k in 3..shape.len() {
            spacing[k] = spacing[k - 3] * (f64::from(shape[k - 3]) + 1.0);
        }

        let mut lattice = Self::with_dimension(shape.len());
        for index in 0..total {
            let coords: Vec<u32> = (0..shape.len())
                .map(|k| ((index / strides[k]) % shape[k] as usize) as u32)
                .collect();
            let mut position = [0.0; 3];
            for (k, &c) in coords.iter().enumerate() {
                position[k % 3] += f64::from(c) * spacing[k];
            }
            lattice.add_site(format_coords(&coords), position);
        }

        for index in 0..total {
            for k in 0..shape.len() {
                let coord = (index / strides[k]) % shape[k] as usize;
                if coord + 1 < shape[k] as usize {
                    lattice.add_edge(index as u32, (index + strides[k]) as u32);
                }
            }
        }

        debug!(
            ?shape,
            sites = lattice.num_sites(),
            edges = lattice.num_edges(),
            "built grid lattice"
        );
        Ok(lattice)
    }

    /// Build a lattice from an edge list with arbitrary labels.
    ///
    /// Labels are relabelled to `0..N` in the order they are first seen, so
    /// `[(1, 2), (2, 3)]` becomes sites `0, 1, 2` with edges `(0, 1), (1, 2)`.
    pub fn from_edges<L, I>(edges: I) -> LatticeResult<Self>
    where
        L: Eq + Hash + Clone + fmt::Display,
        I: IntoIterator<Item = (L, L)>,
    {
        let mut lattice = Self::with_dimension(1);
        let mut index_of: FxHashMap<L, u32> = FxHashMap::default();

        for (a, b) in edges {
            let ia = lattice.intern(&mut index_of, a)?;
            let ib = lattice.intern(&mut index_of, b)?;
            lattice.add_edge(ia, ib);
        }

        debug!(
            sites = lattice.num_sites(),
            edges = lattice.num_edges(),
            "built lattice from edge list"
        );
        Ok(lattice)
    }

    fn intern<L>(&mut self, index_of: &mut FxHashMap<L, u32>, label: L) -> LatticeResult<u32>
    where
        L: Eq + Hash + Clone + fmt::Display,
    {
        if let Some(&i) = index_of.get(&label) {
            return Ok(i);
        }
        let next = self.graph.node_count();
        if u32::try_from(next).is_err() {
            return Err(LatticeError::TooManySites(next + 1));
        }
        let i = self.add_site(label.to_string(), [next as f64, 0.0, 0.0]);
        index_of.insert(label, i);
        Ok(i)
    }

    /// Number of sites.
    #[inline]
    pub fn num_sites(&self) -> u32 {
        self.graph.node_count() as u32
    }

    /// Number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the lattice has no sites.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Spatial dimensionality (1 for chains and edge lists, the number of
    /// axes for grids, capped at 3).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Edges as `(min, max)` site pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.graph.edge_references().map(|e| {
            let (a, b) = (e.source().index() as u32, e.target().index() as u32);
            (a.min(b), a.max(b))
        })
    }

    /// Sites adjacent to `site`, in ascending order.
    pub fn neighbors(&self, site: u32) -> Vec<u32> {
        if site >= self.num_sites() {
            return vec![];
        }
        let mut out: Vec<u32> = self
            .graph
            .neighbors(NodeIndex::new(site as usize))
            .map(|n| n.index() as u32)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// True if `a` and `b` share an edge.
    pub fn is_connected(&self, a: u32, b: u32) -> bool {
        let n = self.num_sites();
        a < n
            && b < n
            && self
                .graph
                .find_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize))
                .is_some()
    }

    /// Site data, or `None` if out of range.
    pub fn site(&self, site: u32) -> Option<&Site> {
        self.graph.node_weight(NodeIndex::new(site as usize))
    }

    /// All sites in index order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> + '_ {
        self.graph.node_weights()
    }

    pub(crate) fn graph(&self) -> &UnGraph<Site, u32> {
        &self.graph
    }
}

fn format_coords(coords: &[u32]) -> String {
    let parts: Vec<String> = coords.iter().map(u32::to_string).collect();
    format!("({})", parts.join(", "))
}

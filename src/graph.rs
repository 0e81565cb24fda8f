//! # Colored Graph Model
//!
//! A simple undirected graph whose edges carry an integer color label.
//! Vertices are dense indices `0..n`; label [`UNCOLORED`] (0) marks an edge
//! that has not been assigned a color yet.
//!
//! The cycle scanners and validators only read the graph. Labels are
//! mutated by whoever drives the coloring search, between queries.
//!
//! ## Example
//! ```
//! use nolonely::graph::{ColoredGraph, UNCOLORED};
//!
//! let mut g = ColoredGraph::new(3);
//! g.add_edge(0, 1).unwrap();
//! g.add_colored_edge(1, 2, 1).unwrap();
//! assert_eq!(g.label(0, 1).unwrap(), UNCOLORED);
//! assert_eq!(g.label(2, 1).unwrap(), 1);
//!
//! g.set_label(0, 1, 2).unwrap();
//! assert_eq!(g.neighbors(1).unwrap().collect::<Vec<_>>(), vec![0, 2]);
//! ```

pub mod components;

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

pub use components::{ColorSubgraph, Components};

/// Vertex identifier.
pub type Vertex = usize;

/// Color class of an edge. [`UNCOLORED`] is reserved for "no color assigned".
pub type Color = u32;

/// Label of an edge that has not been colored.
pub const UNCOLORED: Color = 0;

/// An undirected edge with its current label.
///
/// `u` and `v` keep the orientation in which the edge was produced
/// (insertion order for [`ColoredGraph::edges`], traversal order for cycle reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub label: Color,
}

impl Edge {
    pub fn new(u: Vertex, v: Vertex, label: Color) -> Self {
        Self { u, v, label }
    }

    /// Endpoints as `(min, max)`.
    pub fn key(&self) -> (Vertex, Vertex) {
        ordered(self.u, self.v)
    }

    pub fn is_colored(&self) -> bool {
        self.label != UNCOLORED
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.label)
    }
}

fn ordered(u: Vertex, v: Vertex) -> (Vertex, Vertex) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Simple undirected graph (no self-loops, no parallel edges) with one label per edge.
#[derive(Debug, Clone, Default)]
pub struct ColoredGraph {
    /// `adjacency[v]` holds `(neighbor, edge index)` in insertion order.
    adjacency: Vec<Vec<(Vertex, usize)>>,
    edges: Vec<Edge>,
    index: HashMap<(Vertex, Vertex), usize>,
}

impl ColoredGraph {
    /// Creates a graph with `n` vertices (`0..n`) and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a graph with `n` vertices from `(u, v, label)` triples.
    pub fn from_edges(n: usize, edges: &[(Vertex, Vertex, Color)]) -> Result<Self> {
        let mut graph = Self::new(n);
        for &(u, v, label) in edges {
            graph.add_colored_edge(u, v, label)?;
        }
        Ok(graph)
    }

    /// Appends a fresh vertex and returns its identifier.
    pub fn add_vertex(&mut self) -> Vertex {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds an uncolored edge between `u` and `v`.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        self.add_colored_edge(u, v, UNCOLORED)
    }

    /// Adds an edge between `u` and `v` carrying `label`.
    pub fn add_colored_edge(&mut self, u: Vertex, v: Vertex, label: Color) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        let key = ordered(u, v);
        if self.index.contains_key(&key) {
            return Err(Error::DuplicateEdge(key.0, key.1));
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(u, v, label));
        self.index.insert(key, id);
        self.adjacency[u].push((v, id));
        self.adjacency[v].push((u, id));
        Ok(())
    }

    /// Relabels the existing edge `{u, v}`.
    pub fn set_label(&mut self, u: Vertex, v: Vertex, label: Color) -> Result<()> {
        let id = self.edge_id(u, v)?;
        self.edges[id].label = label;
        Ok(())
    }

    /// Resets the edge `{u, v}` to [`UNCOLORED`].
    pub fn clear_label(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        self.set_label(u, v, UNCOLORED)
    }

    /// Color of the edge `{u, v}`.
    pub fn label(&self, u: Vertex, v: Vertex) -> Result<Color> {
        Ok(self.edges[self.edge_id(u, v)?].label)
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.index.contains_key(&ordered(u, v))
    }

    /// Neighbors of `v` in the order their edges were added.
    pub fn neighbors(&self, v: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].iter().map(|&(w, _)| w))
    }

    pub fn vertices(&self) -> Range<Vertex> {
        0..self.adjacency.len()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges at `v` labeled `color`.
    pub fn color_degree(&self, v: Vertex, color: Color) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self
            .incident(v)
            .filter(|&(_, label)| label == color)
            .count())
    }

    /// Builds the subgraph spanned by the edges labeled `color`.
    pub fn color_subgraph(&self, color: Color) -> ColorSubgraph {
        ColorSubgraph::of(self, color)
    }

    /// Components left after deleting every edge labeled `color`.
    pub fn components_without(&self, color: Color) -> Components {
        Components::without_color(self, color)
    }

    /// `(neighbor, label)` pairs around `v`. `v` must be a vertex of the graph.
    pub(crate) fn incident(&self, v: Vertex) -> impl Iterator<Item = (Vertex, Color)> + '_ {
        self.adjacency[v]
            .iter()
            .map(move |&(w, id)| (w, self.edges[id].label))
    }

    pub(crate) fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v < self.adjacency.len() {
            Ok(())
        } else {
            Err(Error::NoSuchVertex(v))
        }
    }

    fn edge_id(&self, u: Vertex, v: Vertex) -> Result<usize> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.index
            .get(&ordered(u, v))
            .copied()
            .ok_or(Error::NoSuchEdge(u, v))
    }
}

/// Returns the first uncolored edge in insertion order, if any.
///
/// Used by a coloring driver to pick the next edge when no risk-driven
/// candidate is available.
pub fn find_next_uncolored_edge(graph: &ColoredGraph) -> Option<Edge> {
    graph.edges().find(|edge| !edge.is_colored())
}

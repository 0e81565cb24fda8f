use std::collections::HashMap;

use bitvec::prelude::*;

use super::{Color, ColoredGraph, Edge, Vertex};

/// Disjoint-set (union-find) over the vertices of a graph.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `x`, with path compression.
    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return;
        }
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
    }
}

/// A partition of some vertices into connected components.
///
/// Vertices outside the partition belong to no component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Components {
    /// Built partitions list components by smallest vertex, vertices ascending.
    components: Vec<Vec<Vertex>>,
    membership: HashMap<Vertex, usize>,
}

impl Components {
    /// Wraps an existing component list. Each vertex should appear in at most
    /// one list; a repeated vertex is kept in the first list naming it.
    pub fn from_partition(components: &[Vec<Vertex>]) -> Self {
        let mut membership = HashMap::new();
        for (slot, component) in components.iter().enumerate() {
            for &v in component {
                membership.entry(v).or_insert(slot);
            }
        }
        Self {
            components: components.to_vec(),
            membership,
        }
    }

    /// Components of `graph` after deleting every edge labeled `color`.
    /// All vertices stay, so an isolated vertex forms its own component and
    /// uncolored edges still join their endpoints.
    pub fn without_color(graph: &ColoredGraph, color: Color) -> Self {
        let n = graph.num_vertices();
        Self::build(
            n,
            bitvec![1; n],
            graph.edges().filter(|edge| edge.label != color),
        )
    }

    /// Union-find over `edges`; `members` marks the vertices that take part
    /// and is extended by every edge endpoint.
    fn build(n: usize, mut members: BitVec, edges: impl Iterator<Item = Edge>) -> Self {
        let mut uf = UnionFind::new(n);
        for edge in edges {
            members.set(edge.u, true);
            members.set(edge.v, true);
            uf.union(edge.u, edge.v);
        }

        let mut components: Vec<Vec<Vertex>> = Vec::new();
        let mut by_root: HashMap<usize, usize> = HashMap::new();
        let mut membership = HashMap::new();
        for v in members.iter_ones() {
            let root = uf.find(v);
            let slot = *by_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(v);
            membership.insert(v, slot);
        }

        Self {
            components,
            membership,
        }
    }

    pub fn components(&self) -> &[Vec<Vertex>] {
        &self.components
    }

    /// Index into [`components`](Self::components) of the component holding `v`.
    pub fn component_of(&self, v: Vertex) -> Option<usize> {
        self.membership.get(&v).copied()
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.membership.contains_key(&v)
    }

    /// Whether `u` and `v` lie in one component. A vertex outside the
    /// partition shares a component with nothing.
    pub fn same_component(&self, u: Vertex, v: Vertex) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn num_vertices(&self) -> usize {
        self.membership.len()
    }
}

/// The subgraph formed by the edges of a single color.
///
/// Its vertex set is exactly the endpoints of those edges: a vertex with no
/// edge of this color is not part of the subgraph and belongs to no component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSubgraph {
    color: Color,
    partition: Components,
    num_edges: usize,
}

impl ColorSubgraph {
    /// Decomposes the `color` edges of `graph` into connected components.
    pub fn of(graph: &ColoredGraph, color: Color) -> Self {
        let n = graph.num_vertices();
        let num_edges = graph.edges().filter(|edge| edge.label == color).count();
        let partition = Components::build(
            n,
            bitvec![0; n],
            graph.edges().filter(|edge| edge.label == color),
        );

        log::trace!(
            "color {} spans {} vertices in {} components",
            color,
            partition.num_vertices(),
            partition.len()
        );

        Self {
            color,
            partition,
            num_edges,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The component partition of this subgraph, as taken by the separation checks.
    pub fn partition(&self) -> &Components {
        &self.partition
    }

    pub fn components(&self) -> &[Vec<Vertex>] {
        self.partition.components()
    }

    /// Index into [`components`](Self::components) of the component holding `v`,
    /// or `None` when `v` has no edge of this color.
    pub fn component_of(&self, v: Vertex) -> Option<usize> {
        self.partition.component_of(v)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.partition.contains(v)
    }

    pub fn num_vertices(&self) -> usize {
        self.partition.num_vertices()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// A subgraph with at most one component is connected. An empty color
    /// class counts as connected.
    pub fn is_connected(&self) -> bool {
        self.partition.len() <= 1
    }
}

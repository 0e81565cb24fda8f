use bitvec::prelude::*;

use crate::error::Result;
use crate::graph::{Color, ColoredGraph, Vertex};

/// Finds the monochromatic cycle closed by the edge `(v0, v1)`.
///
/// Only edges labeled `color` are followed. The search starts at `v1` and
/// looks for a simple path back to `v0` that does not use the edge itself,
/// so the returned cycle always has more than two vertices. It starts with
/// `v0, v1`.
///
/// Adding a single edge to a color class without monochromatic cycles
/// creates at most one, so the first cycle found is returned and the search
/// stops there.
///
/// # Errors
/// `NoSuchVertex`/`NoSuchEdge` when `(v0, v1)` is not an edge of `graph`.
pub fn cycle_closed_by(
    graph: &ColoredGraph,
    (v0, v1): (Vertex, Vertex),
    color: Color,
) -> Result<Option<Vec<Vertex>>> {
    graph.label(v0, v1)?;

    let mut on_path = bitvec![0; graph.num_vertices()];
    on_path.set(v0, true);
    let mut path = vec![v0];
    let found = close_from(graph, v1, v0, color, &mut on_path, &mut path);

    if let Some(cycle) = &found {
        log::debug!(
            "edge ({}, {}) closes a color {} cycle of length {}",
            v0,
            v1,
            color,
            cycle.len()
        );
    }
    Ok(found)
}

/// Length of the cycle closed by `(v0, v1)` in `color`, or 0 when there is none.
///
/// # Example
/// ```
/// use nolonely::cycles::cycle_length_closed_by;
/// use nolonely::graph::ColoredGraph;
///
/// let g = ColoredGraph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
/// assert_eq!(cycle_length_closed_by(&g, (3, 0), 1).unwrap(), 4);
/// assert_eq!(cycle_length_closed_by(&g, (3, 0), 2).unwrap(), 0);
/// ```
pub fn cycle_length_closed_by(
    graph: &ColoredGraph,
    edge: (Vertex, Vertex),
    color: Color,
) -> Result<usize> {
    Ok(cycle_closed_by(graph, edge, color)?.map_or(0, |cycle| cycle.len()))
}

fn close_from(
    graph: &ColoredGraph,
    current: Vertex,
    v0: Vertex,
    color: Color,
    on_path: &mut BitVec,
    path: &mut Vec<Vertex>,
) -> Option<Vec<Vertex>> {
    on_path.set(current, true);
    path.push(current);

    let mut found = None;
    for (next, label) in graph.incident(current) {
        if label != color {
            continue;
        }
        if !on_path[next] {
            found = close_from(graph, next, v0, color, on_path, path);
            if found.is_some() {
                break;
            }
        } else if next == v0 && path.len() > 2 {
            found = Some(path.clone());
            break;
        }
    }

    path.pop();
    on_path.set(current, false);
    found
}

/// Lengths of the monochromatic cycles met while scanning one color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleLengths {
    /// The color class has no cycle.
    Acyclic,
    /// Every cycle found has this many vertices.
    Uniform(usize),
    /// Two cycles of different lengths were found; the scan stopped at the second.
    Mixed { first: usize, other: usize },
}

impl CycleLengths {
    pub fn is_consistent(&self) -> bool {
        !matches!(self, CycleLengths::Mixed { .. })
    }
}

/// Scans every cycle of the `color` class and compares their lengths.
///
/// Uses the same visited-root pruning as the lonely-edge scan, but follows
/// every `color` edge, since all cycles of the class have to be compared.
pub fn monochromatic_cycle_lengths(graph: &ColoredGraph, color: Color) -> CycleLengths {
    let mut walk = LengthWalk {
        graph,
        color,
        root: 0,
        visited: bitvec![0; graph.num_vertices()],
        on_path: bitvec![0; graph.num_vertices()],
        depth: 0,
        length: None,
    };

    for root in graph.vertices() {
        if walk.visited[root] {
            continue;
        }
        walk.visited.set(root, true);
        walk.root = root;

        if let Some((first, other)) = walk.explore(root) {
            log::debug!(
                "color {} has cycles of lengths {} and {}",
                color,
                first,
                other
            );
            return CycleLengths::Mixed { first, other };
        }
    }

    match walk.length {
        Some(length) => CycleLengths::Uniform(length),
        None => CycleLengths::Acyclic,
    }
}

/// Returns `true` when all monochromatic cycles of `color` share one length.
///
/// # Example
/// ```
/// use nolonely::cycles::all_monochromatic_cycles_same_length;
/// use nolonely::graph::ColoredGraph;
///
/// // a color-1 triangle and a separate color-1 square
/// let g = ColoredGraph::from_edges(
///     7,
///     &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1), (4, 5, 1), (5, 6, 1), (6, 3, 1)],
/// )
/// .unwrap();
/// assert!(!all_monochromatic_cycles_same_length(&g, 1));
/// ```
pub fn all_monochromatic_cycles_same_length(graph: &ColoredGraph, color: Color) -> bool {
    monochromatic_cycle_lengths(graph, color).is_consistent()
}

struct LengthWalk<'a> {
    graph: &'a ColoredGraph,
    color: Color,
    root: Vertex,
    visited: BitVec,
    on_path: BitVec,
    depth: usize,
    /// Length of the first cycle found, shared across roots.
    length: Option<usize>,
}

impl LengthWalk<'_> {
    /// Returns the two differing lengths as soon as a mismatch appears.
    fn explore(&mut self, current: Vertex) -> Option<(usize, usize)> {
        self.on_path.set(current, true);
        self.depth += 1;

        let mismatch = self.extend(current);

        self.depth -= 1;
        self.on_path.set(current, false);
        mismatch
    }

    fn extend(&mut self, current: Vertex) -> Option<(usize, usize)> {
        let graph = self.graph;
        for (next, label) in graph.incident(current) {
            if label != self.color {
                continue;
            }
            if !self.visited[next] && !self.on_path[next] {
                if let Some(mismatch) = self.explore(next) {
                    return Some(mismatch);
                }
            } else if next == self.root && self.depth > 2 {
                match self.length {
                    Some(first) if first != self.depth => return Some((first, self.depth)),
                    Some(_) => {}
                    None => self.length = Some(self.depth),
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_square_closed_by_last_edge() {
        let g = ColoredGraph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
        assert_eq!(cycle_closed_by(&g, (0, 1), 1).unwrap(), Some(vec![0, 1, 2, 3]));
        assert_eq!(cycle_length_closed_by(&g, (3, 0), 1).unwrap(), 4);
    }

    #[test]
    fn test_no_cycle_when_path_breaks_color() {
        let g = ColoredGraph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 2), (3, 0, 1)]).unwrap();
        assert_eq!(cycle_length_closed_by(&g, (0, 1), 1).unwrap(), 0);
        assert_eq!(cycle_closed_by(&g, (0, 1), 1).unwrap(), None);
    }

    #[test]
    fn test_single_edge_is_not_a_cycle() {
        let g = ColoredGraph::from_edges(2, &[(0, 1, 1)]).unwrap();
        assert_eq!(cycle_length_closed_by(&g, (0, 1), 1).unwrap(), 0);
    }

    #[test]
    fn test_cycle_through_pendant_branches() {
        // color-1 triangle 0-1-2 with a color-1 tail 1-3-4
        let g = ColoredGraph::from_edges(
            5,
            &[(0, 1, 1), (1, 3, 1), (3, 4, 1), (1, 2, 1), (2, 0, 1)],
        )
        .unwrap();
        assert_eq!(cycle_closed_by(&g, (0, 1), 1).unwrap(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_missing_edge_is_an_error() {
        let g = ColoredGraph::from_edges(3, &[(0, 1, 1)]).unwrap();
        assert_eq!(cycle_length_closed_by(&g, (1, 2), 1), Err(Error::NoSuchEdge(1, 2)));
        assert_eq!(cycle_length_closed_by(&g, (1, 5), 1), Err(Error::NoSuchVertex(5)));
    }

    #[test]
    fn test_single_square_is_consistent() {
        let g = ColoredGraph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
        assert_eq!(monochromatic_cycle_lengths(&g, 1), CycleLengths::Uniform(4));
        assert!(all_monochromatic_cycles_same_length(&g, 1));
    }

    #[test]
    fn test_disjoint_triangles_of_different_colors() {
        let g = ColoredGraph::from_edges(
            6,
            &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 2), (4, 5, 2), (5, 3, 2)],
        )
        .unwrap();
        assert_eq!(monochromatic_cycle_lengths(&g, 1), CycleLengths::Uniform(3));
        assert_eq!(monochromatic_cycle_lengths(&g, 2), CycleLengths::Uniform(3));
    }

    #[test]
    fn test_triangle_and_square_of_one_color() {
        let g = ColoredGraph::from_edges(
            7,
            &[
                (0, 1, 1),
                (1, 2, 1),
                (2, 0, 1),
                (3, 4, 1),
                (4, 5, 1),
                (5, 6, 1),
                (6, 3, 1),
            ],
        )
        .unwrap();
        assert_eq!(
            monochromatic_cycle_lengths(&g, 1),
            CycleLengths::Mixed { first: 3, other: 4 }
        );
        assert!(!all_monochromatic_cycles_same_length(&g, 1));
    }

    #[test]
    fn test_acyclic_color_class() {
        let g = ColoredGraph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 2), (3, 0, 1)]).unwrap();
        assert_eq!(monochromatic_cycle_lengths(&g, 1), CycleLengths::Acyclic);
        assert!(all_monochromatic_cycles_same_length(&g, 1));
    }

    #[test]
    fn test_verdict_is_stable_across_runs() {
        let g = ColoredGraph::from_edges(
            5,
            &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1), (3, 4, 1), (4, 2, 1)],
        )
        .unwrap();
        let first = monochromatic_cycle_lengths(&g, 1);
        assert_eq!(first, monochromatic_cycle_lengths(&g, 1));
        assert_eq!(first, CycleLengths::Uniform(3));
    }
}

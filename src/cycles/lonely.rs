use bitvec::prelude::*;

use crate::graph::{Color, ColoredGraph, Edge, Vertex, UNCOLORED};

/// A simple cycle with exactly one edge of `color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LonelyCycle {
    pub color: Color,
    /// Cycle vertices in traversal order, starting at the root. The cycle
    /// closes with the edge from the last vertex back to the first.
    pub cycle: Vec<Vertex>,
    /// Uncolored edges of the cycle, oriented along the traversal. These are
    /// the edges a driver should color next to resolve the violation.
    pub uncolored: Vec<Edge>,
}

impl LonelyCycle {
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }
}

/// Searches `graph` for a simple cycle carrying exactly one edge of `color`.
///
/// Returns `None` when every simple cycle holds zero or at least two edges of
/// `color`. Otherwise returns the first offending cycle found, together with
/// its uncolored edges.
///
/// Vertices are tried as roots in ascending order. Once a root has been
/// explored it is marked visited, and later roots never extend a path through
/// it: every cycle through that vertex has already been checked. Paths that
/// already hold two edges of `color` are cut, since no cycle closing them can
/// have a lonely edge of that color.
///
/// # Example
/// ```
/// use nolonely::cycles::scan_for_lonely_edges;
/// use nolonely::graph::ColoredGraph;
///
/// // triangle colored (1, 1, 2): the color-2 edge is lonely
/// let g = ColoredGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 2)]).unwrap();
/// let found = scan_for_lonely_edges(&g, 2).unwrap();
/// assert_eq!(found.len(), 3);
/// assert!(found.uncolored.is_empty());
///
/// assert!(scan_for_lonely_edges(&g, 1).is_none());
/// ```
pub fn scan_for_lonely_edges(graph: &ColoredGraph, color: Color) -> Option<LonelyCycle> {
    let found = LonelyScan::new(graph, color).run();
    match &found {
        Some(lonely) => log::debug!(
            "lonely color {} on cycle {:?} ({} uncolored edges)",
            color,
            lonely.cycle,
            lonely.uncolored.len()
        ),
        None => log::trace!("no lonely edge of color {}", color),
    }
    found
}

/// State of one scan. Created per query and dropped on return.
struct LonelyScan<'a> {
    graph: &'a ColoredGraph,
    color: Color,
    root: Vertex,
    /// Roots whose cycles have been fully explored.
    visited: BitVec,
    on_path: BitVec,
    path: Vec<Vertex>,
    /// Uncolored edges along `path`.
    uncolored: Vec<Edge>,
}

impl<'a> LonelyScan<'a> {
    fn new(graph: &'a ColoredGraph, color: Color) -> Self {
        let n = graph.num_vertices();
        Self {
            graph,
            color,
            root: 0,
            visited: bitvec![0; n],
            on_path: bitvec![0; n],
            path: Vec::new(),
            uncolored: Vec::new(),
        }
    }

    fn run(&mut self) -> Option<LonelyCycle> {
        for root in self.graph.vertices() {
            if self.visited[root] {
                continue;
            }
            self.visited.set(root, true);
            self.root = root;
            log::trace!("lonely scan for color {} from root {}", self.color, root);

            if let Some(found) = self.explore(root, 0) {
                return Some(found);
            }
        }
        None
    }

    /// Pushes `current` on the path, tries every extension, and pops it again
    /// whatever the outcome.
    fn explore(&mut self, current: Vertex, seen: usize) -> Option<LonelyCycle> {
        self.on_path.set(current, true);
        self.path.push(current);

        let found = self.extend(current, seen);

        self.path.pop();
        self.on_path.set(current, false);
        found
    }

    fn extend(&mut self, current: Vertex, seen: usize) -> Option<LonelyCycle> {
        let graph = self.graph;
        for (next, label) in graph.incident(current) {
            let count = seen + usize::from(label == self.color);

            if !self.visited[next] && !self.on_path[next] {
                if count > 1 {
                    continue;
                }
                let tracked = label == UNCOLORED;
                if tracked {
                    self.uncolored.push(Edge::new(current, next, label));
                }
                if let Some(found) = self.explore(next, count) {
                    return Some(found);
                }
                // every cycle below `next` closed safely
                if tracked {
                    self.uncolored.pop();
                }
            } else if next == self.root && self.path.len() > 2 && count == 1 {
                let mut uncolored = self.uncolored.clone();
                if label == UNCOLORED {
                    uncolored.push(Edge::new(current, next, label));
                }
                return Some(LonelyCycle {
                    color: self.color,
                    cycle: self.path.clone(),
                    uncolored,
                });
            }
        }
        None
    }
}

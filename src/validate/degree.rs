use std::collections::HashMap;

use crate::config::VerifierConfig;
use crate::error::Result;
use crate::graph::{Color, ColoredGraph, Vertex, UNCOLORED};

/// Returns the first endpoint of `(u, v)` whose `color` degree exceeds
/// `config.max_color_degree`, along with that degree.
///
/// # Errors
/// `NoSuchVertex`/`NoSuchEdge` when `(u, v)` is not an edge of `graph`.
pub fn overloaded_endpoint(
    graph: &ColoredGraph,
    (u, v): (Vertex, Vertex),
    color: Color,
    config: &VerifierConfig,
) -> Result<Option<(Vertex, usize)>> {
    graph.label(u, v)?;
    for vertex in [u, v] {
        let degree = graph.color_degree(vertex, color)?;
        if degree > config.max_color_degree {
            log::debug!(
                "vertex {} has {} edges of color {} (bound {})",
                vertex,
                degree,
                color,
                config.max_color_degree
            );
            return Ok(Some((vertex, degree)));
        }
    }
    Ok(None)
}

/// Checks, after coloring `edge` with `color`, that neither endpoint carries
/// more `color` edges than the default bound (2).
pub fn degree_bound_ok(graph: &ColoredGraph, edge: (Vertex, Vertex), color: Color) -> Result<bool> {
    degree_bound_ok_with(graph, edge, color, &VerifierConfig::default())
}

pub fn degree_bound_ok_with(
    graph: &ColoredGraph,
    edge: (Vertex, Vertex),
    color: Color,
    config: &VerifierConfig,
) -> Result<bool> {
    Ok(overloaded_endpoint(graph, edge, color, config)?.is_none())
}

/// Finds a vertex whose majority color has exactly
/// `config.forbidden_color_degree` incident edges.
///
/// The majority color of a vertex is the color with the most incident
/// edges there; a tie goes to the smallest color. Uncolored edges are not
/// counted, and a vertex with no colored edge has no majority color.
pub fn color_degree_violation(
    graph: &ColoredGraph,
    config: &VerifierConfig,
) -> Option<(Vertex, Color)> {
    let mut degrees: HashMap<Color, usize> = HashMap::new();
    for vertex in graph.vertices() {
        degrees.clear();
        for (_, label) in graph.incident(vertex) {
            if label != UNCOLORED {
                *degrees.entry(label).or_insert(0) += 1;
            }
        }

        let majority = degrees
            .iter()
            .map(|(&color, &count)| (color, count))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)));
        if let Some((color, count)) = majority {
            if count == config.forbidden_color_degree {
                log::debug!(
                    "vertex {} has {} edges of its majority color {}",
                    vertex,
                    count,
                    color
                );
                return Some((vertex, color));
            }
        }
    }
    None
}

/// Whole-graph variant: `false` if some vertex has exactly 3 edges of its majority color.
pub fn color_degrees_ok(graph: &ColoredGraph) -> bool {
    color_degrees_ok_with(graph, &VerifierConfig::default())
}

pub fn color_degrees_ok_with(graph: &ColoredGraph, config: &VerifierConfig) -> bool {
    color_degree_violation(graph, config).is_none()
}

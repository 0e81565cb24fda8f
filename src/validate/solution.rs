use crate::config::VerifierConfig;
use crate::error::{Error, Result};
use crate::graph::{Color, ColorSubgraph, ColoredGraph, Edge, Vertex, UNCOLORED};

use super::degree::color_degree_violation;
use super::separation::joined_edge_two_colors;

/// Outcome of checking a completed two-coloring, naming the first condition
/// that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionVerdict {
    Correct,
    /// `vertex` has the forbidden number of `color` edges.
    ColorDegree { vertex: Vertex, color: Color },
    /// The subgraph of `color` is connected.
    ConnectedColorClass { color: Color },
    /// Both endpoints of `edge` lie in one component of the other color.
    EndpointsJoined { edge: Edge },
}

impl SolutionVerdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, SolutionVerdict::Correct)
    }
}

/// Splits a two-colored graph into its two single-color subgraphs.
///
/// # Errors
/// `InvalidInput` if the colors are equal or uncolored, `UnexpectedColor`
/// for the first edge labeled with neither color.
pub fn split_two_colors(
    graph: &ColoredGraph,
    color1: Color,
    color2: Color,
) -> Result<(ColorSubgraph, ColorSubgraph)> {
    check_colors(color1, color2)?;
    if let Some(edge) = graph
        .edges()
        .find(|edge| edge.label != color1 && edge.label != color2)
    {
        return Err(Error::UnexpectedColor {
            u: edge.u,
            v: edge.v,
            label: edge.label,
        });
    }
    Ok((graph.color_subgraph(color1), graph.color_subgraph(color2)))
}

fn check_colors(color1: Color, color2: Color) -> Result<()> {
    if color1 == UNCOLORED || color2 == UNCOLORED {
        return Err(Error::invalid_input("solution colors must not be UNCOLORED"));
    }
    if color1 == color2 {
        return Err(Error::invalid_input(format!(
            "solution colors must differ, got {} twice",
            color1
        )));
    }
    Ok(())
}

/// Checks a completed two-coloring with the default bounds.
pub fn check_solution(graph: &ColoredGraph, color1: Color, color2: Color) -> Result<SolutionVerdict> {
    check_solution_with(graph, color1, color2, &VerifierConfig::default())
}

/// Applies, in order and stopping at the first failure:
/// 1. no vertex has exactly `config.forbidden_color_degree` edges of one color;
/// 2. neither single-color subgraph is connected;
/// 3. every edge has its endpoints in different components of the other color.
pub fn check_solution_with(
    graph: &ColoredGraph,
    color1: Color,
    color2: Color,
    config: &VerifierConfig,
) -> Result<SolutionVerdict> {
    check_colors(color1, color2)?;

    if let Some((vertex, color)) = color_degree_violation(graph, config) {
        return Ok(SolutionVerdict::ColorDegree { vertex, color });
    }

    let (g1, g2) = split_two_colors(graph, color1, color2)?;
    for sub in [&g1, &g2] {
        if sub.is_connected() {
            log::debug!("color {} subgraph is connected", sub.color());
            return Ok(SolutionVerdict::ConnectedColorClass { color: sub.color() });
        }
    }

    match joined_edge_two_colors(graph, &g1, &g2)? {
        Some(edge) => Ok(SolutionVerdict::EndpointsJoined { edge }),
        None => Ok(SolutionVerdict::Correct),
    }
}

/// Tells whether a graph colored with `color1` and `color2` is an accepted
/// no-lonely-color solution.
///
/// # Example
/// ```
/// use nolonely::graph::ColoredGraph;
/// use nolonely::validate::is_solution_correct;
///
/// // 4-cycle with alternating colors
/// let g = ColoredGraph::from_edges(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 0, 2)]).unwrap();
/// assert!(is_solution_correct(&g, 1, 2).unwrap());
/// ```
pub fn is_solution_correct(graph: &ColoredGraph, color1: Color, color2: Color) -> Result<bool> {
    Ok(check_solution(graph, color1, color2)?.is_correct())
}

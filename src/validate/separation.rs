use crate::error::{Error, Result};
use crate::graph::{Color, ColorSubgraph, ColoredGraph, Components, Edge};

/// `true` iff neither single-color subgraph is connected.
pub fn one_color_subgraphs_disconnected(g1: &ColorSubgraph, g2: &ColorSubgraph) -> bool {
    !g1.is_connected() && !g2.is_connected()
}

/// First edge of `color` whose endpoints share a component of `components`.
pub fn joined_edge(graph: &ColoredGraph, components: &Components, color: Color) -> Option<Edge> {
    let joined = graph
        .edges()
        .filter(|edge| edge.label == color)
        .find(|edge| components.same_component(edge.u, edge.v));
    if let Some(edge) = joined {
        log::debug!("edge {} has both endpoints in one component", edge);
    }
    joined
}

/// Checks that every edge of `color` has its endpoints in different
/// components of `components`: either the subgraph of another color
/// ([`ColorSubgraph::partition`]) or the graph with `color` deleted
/// ([`ColoredGraph::components_without`]). Edges with an endpoint outside
/// the partition pass.
pub fn endpoints_separated(graph: &ColoredGraph, components: &Components, color: Color) -> bool {
    joined_edge(graph, components, color).is_none()
}

/// Two-color form of [`joined_edge`]: every edge of `g1`'s color is checked
/// against the components of `g2`, and vice versa.
///
/// # Errors
/// `UnexpectedColor` for the first edge labeled with neither color.
pub fn joined_edge_two_colors(
    graph: &ColoredGraph,
    g1: &ColorSubgraph,
    g2: &ColorSubgraph,
) -> Result<Option<Edge>> {
    for edge in graph.edges() {
        let other = if edge.label == g1.color() {
            g2
        } else if edge.label == g2.color() {
            g1
        } else {
            return Err(Error::UnexpectedColor {
                u: edge.u,
                v: edge.v,
                label: edge.label,
            });
        };

        if other.partition().same_component(edge.u, edge.v) {
            log::debug!(
                "edge {} has both endpoints in one component of color {}",
                edge,
                other.color()
            );
            return Ok(Some(edge));
        }
    }
    Ok(None)
}

pub fn endpoints_separated_two_colors(
    graph: &ColoredGraph,
    g1: &ColorSubgraph,
    g2: &ColorSubgraph,
) -> Result<bool> {
    Ok(joined_edge_two_colors(graph, g1, g2)?.is_none())
}

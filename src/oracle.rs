//! # Coloring Oracle
//!
//! The checks a coloring search runs after assigning a color to one edge.
//! The oracle never picks colors: it reports whether the current partial
//! coloring can still be extended and, when a lonely-color cycle remains,
//! which uncolored edges the search should look at next.
//!
//! ## Example
//! ```
//! use nolonely::graph::ColoredGraph;
//! use nolonely::oracle::{Assessment, ColoringOracle};
//!
//! let mut g = ColoredGraph::new(3);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 0).unwrap();
//!
//! let oracle = ColoringOracle::new(vec![1, 2]);
//! g.set_label(0, 1, 1).unwrap();
//! match oracle.assess(&g, (0, 1)).unwrap() {
//!     Assessment::Lonely(found) => assert_eq!(found.uncolored.len(), 2),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use crate::config::VerifierConfig;
use crate::cycles::{
    cycle_closed_by, monochromatic_cycle_lengths, scan_for_lonely_edges, CycleLengths, LonelyCycle,
};
use crate::error::{Error, Result};
use crate::graph::{Color, ColoredGraph, Edge, Vertex, UNCOLORED};
use crate::validate::overloaded_endpoint;

/// Verdict on a partial coloring right after one edge was colored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment {
    /// No check failed and no cycle is left with a lonely color.
    Extendable,
    /// `vertex` now has `degree` edges of the new color, above the bound.
    DegreeExceeded { vertex: Vertex, degree: usize },
    /// The edge closed a monochromatic cycle whose length differs from
    /// another cycle of the same color.
    MixedCycleLengths { color: Color, first: usize, other: usize },
    /// Some cycle carries exactly one edge of a color. Its uncolored edges
    /// are the candidates to color next; with none left the branch is dead.
    Lonely(LonelyCycle),
}

impl Assessment {
    pub fn is_extendable(&self) -> bool {
        matches!(self, Assessment::Extendable)
    }

    /// Uncolored edges the search should prioritize. Empty unless the
    /// verdict is [`Assessment::Lonely`].
    pub fn candidates(&self) -> &[Edge] {
        match self {
            Assessment::Lonely(found) => &found.uncolored,
            _ => &[],
        }
    }
}

/// Runs the per-assignment checks for a fixed set of active colors.
#[derive(Debug, Clone)]
pub struct ColoringOracle {
    colors: Vec<Color>,
    config: VerifierConfig,
}

impl ColoringOracle {
    /// Creates an oracle for the given active colors, with default bounds.
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            config: VerifierConfig::default(),
        }
    }

    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Assesses `graph` after the edge `(u, v)` received its current label.
    ///
    /// Checks, in order: the color-degree bound at both endpoints, the
    /// monochromatic cycle the edge may have closed (its length must match
    /// the other cycles of that color), and finally every active color for a
    /// lonely-color cycle.
    ///
    /// # Errors
    /// `NoSuchVertex`/`NoSuchEdge` for an unknown edge, `InvalidInput` if the
    /// edge is still uncolored.
    pub fn assess(&self, graph: &ColoredGraph, (u, v): (Vertex, Vertex)) -> Result<Assessment> {
        let color = graph.label(u, v)?;
        if color == UNCOLORED {
            return Err(Error::invalid_input(format!(
                "edge ({}, {}) has not been colored",
                u, v
            )));
        }

        if let Some((vertex, degree)) = overloaded_endpoint(graph, (u, v), color, &self.config)? {
            return Ok(Assessment::DegreeExceeded { vertex, degree });
        }

        if cycle_closed_by(graph, (u, v), color)?.is_some() {
            if let CycleLengths::Mixed { first, other } = monochromatic_cycle_lengths(graph, color) {
                return Ok(Assessment::MixedCycleLengths { color, first, other });
            }
        }

        for &active in &self.colors {
            if let Some(found) = scan_for_lonely_edges(graph, active) {
                return Ok(Assessment::Lonely(found));
            }
        }

        log::trace!("coloring ({}, {}) with {} keeps the graph extendable", u, v, color);
        Ok(Assessment::Extendable)
    }
}

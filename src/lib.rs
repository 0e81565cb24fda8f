//! Verifier for "no lonely color" edge colorings.
//!
//! A simple cycle is valid when every color on its edges appears either not
//! at all or at least twice. The [`cycles`] module searches for cycles that
//! break this rule (and for monochromatic cycles), [`validate`] holds the
//! structural checks a finished two-coloring must pass, and [`oracle`]
//! bundles the per-assignment checks a coloring search runs.

pub mod config;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod oracle;
pub mod validate;

pub use config::VerifierConfig;
pub use error::{Error, Result};
pub use graph::{
    find_next_uncolored_edge, Color, ColorSubgraph, ColoredGraph, Components, Edge, Vertex,
    UNCOLORED,
};
pub use oracle::{Assessment, ColoringOracle};

use thiserror::Error;

use crate::graph::{Color, Vertex};

/// Errors raised when a query names something the graph does not contain,
/// or when a coloring breaks an invariant the caller promised to uphold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("vertex {0} does not exist")]
    NoSuchVertex(Vertex),

    #[error("no edge between {0} and {1}")]
    NoSuchEdge(Vertex, Vertex),

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(Vertex),

    #[error("edge between {0} and {1} already exists")]
    DuplicateEdge(Vertex, Vertex),

    #[error("edge ({u}, {v}) carries unexpected color {label}")]
    UnexpectedColor { u: Vertex, v: Vertex, label: Color },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(Error::NoSuchEdge(2, 5).to_string(), "no edge between 2 and 5");
        assert_eq!(
            Error::UnexpectedColor { u: 0, v: 1, label: 7 }.to_string(),
            "edge (0, 1) carries unexpected color 7"
        );
        assert_eq!(
            Error::invalid_input("colors must differ"),
            Error::InvalidInput("colors must differ".to_string())
        );
    }
}

//! Error types for graph construction.

/// Errors that can occur while building an aisle graph.
///
/// Every variant describes a corrupt topology. These are configuration
/// errors: they are reported once, at start-up, and never mid-traversal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// The graph has no nodes.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// Two nodes share the same id.
    #[error("duplicate node id {0:?}")]
    DuplicateNode(String),

    /// A node coordinate is NaN or infinite.
    #[error("node {id:?} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending node id.
        id: String,
    },

    /// An edge references a node id that was never declared.
    #[error("edge {edge} references unknown node {id:?}")]
    UnknownEdgeEndpoint {
        /// Position of the edge in declaration order (0-based).
        edge: usize,
        /// The unknown node id.
        id: String,
    },

    /// An edge connects a node to itself.
    #[error("edge {edge} is a self-loop on node {id:?}")]
    SelfLoop {
        /// Position of the edge in declaration order (0-based).
        edge: usize,
        /// The node id on both ends of the edge.
        id: String,
    },

    /// The graph has more nodes than a [`NodeIndex`](crate::NodeIndex) can address.
    #[error("graph has {0} nodes, exceeding the index capacity")]
    TooManyNodes(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_endpoint_display() {
        let error = GraphError::UnknownEdgeEndpoint {
            edge: 3,
            id: "Z9".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("edge 3"));
        assert!(msg.contains("\"Z9\""));
    }

    #[test]
    fn test_self_loop_display() {
        let error = GraphError::SelfLoop {
            edge: 0,
            id: "A".to_string(),
        };
        assert!(error.to_string().contains("self-loop"));
    }

    #[test]
    fn test_empty_graph_display() {
        assert!(GraphError::EmptyGraph.to_string().contains("at least one node"));
    }
}

//! Static layout configuration.
//!
//! A [`GraphLayout`] is the plain-data form of an aisle graph as it appears
//! in start-up configuration. With the `serde` feature enabled it can be read
//! from JSON, TOML, or any other serde format:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "A", "x": 0.0, "y": 0.0 },
//!     { "id": "B", "x": 50.0, "y": 0.0 }
//!   ],
//!   "edges": [["A", "B"]]
//! }
//! ```

use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::Node;

/// One node entry of a layout file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSpec {
    /// Node id.
    pub id: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl NodeSpec {
    /// Creates a node entry.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }
}

/// Node and edge declarations for an aisle graph.
///
/// # Example
///
/// ```
/// use aisle_graph::{GraphLayout, NodeSpec};
///
/// let layout = GraphLayout::new()
///     .with_node(NodeSpec::new("A", 0.0, 0.0))
///     .with_node(NodeSpec::new("B", 50.0, 0.0))
///     .with_edge("A", "B");
///
/// let graph = layout.into_graph()?;
/// assert_eq!(graph.len(), 2);
/// # Ok::<(), aisle_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphLayout {
    /// Nodes in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nodes: Vec<NodeSpec>,
    /// Undirected edges in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub edges: Vec<(String, String)>,
}

impl GraphLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node entry.
    #[must_use]
    pub fn with_node(mut self, node: NodeSpec) -> Self {
        self.nodes.push(node);
        self
    }

    /// Appends an edge entry.
    #[must_use]
    pub fn with_edge(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edges.push((a.into(), b.into()));
        self
    }

    /// Validates the layout and builds the graph.
    ///
    /// # Errors
    ///
    /// See [`Graph::build`].
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        Graph::from_layout(self)
    }
}

impl Graph {
    /// Builds a graph from a layout.
    ///
    /// # Errors
    ///
    /// See [`Graph::build`].
    pub fn from_layout(layout: GraphLayout) -> Result<Self, GraphError> {
        let nodes = layout
            .nodes
            .into_iter()
            .map(|spec| Node::new(spec.id, spec.x, spec.y))
            .collect();
        Self::build(nodes, layout.edges)
    }

    /// Returns the layout that reproduces this graph.
    ///
    /// Each edge is emitted once, in its original declaration order.
    #[must_use]
    pub fn to_layout(&self) -> GraphLayout {
        let nodes = self
            .nodes()
            .iter()
            .map(|n| NodeSpec::new(n.id().as_str(), n.position().x, n.position().y))
            .collect();
        GraphLayout {
            nodes,
            edges: self.declared_edges(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn corridor() -> GraphLayout {
        GraphLayout::new()
            .with_node(NodeSpec::new("A", 0.0, 0.0))
            .with_node(NodeSpec::new("B", 50.0, 0.0))
            .with_node(NodeSpec::new("C", 100.0, 0.0))
            .with_edge("A", "B")
            .with_edge("B", "C")
    }

    #[test]
    fn test_layout_builds_graph() {
        let graph = corridor().into_graph().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.coordinates("C"), Some((100.0, 0.0)));
    }

    #[test]
    fn test_layout_propagates_errors() {
        let layout = corridor().with_edge("C", "D");
        assert!(matches!(
            layout.into_graph(),
            Err(GraphError::UnknownEdgeEndpoint { edge: 2, .. })
        ));
    }

    #[test]
    fn test_to_layout_reproduces_declarations() {
        let layout = corridor();
        let graph = layout.clone().into_graph().unwrap();
        assert_eq!(graph.to_layout(), layout);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "nodes": [
                { "id": "A", "x": 0.0, "y": 0.0 },
                { "id": "B", "x": 50.0, "y": 0.0 }
            ],
            "edges": [["A", "B"]]
        }"#;
        let layout: GraphLayout = serde_json::from_str(json).unwrap();
        let graph = layout.into_graph().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.neighbors("A").unwrap().len(), 1);
    }
}

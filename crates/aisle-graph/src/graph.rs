//! The aisle graph store.

use hashbrown::HashMap;
use nalgebra::Point2;
use tracing::info;

use crate::error::GraphError;
use crate::node::{Node, NodeId, NodeIndex};

/// Immutable aisle topology: nodes with coordinates and undirected edges.
///
/// Node ids are mapped to dense [`NodeIndex`] values once, at construction.
/// Each node's neighbor list preserves edge-declaration order, which is the
/// tie-break order used by breadth-first search.
///
/// A `Graph` is never mutated after it is built, so it can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
///
/// let graph = Graph::build(
///     vec![
///         Node::new("TL", 0.0, 0.0),
///         Node::new("TR", 100.0, 0.0),
///         Node::new("BR", 100.0, 100.0),
///         Node::new("BL", 0.0, 100.0),
///     ],
///     [("TL", "TR"), ("TR", "BR"), ("BR", "BL"), ("BL", "TL")],
/// )?;
///
/// let neighbors: Vec<_> = graph
///     .neighbors("TL")
///     .unwrap_or_default()
///     .iter()
///     .map(|&n| graph.id(n).as_str())
///     .collect();
/// assert_eq!(neighbors, ["TR", "BL"]);
/// assert_eq!(graph.coordinates("BR"), Some((100.0, 100.0)));
/// # Ok::<(), aisle_graph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, NodeIndex>,
    adjacency: Vec<Vec<NodeIndex>>,
    edges: Vec<(NodeIndex, NodeIndex)>,
}

impl Graph {
    /// Builds a graph from a node list and an edge list.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if the node list is empty, a node id is
    /// duplicated, a coordinate is not finite, or an edge is a self-loop or
    /// references an undeclared node.
    pub fn build<I, A, B>(nodes: Vec<Node>, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut builder = GraphBuilder::with_capacity(nodes.len());
        for node in nodes {
            builder = builder.add_node(node);
        }
        for (a, b) in edges {
            builder = builder.add_edge(a.as_ref(), b.as_ref());
        }
        builder.build()
    }

    /// Returns a builder for incremental construction.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    ///
    /// Always `false` for a graph produced by [`Graph::build`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of declared edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the declared edges in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[(NodeIndex, NodeIndex)] {
        &self.edges
    }

    pub(crate) fn declared_edges(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .map(|&(a, b)| (self.id(a).to_string(), self.id(b).to_string()))
            .collect()
    }

    /// Returns all nodes in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates over every node index in declaration order.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = NodeIndex> + '_ {
        #[allow(clippy::cast_possible_truncation)]
        (0..self.nodes.len()).map(|i| NodeIndex::new(i as u32))
    }

    /// Looks up the dense index of a node id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Returns `true` if the graph declares a node with this id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the node at an index.
    ///
    /// # Panics
    ///
    /// Panics if the index was issued by a different, larger graph.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.index()]
    }

    /// Returns the id of the node at an index.
    #[must_use]
    pub fn id(&self, index: NodeIndex) -> &NodeId {
        self.node(index).id()
    }

    /// Returns the position of the node at an index.
    #[must_use]
    pub fn position(&self, index: NodeIndex) -> Point2<f64> {
        self.node(index).position()
    }

    /// Returns the coordinates of a node by id.
    #[must_use]
    pub fn coordinates(&self, id: &str) -> Option<(f64, f64)> {
        self.index_of(id).map(|i| self.node(i).coordinates())
    }

    /// Returns the neighbors of a node by id, in edge-declaration order.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Option<&[NodeIndex]> {
        self.index_of(id).map(|i| self.neighbors_of(i))
    }

    /// Returns the neighbors of the node at an index, in edge-declaration order.
    #[must_use]
    pub fn neighbors_of(&self, index: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[index.index()]
    }

    /// Returns `true` if an edge joins the two nodes.
    #[must_use]
    pub fn are_adjacent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.neighbors_of(a).contains(&b)
    }
}

/// Incremental builder for [`Graph`].
///
/// Validation is deferred to [`GraphBuilder::build`], which reports the
/// first problem found.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
///
/// let graph = Graph::builder()
///     .add_node(Node::new("A", 0.0, 0.0))
///     .add_node(Node::new("B", 10.0, 0.0))
///     .add_edge("A", "B")
///     .build()?;
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), aisle_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::new(),
        }
    }

    /// Declares a node.
    #[must_use]
    pub fn add_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Declares an undirected edge between two node ids.
    #[must_use]
    pub fn add_edge(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edges.push((a.into(), b.into()));
        self
    }

    /// Validates the declarations and builds the graph.
    ///
    /// # Errors
    ///
    /// See [`Graph::build`].
    pub fn build(self) -> Result<Graph, GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if u32::try_from(self.nodes.len()).is_err() {
            return Err(GraphError::TooManyNodes(self.nodes.len()));
        }

        let mut index = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if !node.is_finite() {
                return Err(GraphError::NonFiniteCoordinate {
                    id: node.id().to_string(),
                });
            }
            #[allow(clippy::cast_possible_truncation)]
            let idx = NodeIndex::new(i as u32);
            if index.insert(node.id().clone(), idx).is_some() {
                return Err(GraphError::DuplicateNode(node.id().to_string()));
            }
        }

        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        let mut edges = Vec::with_capacity(self.edges.len());
        for (edge, (a, b)) in self.edges.iter().enumerate() {
            let lookup = |id: &String| {
                index
                    .get(id.as_str())
                    .copied()
                    .ok_or_else(|| GraphError::UnknownEdgeEndpoint {
                        edge,
                        id: id.clone(),
                    })
            };
            let ia = lookup(a)?;
            let ib = lookup(b)?;
            if ia == ib {
                return Err(GraphError::SelfLoop {
                    edge,
                    id: a.clone(),
                });
            }
            adjacency[ia.index()].push(ib);
            adjacency[ib.index()].push(ia);
            edges.push((ia, ib));
        }

        info!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "Built aisle graph"
        );

        Ok(Graph {
            nodes: self.nodes,
            index,
            adjacency,
            edges,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Graph {
        Graph::build(
            vec![
                Node::new("TL", 0.0, 0.0),
                Node::new("TR", 100.0, 0.0),
                Node::new("BR", 100.0, 100.0),
                Node::new("BL", 0.0, 100.0),
            ],
            [("TL", "TR"), ("TR", "BR"), ("BR", "BL"), ("BL", "TL")],
        )
        .unwrap()
    }

    fn ids<'a>(graph: &'a Graph, indices: &[NodeIndex]) -> Vec<&'a str> {
        indices.iter().map(|&i| graph.id(i).as_str()).collect()
    }

    #[test]
    fn test_build_square() {
        let graph = square();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(!graph.is_empty());
        assert!(graph.contains("BL"));
        assert!(!graph.contains("XX"));
    }

    #[test]
    fn test_neighbors_follow_edge_order() {
        let graph = square();
        assert_eq!(ids(&graph, graph.neighbors("TL").unwrap()), ["TR", "BL"]);
        assert_eq!(ids(&graph, graph.neighbors("TR").unwrap()), ["TL", "BR"]);
        assert_eq!(ids(&graph, graph.neighbors("BR").unwrap()), ["TR", "BL"]);
        assert_eq!(ids(&graph, graph.neighbors("BL").unwrap()), ["BR", "TL"]);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = square();
        for a in graph.indices() {
            for &b in graph.neighbors_of(a) {
                assert!(graph.are_adjacent(b, a));
            }
        }
    }

    #[test]
    fn test_unknown_node_lookups() {
        let graph = square();
        assert!(graph.neighbors("nope").is_none());
        assert!(graph.coordinates("nope").is_none());
        assert!(graph.index_of("nope").is_none());
    }

    #[test]
    fn test_indices_follow_declaration_order() {
        let graph = square();
        let names: Vec<_> = graph.indices().map(|i| graph.id(i).as_str()).collect();
        assert_eq!(names, ["TL", "TR", "BR", "BL"]);
        assert_eq!(graph.position(graph.index_of("BR").unwrap()), Point2::new(100.0, 100.0));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let result = Graph::build(Vec::new(), Vec::<(&str, &str)>::new());
        assert_eq!(result.unwrap_err(), GraphError::EmptyGraph);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let result = Graph::build(
            vec![Node::new("A", 0.0, 0.0), Node::new("A", 1.0, 1.0)],
            Vec::<(&str, &str)>::new(),
        );
        assert_eq!(result.unwrap_err(), GraphError::DuplicateNode("A".into()));
    }

    #[test]
    fn test_unknown_edge_endpoint_rejected() {
        let result = Graph::build(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 1.0, 0.0)],
            [("A", "B"), ("B", "C")],
        );
        assert_eq!(
            result.unwrap_err(),
            GraphError::UnknownEdgeEndpoint {
                edge: 1,
                id: "C".into()
            }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = Graph::build(vec![Node::new("A", 0.0, 0.0)], [("A", "A")]);
        assert!(matches!(result, Err(GraphError::SelfLoop { edge: 0, .. })));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = Graph::build(
            vec![Node::new("A", f64::NAN, 0.0)],
            Vec::<(&str, &str)>::new(),
        );
        assert!(matches!(
            result,
            Err(GraphError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_isolated_node_has_no_neighbors() {
        let graph = Graph::build(vec![Node::new("solo", 5.0, 5.0)], Vec::<(&str, &str)>::new())
            .unwrap();
        assert!(graph.neighbors("solo").unwrap().is_empty());
    }

    #[test]
    fn test_builder_matches_build() {
        let graph = Graph::builder()
            .add_node(Node::new("A", 0.0, 0.0))
            .add_node(Node::new("B", 10.0, 0.0))
            .add_node(Node::new("C", 20.0, 0.0))
            .add_edge("A", "B")
            .add_edge("B", "C")
            .build()
            .unwrap();
        assert_eq!(ids(&graph, graph.neighbors("B").unwrap()), ["A", "C"]);
    }

    #[test]
    fn test_graph_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }
}

//! Mapping slot coordinates onto graph nodes.
//!
//! Slots sit on shelves, not on aisle nodes, so every stop is snapped to its
//! nearest node before pathfinding. The [`NodeLocator`] trait is the seam for
//! swapping the linear scan for a spatial index on large floor plans.

use aisle_graph::{Graph, GraphError, NodeId, NodeIndex, Point2};
use pick_types::{RoutingError, Slot};

/// Strategy for finding the graph node closest to a point.
pub trait NodeLocator {
    /// Returns the node nearest to `point` by Euclidean distance.
    ///
    /// Ties go to the node declared first. Returns `None` only for an empty graph.
    /// The returned index must belong to `graph`; planners reject any other
    /// index with [`RoutingError::UnknownNode`].
    fn nearest(&self, graph: &Graph, point: &Point2<f64>) -> Option<NodeIndex>;
}

/// Exhaustive scan over every node. O(nodes) per query.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node, Point2};
/// use pick_route::locate::{LinearScan, NodeLocator};
///
/// let graph = Graph::build(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 10.0, 0.0)],
///     [("A", "B")],
/// )?;
///
/// let nearest = LinearScan.nearest(&graph, &Point2::new(8.0, 3.0));
/// assert_eq!(nearest, graph.index_of("B"));
/// # Ok::<(), aisle_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearScan;

impl NodeLocator for LinearScan {
    fn nearest(&self, graph: &Graph, point: &Point2<f64>) -> Option<NodeIndex> {
        // min_by keeps the first of several equal minima
        graph.indices().min_by(|&a, &b| {
            let da = nalgebra::distance_squared(&graph.position(a), point);
            let db = nalgebra::distance_squared(&graph.position(b), point);
            da.total_cmp(&db)
        })
    }
}

/// Returns the id of the node nearest to a slot.
///
/// # Errors
///
/// Returns [`RoutingError::Graph`] wrapping [`GraphError::EmptyGraph`] if the
/// graph has no nodes. Graphs built through [`Graph::build`] never do.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
/// use pick_route::locate::nearest_node;
/// use pick_types::Slot;
///
/// let graph = Graph::build(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 100.0, 0.0)],
///     [("A", "B")],
/// )?;
///
/// let slot = Slot::new("S-7", 70.0, 15.0);
/// assert_eq!(nearest_node(&graph, &slot)?, "B");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn nearest_node<'g>(graph: &'g Graph, slot: &Slot) -> Result<&'g NodeId, RoutingError> {
    locate_with(&LinearScan, graph, slot).map(|i| graph.id(i))
}

pub(crate) fn locate_with<L: NodeLocator + ?Sized>(
    locator: &L,
    graph: &Graph,
    slot: &Slot,
) -> Result<NodeIndex, RoutingError> {
    let index = locator
        .nearest(graph, slot.position())
        .ok_or(RoutingError::Graph(GraphError::EmptyGraph))?;
    if index.index() >= graph.len() {
        return Err(RoutingError::UnknownNode(index.to_string()));
    }
    Ok(index)
}

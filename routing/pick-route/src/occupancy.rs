//! Worker proximity checks.
//!
//! A node is *occupied* while any worker stands strictly closer to it than
//! the safety radius. Occupancy is a property of one worker snapshot; it is
//! recomputed on every call and never cached.
//!
//! # Example
//!
//! ```
//! use aisle_graph::{Graph, Node};
//! use pick_route::occupancy::is_occupied;
//! use pick_types::Worker;
//!
//! let graph = Graph::build(
//!     vec![Node::new("A", 0.0, 0.0), Node::new("B", 100.0, 0.0)],
//!     [("A", "B")],
//! )?;
//! let workers = [Worker::new("w-1", 10.0, 0.0)];
//!
//! assert!(is_occupied(&graph, "A", &workers, 30.0));
//! assert!(!is_occupied(&graph, "B", &workers, 30.0));
//! # Ok::<(), aisle_graph::GraphError>(())
//! ```

use aisle_graph::{Graph, NodeIndex};
use pick_types::Worker;

/// Returns `true` if any worker is strictly within `safety_radius` of the node.
///
/// An id the graph does not contain is never occupied.
#[must_use]
pub fn is_occupied(graph: &Graph, node: &str, workers: &[Worker], safety_radius: f64) -> bool {
    graph.index_of(node).is_some_and(|index| {
        OccupancyOracle::new(graph, workers, safety_radius).is_occupied(index)
    })
}

/// Occupancy queries against one worker snapshot.
///
/// Binds the graph, the snapshot, and the radius so a search can ask about
/// many nodes without re-passing them.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
/// use pick_route::occupancy::OccupancyOracle;
/// use pick_types::Worker;
///
/// let graph = Graph::build(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 100.0, 0.0)],
///     [("A", "B")],
/// )?;
/// let workers = [Worker::new("w-1", 95.0, 5.0)];
/// let oracle = OccupancyOracle::new(&graph, &workers, 30.0);
///
/// let blocked: Vec<_> = oracle
///     .blocked_nodes()
///     .map(|i| graph.id(i).as_str())
///     .collect();
/// assert_eq!(blocked, ["B"]);
/// # Ok::<(), aisle_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OccupancyOracle<'a> {
    graph: &'a Graph,
    workers: &'a [Worker],
    safety_radius: f64,
}

impl<'a> OccupancyOracle<'a> {
    /// Creates an oracle for a worker snapshot.
    #[must_use]
    pub const fn new(graph: &'a Graph, workers: &'a [Worker], safety_radius: f64) -> Self {
        Self {
            graph,
            workers,
            safety_radius,
        }
    }

    /// Returns the safety radius.
    #[must_use]
    pub const fn safety_radius(&self) -> f64 {
        self.safety_radius
    }

    /// Returns the worker snapshot.
    #[must_use]
    pub const fn workers(&self) -> &'a [Worker] {
        self.workers
    }

    /// Returns `true` if a worker is strictly within the safety radius of the node.
    ///
    /// # Panics
    ///
    /// Panics if the index was issued by a different, larger graph.
    #[must_use]
    pub fn is_occupied(&self, node: NodeIndex) -> bool {
        let position = self.graph.position(node);
        self.workers
            .iter()
            .any(|w| w.distance_to(&position) < self.safety_radius)
    }

    /// Returns `true` if no worker is within the safety radius of the node.
    #[must_use]
    pub fn is_free(&self, node: NodeIndex) -> bool {
        !self.is_occupied(node)
    }

    /// Iterates over every occupied node, in node-declaration order.
    pub fn blocked_nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.indices().filter(|&i| self.is_occupied(i))
    }
}

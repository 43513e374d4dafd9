//! Connectivity queries.
//!
//! These answer "could this ever be reached?" independently of workers, which
//! helps tell a disconnected floor plan apart from a temporarily blocked aisle.

use aisle_graph::{Graph, NodeId, NodeIndex};
use pathfinding::prelude::bfs_reach;
use pick_types::RoutingError;

/// Returns every node reachable from `start`, in breadth-first order.
///
/// The result always begins with `start` itself.
///
/// # Errors
///
/// Returns [`RoutingError::UnknownNode`] if `start` is not in the graph.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
/// use pick_route::reach::reachable_from;
///
/// let graph = Graph::build(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 1.0, 0.0), Node::new("Z", 9.0, 9.0)],
///     [("A", "B")],
/// )?;
///
/// let ids: Vec<_> = reachable_from(&graph, "A")?.iter().map(|n| n.as_str()).collect();
/// assert_eq!(ids, ["A", "B"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn reachable_from<'g>(graph: &'g Graph, start: &str) -> Result<Vec<&'g NodeId>, RoutingError> {
    let start = index(graph, start)?;
    Ok(reach(graph, start).map(|i| graph.id(i)).collect())
}

/// Returns `true` if the two nodes lie in the same connected component.
///
/// # Errors
///
/// Returns [`RoutingError::UnknownNode`] if either id is not in the graph.
pub fn same_component(graph: &Graph, a: &str, b: &str) -> Result<bool, RoutingError> {
    let a = index(graph, a)?;
    let b = index(graph, b)?;
    Ok(reach(graph, a).any(|i| i == b))
}

/// Counts the connected components of the graph.
///
/// An isolated node is a component of its own.
#[must_use]
pub fn component_count(graph: &Graph) -> usize {
    let mut seen = vec![false; graph.len()];
    let mut count = 0;
    for node in graph.indices() {
        if seen[node.index()] {
            continue;
        }
        count += 1;
        for member in reach(graph, node) {
            seen[member.index()] = true;
        }
    }
    count
}

fn reach(graph: &Graph, start: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
    bfs_reach(start, move |&n| graph.neighbors_of(n).iter().copied())
}

fn index(graph: &Graph, id: &str) -> Result<NodeIndex, RoutingError> {
    graph
        .index_of(id)
        .ok_or_else(|| RoutingError::UnknownNode(id.to_string()))
}

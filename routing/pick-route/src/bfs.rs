//! Breadth-first shortest paths over the aisle graph.
//!
//! Every edge costs one hop, so the first time BFS dequeues the destination
//! it has found a minimum-hop path. Neighbors are expanded in
//! edge-declaration order and a node's parent is never replaced once set,
//! which makes the result deterministic among equal-length paths.
//!
//! # Example
//!
//! ```
//! use aisle_graph::{Graph, Node};
//! use pick_route::bfs::{shortest_path, shortest_path_avoiding};
//! use pick_types::Worker;
//!
//! let graph = Graph::build(
//!     vec![
//!         Node::new("TL", 0.0, 0.0),
//!         Node::new("TR", 100.0, 0.0),
//!         Node::new("BR", 100.0, 100.0),
//!         Node::new("BL", 0.0, 100.0),
//!     ],
//!     [("TL", "TR"), ("TR", "BR"), ("BR", "BL"), ("BL", "TL")],
//! )?;
//!
//! let route = shortest_path(&graph, "TL", "BR")?.expect("connected");
//! assert_eq!(route.nodes(), ["TL", "TR", "BR"]);
//!
//! // A worker standing on TR forces the other way round
//! let workers = [Worker::new("w-1", 100.0, 0.0)];
//! let route = shortest_path_avoiding(&graph, "TL", "BR", &workers, 30.0)?.expect("detour");
//! assert_eq!(route.nodes(), ["TL", "BL", "BR"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::VecDeque;

use aisle_graph::{Graph, NodeIndex};
use pick_types::{Route, RouteConfig, RoutingError, Worker};
use tracing::debug;

use crate::occupancy::OccupancyOracle;

/// Result of one search, including how much work it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    path: Option<Vec<NodeIndex>>,
    nodes_expanded: usize,
}

impl SearchOutcome {
    /// Returns the node path, or `None` if the destination was unreachable.
    #[must_use]
    pub fn path(&self) -> Option<&[NodeIndex]> {
        self.path.as_deref()
    }

    /// Returns `true` if a path was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the number of nodes dequeued.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Converts the index path into a [`Route`] of node ids.
    #[must_use]
    pub fn into_route(self, graph: &Graph) -> Option<Route> {
        self.path
            .map(|path| Route::from_nodes(path.into_iter().map(|i| graph.id(i).clone())))
    }
}

/// Breadth-first searcher bound to one graph.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
/// use pick_route::bfs::GraphBfs;
///
/// let graph = Graph::build(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 1.0, 0.0), Node::new("C", 2.0, 0.0)],
///     [("A", "B"), ("B", "C")],
/// )?;
///
/// let bfs = GraphBfs::new(&graph).with_max_expansions(100);
/// let route = bfs.find("A", "C")?.expect("path exists");
/// assert_eq!(route.hop_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphBfs<'a> {
    graph: &'a Graph,
    max_expansions: Option<usize>,
}

impl<'a> GraphBfs<'a> {
    /// Creates an unbounded searcher.
    #[must_use]
    pub const fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            max_expansions: None,
        }
    }

    /// Creates a searcher honoring a route configuration's expansion limit.
    #[must_use]
    pub const fn from_config(graph: &'a Graph, config: &RouteConfig) -> Self {
        Self {
            graph,
            max_expansions: config.max_expansions(),
        }
    }

    /// Sets the maximum number of nodes a search may dequeue.
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Returns the graph being searched.
    #[must_use]
    pub const fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Searches by node index, skipping any neighbor for which `blocked` is true.
    ///
    /// `start` itself is never tested against `blocked`. A blocked node is
    /// never marked visited or enqueued, so it cannot appear anywhere in the
    /// path, including as `end`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::ExpansionLimit`] if the search would dequeue
    /// more nodes than the configured limit.
    ///
    /// # Panics
    ///
    /// Panics if either index was issued by a different, larger graph.
    pub fn search<F>(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        mut blocked: F,
    ) -> Result<SearchOutcome, RoutingError>
    where
        F: FnMut(NodeIndex) -> bool,
    {
        if start == end {
            return Ok(SearchOutcome {
                path: Some(vec![start]),
                nodes_expanded: 0,
            });
        }

        let mut visited = vec![false; self.graph.len()];
        let mut parent: Vec<Option<NodeIndex>> = vec![None; self.graph.len()];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;
        let mut nodes_expanded = 0usize;

        while let Some(current) = queue.pop_front() {
            if let Some(limit) = self.max_expansions {
                if nodes_expanded >= limit {
                    return Err(RoutingError::ExpansionLimit { limit });
                }
            }
            nodes_expanded += 1;

            if current == end {
                let path = reconstruct(&parent, end);
                debug!(
                    start = %self.graph.id(start),
                    end = %self.graph.id(end),
                    hops = path.len() - 1,
                    nodes_expanded,
                    "Shortest path found"
                );
                return Ok(SearchOutcome {
                    path: Some(path),
                    nodes_expanded,
                });
            }

            for &next in self.graph.neighbors_of(current) {
                if visited[next.index()] || blocked(next) {
                    continue;
                }
                visited[next.index()] = true;
                parent[next.index()] = Some(current);
                queue.push_back(next);
            }
        }

        debug!(
            start = %self.graph.id(start),
            end = %self.graph.id(end),
            nodes_expanded,
            "No path found"
        );
        Ok(SearchOutcome {
            path: None,
            nodes_expanded,
        })
    }

    /// Finds a minimum-hop route between two node ids, ignoring workers.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownNode`] if either id is not in the graph,
    /// or [`RoutingError::ExpansionLimit`] if the search runs out of budget.
    pub fn find(&self, start: &str, end: &str) -> Result<Option<Route>, RoutingError> {
        let (s, e) = self.resolve(start, end)?;
        Ok(self.search(s, e, |_| false)?.into_route(self.graph))
    }

    /// Finds a minimum-hop route that never steps onto an occupied node.
    ///
    /// # Errors
    ///
    /// See [`GraphBfs::find`].
    pub fn find_avoiding(
        &self,
        start: &str,
        end: &str,
        oracle: &OccupancyOracle<'_>,
    ) -> Result<Option<Route>, RoutingError> {
        let (s, e) = self.resolve(start, end)?;
        Ok(self
            .search(s, e, |n| oracle.is_occupied(n))?
            .into_route(self.graph))
    }

    fn resolve(&self, start: &str, end: &str) -> Result<(NodeIndex, NodeIndex), RoutingError> {
        let lookup = |id: &str| {
            self.graph
                .index_of(id)
                .ok_or_else(|| RoutingError::UnknownNode(id.to_string()))
        };
        Ok((lookup(start)?, lookup(end)?))
    }
}

/// Walks parent links back from `end` and returns the path in forward order.
fn reconstruct(parent: &[Option<NodeIndex>], end: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(previous) = parent[current.index()] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Minimum-hop route between two nodes, ignoring workers.
///
/// Returns `Ok(None)` when `end` lies in a different connected component.
///
/// # Errors
///
/// Returns [`RoutingError::UnknownNode`] if either id is not in the graph.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<Option<Route>, RoutingError> {
    GraphBfs::new(graph).find(start, end)
}

/// Minimum-hop route that avoids every node within `safety_radius` of a worker.
///
/// `start` is exempt from the check. An occupied `end` is unreachable.
///
/// # Errors
///
/// Returns [`RoutingError::UnknownNode`] if either id is not in the graph.
pub fn shortest_path_avoiding(
    graph: &Graph,
    start: &str,
    end: &str,
    workers: &[Worker],
    safety_radius: f64,
) -> Result<Option<Route>, RoutingError> {
    let oracle = OccupancyOracle::new(graph, workers, safety_radius);
    GraphBfs::new(graph).find_avoiding(start, end, &oracle)
}

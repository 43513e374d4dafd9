//! Route types.
//!
//! This module defines the [`Route`] type, the ordered node sequence a worker
//! walks, and [`RouteStats`], diagnostics about how it was computed.
//!
//! # Example
//!
//! ```
//! use pick_types::Route;
//!
//! let mut route = Route::from_nodes(["A", "B"]);
//! route.append_segment(Route::from_nodes(["B", "C", "D"]));
//!
//! assert_eq!(route.len(), 4);
//! assert_eq!(route.hop_count(), 3);
//! ```

use std::time::Duration;

use aisle_graph::{Graph, NodeId, Point2};

use crate::error::RoutingError;

/// Statistics about a planning call.
///
/// # Example
///
/// ```
/// use pick_types::RouteStats;
/// use std::time::Duration;
///
/// let stats = RouteStats::new()
///     .with_segments(3)
///     .with_nodes_expanded(42)
///     .with_elapsed(Duration::from_micros(18));
///
/// assert_eq!(stats.segments(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStats {
    /// Number of shortest-path searches run.
    segments: usize,
    /// Total nodes dequeued across all searches.
    nodes_expanded: usize,
    /// Wall time spent planning.
    time_elapsed: Duration,
}

impl RouteStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: 0,
            nodes_expanded: 0,
            time_elapsed: Duration::ZERO,
        }
    }

    /// Sets the number of segments searched.
    #[must_use]
    pub const fn with_segments(mut self, count: usize) -> Self {
        self.segments = count;
        self
    }

    /// Sets the number of nodes expanded.
    #[must_use]
    pub const fn with_nodes_expanded(mut self, count: usize) -> Self {
        self.nodes_expanded = count;
        self
    }

    /// Sets the time elapsed.
    #[must_use]
    pub const fn with_elapsed(mut self, duration: Duration) -> Self {
        self.time_elapsed = duration;
        self
    }

    /// Returns the number of segments searched.
    #[must_use]
    pub const fn segments(&self) -> usize {
        self.segments
    }

    /// Returns the total number of nodes expanded.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the time spent planning.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.time_elapsed
    }
}

/// An ordered sequence of graph nodes to walk.
///
/// A route never holds the same node id twice in a row. It is empty only
/// when planned from an empty pick list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    /// Creates an empty route.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a route holding a single node.
    #[must_use]
    pub fn single(node: impl Into<NodeId>) -> Self {
        Self {
            nodes: vec![node.into()],
        }
    }

    /// Creates a route from a node sequence.
    ///
    /// Consecutive repeats are collapsed.
    ///
    /// # Example
    ///
    /// ```
    /// use pick_types::Route;
    ///
    /// let route = Route::from_nodes(["A", "A", "B", "B", "A"]);
    /// assert_eq!(route.nodes(), ["A", "B", "A"]);
    /// ```
    #[must_use]
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        let mut nodes: Vec<NodeId> = nodes.into_iter().map(Into::into).collect();
        nodes.dedup();
        Self { nodes }
    }

    /// Appends a path segment, dropping its first node when it repeats the
    /// route's current last node.
    pub fn append_segment(&mut self, segment: Self) {
        let seam = matches!(
            (self.nodes.last(), segment.nodes.first()),
            (Some(last), Some(first)) if last == first
        );
        self.nodes
            .extend(segment.nodes.into_iter().skip(usize::from(seam)));
    }

    /// Returns the node ids in walking order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the route has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges walked.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns the first node.
    #[must_use]
    pub fn first(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    /// Returns the last node.
    #[must_use]
    pub fn last(&self) -> Option<&NodeId> {
        self.nodes.last()
    }

    /// Returns `true` if the route visits the node.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }

    /// Iterates over node ids in walking order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    /// Consumes the route, returning its node ids.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Resolves every node to its coordinates, for drawing or animation.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownNode`] if the route names a node the
    /// graph does not contain.
    pub fn waypoints(&self, graph: &Graph) -> Result<Vec<Point2<f64>>, RoutingError> {
        self.nodes
            .iter()
            .map(|id| {
                graph
                    .index_of(id.as_str())
                    .map(|i| graph.position(i))
                    .ok_or_else(|| RoutingError::UnknownNode(id.to_string()))
            })
            .collect()
    }

    /// Total straight-line length of the route's edges.
    ///
    /// # Errors
    ///
    /// See [`Route::waypoints`].
    ///
    /// # Example
    ///
    /// ```
    /// use aisle_graph::{Graph, Node};
    /// use pick_types::Route;
    ///
    /// let graph = Graph::build(
    ///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 3.0, 4.0)],
    ///     [("A", "B")],
    /// )?;
    /// let route = Route::from_nodes(["A", "B"]);
    /// assert!((route.walking_distance(&graph)? - 5.0).abs() < 1e-10);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn walking_distance(&self, graph: &Graph) -> Result<f64, RoutingError> {
        let points = self.waypoints(graph)?;
        Ok(points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum())
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

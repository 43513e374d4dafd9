//! Node identifiers and node values.

use std::borrow::Borrow;
use std::fmt;

use nalgebra::Point2;

/// The public, human-assigned name of a graph node (e.g. `"A3-N"`).
///
/// # Example
///
/// ```
/// use aisle_graph::NodeId;
///
/// let id = NodeId::from("TL");
/// assert_eq!(id.as_str(), "TL");
/// assert_eq!(id, "TL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Dense index of a node inside one [`Graph`](crate::Graph).
///
/// Indices are assigned in node-declaration order when the graph is built,
/// starting at zero. An index is only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(u32);

impl NodeIndex {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the index as a `usize`, suitable for indexing per-node arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point in the aisle graph.
///
/// # Example
///
/// ```
/// use aisle_graph::Node;
///
/// let node = Node::new("TL", 0.0, 100.0);
/// assert_eq!(node.id(), "TL");
/// assert_eq!(node.coordinates(), (0.0, 100.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    position: Point2<f64>,
}

impl Node {
    /// Creates a node from an id and plane coordinates.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            position: Point2::new(x, y),
        }
    }

    /// Creates a node from an id and a point.
    #[must_use]
    pub fn at(id: impl Into<NodeId>, position: Point2<f64>) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    /// Returns the node id.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the node position.
    #[must_use]
    pub const fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Returns the node position as an `(x, y)` pair.
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.position.x, self.position.y)
    }

    /// Euclidean distance from this node to a point.
    #[must_use]
    pub fn distance_to(&self, point: &Point2<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_node_id_conversions() {
        let a = NodeId::from("A");
        let b = NodeId::from("A".to_string());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "A");
        assert_eq!(a.into_inner(), "A");
    }

    #[test]
    fn test_node_distance() {
        let node = Node::new("N", 0.0, 0.0);
        assert_relative_eq!(node.distance_to(&Point2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_node_finite() {
        assert!(Node::new("ok", 1.0, 2.0).is_finite());
        assert!(!Node::new("nan", f64::NAN, 2.0).is_finite());
        assert!(!Node::new("inf", 1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_node_index_display() {
        assert_eq!(NodeIndex::new(7).to_string(), "#7");
        assert_eq!(NodeIndex::new(7).index(), 7);
    }
}

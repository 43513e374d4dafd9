//! Error types for routing operations.
//!
//! This module defines the [`RoutingError`] enum, covering caller contract
//! violations and configuration problems.
//!
//! An unreachable destination is **not** an error. Pathfinding reports it as
//! `Ok(None)` so callers branch on it explicitly.

use aisle_graph::GraphError;

/// Errors that can occur during routing operations.
///
/// # Example
///
/// ```
/// use pick_types::RoutingError;
///
/// let error = RoutingError::UnknownSlot("S-404".to_string());
///
/// assert!(error.to_string().contains("unknown slot"));
/// assert!(error.is_unknown_slot());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RoutingError {
    /// A node id passed to a search does not exist in the graph.
    #[error("unknown node {0:?}")]
    UnknownNode(String),

    /// A pick list references a slot id missing from the catalog.
    #[error("unknown slot {0:?}")]
    UnknownSlot(String),

    /// A slot catalog was given two slots with the same id.
    #[error("duplicate slot id {0:?}")]
    DuplicateSlot(String),

    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A search dequeued more nodes than its configured limit.
    #[error("search exceeded {limit} node expansions")]
    ExpansionLimit {
        /// The configured expansion limit.
        limit: usize,
    },

    /// The aisle graph itself is malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl RoutingError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use pick_types::RoutingError;
    ///
    /// let error = RoutingError::invalid_config("safety radius must be finite");
    /// assert!(error.to_string().contains("safety radius"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an unknown-slot error.
    #[must_use]
    pub const fn is_unknown_slot(&self) -> bool {
        matches!(self, Self::UnknownSlot(_))
    }

    /// Returns `true` if this is an unknown-node error.
    #[must_use]
    pub const fn is_unknown_node(&self) -> bool {
        matches!(self, Self::UnknownNode(_))
    }

    /// Returns `true` if the search gave up after its expansion limit.
    #[must_use]
    pub const fn is_expansion_limit(&self) -> bool {
        matches!(self, Self::ExpansionLimit { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_display() {
        let error = RoutingError::UnknownNode("Q7".to_string());
        assert_eq!(error.to_string(), "unknown node \"Q7\"");
        assert!(error.is_unknown_node());
        assert!(!error.is_unknown_slot());
    }

    #[test]
    fn test_unknown_slot_display() {
        let error = RoutingError::UnknownSlot("S-1".to_string());
        assert!(error.to_string().contains("S-1"));
        assert!(error.is_unknown_slot());
    }

    #[test]
    fn test_expansion_limit_display() {
        let error = RoutingError::ExpansionLimit { limit: 64 };
        assert!(error.to_string().contains("64"));
        assert!(error.is_expansion_limit());
    }

    #[test]
    fn test_graph_error_is_transparent() {
        let error: RoutingError = GraphError::EmptyGraph.into();
        assert_eq!(error.to_string(), GraphError::EmptyGraph.to_string());
    }

    #[test]
    fn test_invalid_config_helper() {
        let error = RoutingError::invalid_config("bad radius");
        assert!(matches!(error, RoutingError::InvalidConfig(msg) if msg == "bad radius"));
    }
}

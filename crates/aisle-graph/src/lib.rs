//! Static aisle graph for warehouse route planning.
//!
//! This crate holds the walkable topology of a warehouse floor:
//!
//! - [`Node`] - A named point with 2D coordinates
//! - [`NodeId`] - The public, string-valued node name
//! - [`NodeIndex`] - Dense per-graph index used by search algorithms
//! - [`Graph`] - Immutable node set plus undirected adjacency
//! - [`GraphBuilder`] - Incremental construction with deferred validation
//! - [`GraphLayout`] - Plain-data configuration form of a graph
//!
//! # Layer 0 Crate
//!
//! This crate knows nothing about workers, slots, or routes. It is built once
//! from configuration at process start and is read-only afterwards.
//!
//! # Coordinate System
//!
//! Coordinates are plane `f64` values in the floor plan's own units. The
//! routing crates use a default safety radius of 30 of these units, so floor
//! plans are expected to be laid out on a scale of tens to hundreds.
//!
//! # Example
//!
//! ```
//! use aisle_graph::{Graph, Node};
//!
//! let graph = Graph::build(
//!     vec![
//!         Node::new("dock", 0.0, 0.0),
//!         Node::new("A1", 40.0, 0.0),
//!         Node::new("A2", 80.0, 0.0),
//!     ],
//!     [("dock", "A1"), ("A1", "A2")],
//! )?;
//!
//! let a1 = graph.index_of("A1").ok_or(aisle_graph::GraphError::EmptyGraph)?;
//! assert_eq!(graph.neighbors_of(a1).len(), 2);
//! # Ok::<(), aisle_graph::GraphError>(())
//! ```
//!
//! # Validation
//!
//! Construction fails fast with a [`GraphError`] on an empty node set,
//! duplicate ids, non-finite coordinates, self-loops, or edges naming
//! undeclared nodes. A graph that exists is always well formed.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod graph;
mod layout;
mod node;

pub use error::GraphError;
pub use graph::{Graph, GraphBuilder};
pub use layout::{GraphLayout, NodeSpec};
pub use node::{Node, NodeId, NodeIndex};

// Re-export nalgebra types for convenience
pub use nalgebra::Point2;

//! Domain types for warehouse pick routing.
//!
//! This crate provides the values exchanged between the route planner and
//! its collaborators:
//!
//! - **Workers**: Position snapshots from the tracking system ([`Worker`])
//! - **Slots**: Storage locations and their catalog ([`Slot`], [`SlotClass`], [`SlotCatalog`])
//! - **Routes**: Planned node sequences and diagnostics ([`Route`], [`RouteStats`])
//! - **Configuration**: Planner settings ([`RouteConfig`])
//! - **Errors**: Caller contract violations ([`RoutingError`])
//!
//! # Example
//!
//! ```
//! use pick_types::{Route, RouteConfig, Slot, SlotCatalog, SlotClass, Worker};
//!
//! let catalog = SlotCatalog::new(vec![
//!     Slot::new("R1-01", 10.0, 5.0).with_class(SlotClass::A),
//!     Slot::new("R1-02", 30.0, 5.0),
//! ])?;
//!
//! let workers = [Worker::new("w-1", 200.0, 200.0)];
//! let config = RouteConfig::default().with_safety_radius(25.0);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(workers.len(), 1);
//! assert!(config.validate().is_empty());
//!
//! // Routes are produced by the pick-route crate
//! let route = Route::from_nodes(["dock", "A1"]);
//! assert_eq!(route.hop_count(), 1);
//! # Ok::<(), pick_types::RoutingError>(())
//! ```
//!
//! # Unreachable Is Not An Error
//!
//! [`RoutingError`] is reserved for invalid input and configuration. When no
//! route exists the planner returns `Ok(None)`.
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/pick-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod route;
pub mod slot;
pub mod worker;

pub use config::{DEFAULT_SAFETY_RADIUS, RouteConfig};
pub use error::RoutingError;
pub use route::{Route, RouteStats};
pub use slot::{Slot, SlotCatalog, SlotClass};
pub use worker::Worker;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use aisle_graph::{Graph, GraphError, Node};

    /// Test that the types can be constructed and used together.
    #[test]
    fn test_full_workflow_types() {
        let graph = Graph::build(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 40.0, 0.0)],
            [("A", "B")],
        )
        .unwrap();

        let catalog = SlotCatalog::new(vec![
            Slot::new("S1", 1.0, 1.0).with_product("SKU-1", 3),
            Slot::new("S2", 39.0, 2.0).with_product("SKU-2", 8),
        ])
        .unwrap();
        assert_eq!(catalog.require("S2").unwrap().product_sku(), "SKU-2");

        let route = Route::from_nodes(["A", "B"]);
        let points = route.waypoints(&graph).unwrap();
        assert_eq!(points.len(), 2);

        let config = RouteConfig::default().with_max_expansions(16);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_error_conversion() {
        fn build() -> Result<Graph, RoutingError> {
            Ok(Graph::build(Vec::new(), Vec::<(&str, &str)>::new())?)
        }
        assert_eq!(build().unwrap_err(), RoutingError::Graph(GraphError::EmptyGraph));
    }
}

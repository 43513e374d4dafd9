//! Collision-aware route planning over warehouse aisle graphs.
//!
//! This crate turns an ordered pick list into a walking route across an
//! [`aisle_graph::Graph`], steering around workers standing in the aisles.
//!
//! # Overview
//!
//! - **Occupancy** ([`occupancy::OccupancyOracle`]): which nodes are within the
//!   safety radius of a worker right now
//! - **Shortest paths** ([`bfs::GraphBfs`]): minimum-hop breadth-first search,
//!   optionally skipping occupied nodes
//! - **Slot location** ([`locate::NodeLocator`]): snapping a slot's coordinates
//!   to its nearest graph node
//! - **Chaining** ([`chain::RoutePlanner`]): joining per-stop segments into one
//!   route in pick-list order
//! - **Reachability** ([`reach`]): worker-independent connectivity queries
//!
//! # Quick Start
//!
//! ```
//! use aisle_graph::{Graph, Node};
//! use pick_route::{RoutePlanner, plan_route};
//! use pick_types::{RouteConfig, Slot, SlotCatalog, Worker};
//!
//! // Floor plan: a loop of four aisle junctions
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
//! // Inventory slots next to the junctions
//! let slots = SlotCatalog::new(vec![
//!     Slot::new("R1-01", 5.0, -8.0),
//!     Slot::new("R3-07", 108.0, 96.0),
//! ])?;
//!
//! // Nobody in the way
//! let route = plan_route(&graph, &["R1-01", "R3-07"], &slots, &[])?.expect("reachable");
//! assert_eq!(route.nodes(), ["TL", "TR", "BR"]);
//!
//! // A colleague is standing at TR
//! let workers = [Worker::new("w-4", 98.0, 3.0)];
//! let planner = RoutePlanner::new(&graph, &slots, RouteConfig::default())?;
//! let route = planner.plan(&["R1-01", "R3-07"], &workers)?.expect("detour");
//! assert_eq!(route.nodes(), ["TL", "BL", "BR"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Outcomes
//!
//! | Result | Meaning |
//! |--------|---------|
//! | `Ok(Some(route))` | Route found (empty for an empty pick list) |
//! | `Ok(None)` | Some segment is disconnected or blocked by workers |
//! | `Err(RoutingError::UnknownSlot)` | Pick list names a slot not in the catalog |
//! | `Err(RoutingError::UnknownNode)` | Search called with a node id not in the graph |
//! | `Err(RoutingError::ExpansionLimit)` | A search exceeded its configured budget |
//!
//! # Determinism
//!
//! For a fixed graph, edge-declaration order, and worker snapshot, every
//! function here returns the same result on every call. Nothing is cached
//! between calls; workers may have moved.
//!
//! # Logging
//!
//! Searches emit `tracing` events: `debug` per segment search, `info` per
//! planned route, `warn` when a pick-list segment is unreachable. No
//! subscriber is installed by this crate.

#![doc(html_root_url = "https://docs.rs/pick-route/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod bfs;
pub mod chain;
pub mod locate;
pub mod occupancy;
pub mod reach;

// Re-export main types for convenience
pub use bfs::{GraphBfs, SearchOutcome, shortest_path, shortest_path_avoiding};
pub use chain::{RoutePlanner, plan_route};
pub use locate::{LinearScan, NodeLocator, nearest_node};
pub use occupancy::{OccupancyOracle, is_occupied};
pub use reach::{component_count, reachable_from, same_component};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use aisle_graph::{Graph, GraphLayout, NodeSpec};
    use pick_types::{RouteConfig, Slot, SlotCatalog, Worker};

    /// A small warehouse: two parallel aisles joined at both ends.
    ///
    /// ```text
    /// N0 - N1 - N2 - N3
    /// |              |
    /// S0 - S1 - S2 - S3
    /// ```
    fn warehouse() -> Graph {
        let mut layout = GraphLayout::new();
        for i in 0..4 {
            let x = f64::from(i) * 50.0;
            layout = layout
                .with_node(NodeSpec::new(format!("N{i}"), x, 0.0))
                .with_node(NodeSpec::new(format!("S{i}"), x, 200.0));
        }
        for i in 0..3 {
            layout = layout
                .with_edge(format!("N{i}"), format!("N{}", i + 1))
                .with_edge(format!("S{i}"), format!("S{}", i + 1));
        }
        layout
            .with_edge("N0", "S0")
            .with_edge("N3", "S3")
            .into_graph()
            .unwrap()
    }

    fn slots() -> SlotCatalog {
        SlotCatalog::new(vec![
            Slot::new("north-1", 52.0, -10.0),
            Slot::new("north-3", 148.0, -10.0),
            Slot::new("south-2", 100.0, 210.0),
            Slot::new("south-0", 0.0, 215.0),
        ])
        .unwrap()
    }

    /// Test the full workflow: layout, catalog, plan, render.
    #[test]
    fn test_full_workflow() {
        let graph = warehouse();
        let slots = slots();
        let planner = RoutePlanner::new(&graph, &slots, RouteConfig::default()).unwrap();

        let route = planner
            .plan(&["north-1", "north-3", "south-2"], &[])
            .unwrap()
            .unwrap();
        assert_eq!(route.nodes(), ["N1", "N2", "N3", "S3", "S2"]);

        let points = route.waypoints(&graph).unwrap();
        assert_eq!(points.len(), route.len());
        let distance = route.walking_distance(&graph).unwrap();
        approx::assert_relative_eq!(distance, 350.0);
    }

    /// A worker in the north aisle pushes the route through the south aisle.
    #[test]
    fn test_worker_in_aisle_forces_long_way() {
        let graph = warehouse();
        let slots = slots();
        let workers = [Worker::new("w-1", 100.0, 5.0)];

        let route = plan_route(&graph, &["north-1", "north-3"], &slots, &workers)
            .unwrap()
            .unwrap();
        assert_eq!(
            route.nodes(),
            ["N1", "N0", "S0", "S1", "S2", "S3", "N3"]
        );
        assert!(!route.contains("N2"));
    }

    /// Unreachable and invalid input are distinguishable.
    #[test]
    fn test_outcomes_are_distinct() {
        let graph = warehouse();
        let slots = slots();
        // One worker in each aisle cuts N1 off from N3
        let blockers = [Worker::new("w-1", 100.0, 0.0), Worker::new("w-2", 100.0, 200.0)];

        let planner = RoutePlanner::new(&graph, &slots, RouteConfig::default()).unwrap();
        assert!(planner.plan(&["north-1", "north-3"], &blockers).unwrap().is_none());

        assert!(
            planner
                .plan(&["north-1", "missing"], &blockers)
                .unwrap_err()
                .is_unknown_slot()
        );
    }

    #[test]
    fn test_connectivity_helpers() {
        let graph = warehouse();
        assert_eq!(component_count(&graph), 1);
        assert!(same_component(&graph, "N0", "S3").unwrap());
        assert_eq!(reachable_from(&graph, "N0").unwrap().len(), graph.len());
    }
}

//! Chaining shortest paths along a pick list.
//!
//! The planner visits slots in exactly the order given. Each consecutive pair
//! of stops is joined by a collision-aware shortest path, and the segments are
//! concatenated so that the node shared at each seam appears once.
//!
//! This is a greedy chain, not a tour optimizer: stops are never reordered.
//!
//! # Example
//!
//! ```
//! use aisle_graph::{Graph, Node};
//! use pick_route::chain::plan_route;
//! use pick_types::{Slot, SlotCatalog};
//!
//! let graph = Graph::build(
//!     vec![
//!         Node::new("A", 0.0, 0.0),
//!         Node::new("B", 100.0, 0.0),
//!         Node::new("C", 200.0, 0.0),
//!     ],
//!     [("A", "B"), ("B", "C")],
//! )?;
//! let slots = SlotCatalog::new(vec![
//!     Slot::new("S-A", 2.0, 8.0),
//!     Slot::new("S-B", 98.0, 8.0),
//!     Slot::new("S-C", 203.0, 8.0),
//! ])?;
//!
//! let route = plan_route(&graph, &["S-A", "S-B", "S-C"], &slots, &[])?.expect("reachable");
//! assert_eq!(route.nodes(), ["A", "B", "C"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Instant;

use aisle_graph::{Graph, NodeIndex};
use pick_types::{Route, RouteConfig, RouteStats, RoutingError, SlotCatalog, Worker};
use tracing::{info, warn};

use crate::bfs::GraphBfs;
use crate::locate::{LinearScan, NodeLocator, locate_with};
use crate::occupancy::OccupancyOracle;

/// Plans walking routes for pick lists over one graph and slot catalog.
///
/// The planner borrows its graph and catalog; worker snapshots are passed
/// per call and never retained.
///
/// # Example
///
/// ```
/// use aisle_graph::{Graph, Node};
/// use pick_route::chain::RoutePlanner;
/// use pick_types::{RouteConfig, Slot, SlotCatalog, Worker};
///
/// let graph = Graph::build(
///     vec![
///         Node::new("TL", 0.0, 0.0),
///         Node::new("TR", 100.0, 0.0),
///         Node::new("BR", 100.0, 100.0),
///         Node::new("BL", 0.0, 100.0),
///     ],
///     [("TL", "TR"), ("TR", "BR"), ("BR", "BL"), ("BL", "TL")],
/// )?;
/// let slots = SlotCatalog::new(vec![
///     Slot::new("start", 0.0, 5.0),
///     Slot::new("far", 105.0, 100.0),
/// ])?;
///
/// let planner = RoutePlanner::new(&graph, &slots, RouteConfig::default())?;
/// let workers = [Worker::new("w-1", 100.0, 10.0)];
///
/// let (route, stats) = planner.plan_with_stats(&["start", "far"], &workers)?;
/// assert_eq!(route.expect("detour").nodes(), ["TL", "BL", "BR"]);
/// assert_eq!(stats.segments(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<'a, L = LinearScan> {
    graph: &'a Graph,
    slots: &'a SlotCatalog,
    config: RouteConfig,
    locator: L,
}

impl<'a> RoutePlanner<'a> {
    /// Creates a planner using the linear-scan slot locator.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if `config.validate()` reports issues.
    pub fn new(
        graph: &'a Graph,
        slots: &'a SlotCatalog,
        config: RouteConfig,
    ) -> Result<Self, RoutingError> {
        let issues = config.validate();
        if !issues.is_empty() {
            return Err(RoutingError::invalid_config(issues.join("; ")));
        }
        Ok(Self {
            graph,
            slots,
            config,
            locator: LinearScan,
        })
    }
}

impl<'a, L: NodeLocator> RoutePlanner<'a, L> {
    /// Replaces the slot locator.
    #[must_use]
    pub fn with_locator<M: NodeLocator>(self, locator: M) -> RoutePlanner<'a, M> {
        RoutePlanner {
            graph: self.graph,
            slots: self.slots,
            config: self.config,
            locator,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Plans a route through the pick list, avoiding the given workers.
    ///
    /// Returns `Ok(Some(route))` on success, `Ok(Some(empty))` for an empty
    /// pick list, and `Ok(None)` if any consecutive pair of stops cannot be
    /// connected.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownSlot`] if the pick list names a slot
    /// missing from the catalog, or [`RoutingError::ExpansionLimit`] if a
    /// segment search runs out of budget.
    pub fn plan<S: AsRef<str>>(
        &self,
        picklist: &[S],
        workers: &[Worker],
    ) -> Result<Option<Route>, RoutingError> {
        self.plan_with_stats(picklist, workers).map(|(route, _)| route)
    }

    /// Like [`RoutePlanner::plan`], also returning search statistics.
    ///
    /// # Errors
    ///
    /// See [`RoutePlanner::plan`].
    pub fn plan_with_stats<S: AsRef<str>>(
        &self,
        picklist: &[S],
        workers: &[Worker],
    ) -> Result<(Option<Route>, RouteStats), RoutingError> {
        let start_time = Instant::now();

        // Resolve every stop up front so a bad slot id is reported even when
        // an earlier segment would have been unreachable.
        let stops = self.resolve_stops(picklist)?;
        let Some(&first) = stops.first() else {
            return Ok((Some(Route::new()), RouteStats::new()));
        };

        let oracle = OccupancyOracle::new(self.graph, workers, self.config.safety_radius());
        let bfs = GraphBfs::from_config(self.graph, &self.config);

        let mut route = Route::single(self.graph.id(first).clone());
        let mut segments = 0usize;
        let mut nodes_expanded = 0usize;

        for (i, pair) in stops.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            let outcome = bfs.search(from, to, |n| oracle.is_occupied(n))?;
            segments += 1;
            nodes_expanded += outcome.nodes_expanded();

            let Some(segment) = outcome.into_route(self.graph) else {
                warn!(
                    segment = i + 1,
                    from = %self.graph.id(from),
                    to = %self.graph.id(to),
                    workers = workers.len(),
                    "Pick list segment unreachable"
                );
                let stats = RouteStats::new()
                    .with_segments(segments)
                    .with_nodes_expanded(nodes_expanded)
                    .with_elapsed(start_time.elapsed());
                return Ok((None, stats));
            };
            route.append_segment(segment);
        }

        let stats = RouteStats::new()
            .with_segments(segments)
            .with_nodes_expanded(nodes_expanded)
            .with_elapsed(start_time.elapsed());

        info!(
            stops = stops.len(),
            nodes = route.len(),
            nodes_expanded,
            elapsed = ?stats.time_elapsed(),
            "Planned pick route"
        );

        Ok((Some(route), stats))
    }

    fn resolve_stops<S: AsRef<str>>(&self, picklist: &[S]) -> Result<Vec<NodeIndex>, RoutingError> {
        picklist
            .iter()
            .map(|slot_id| {
                let slot = self.slots.require(slot_id.as_ref())?;
                locate_with(&self.locator, self.graph, slot)
            })
            .collect()
    }
}

/// Plans a route through the pick list with the default configuration.
///
/// Convenience wrapper around [`RoutePlanner`] using a safety radius of
/// [`DEFAULT_SAFETY_RADIUS`](pick_types::DEFAULT_SAFETY_RADIUS) and no
/// expansion limit.
///
/// # Errors
///
/// See [`RoutePlanner::plan`].
pub fn plan_route<S: AsRef<str>>(
    graph: &Graph,
    picklist: &[S],
    slots: &SlotCatalog,
    workers: &[Worker],
) -> Result<Option<Route>, RoutingError> {
    RoutePlanner::new(graph, slots, RouteConfig::default())?.plan(picklist, workers)
}

//! Route planning between two entrances.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (BFS, Dijkstra)
//! - [`RouteRequest`] - Start/goal labels plus the algorithm to use
//! - [`Route`] / [`RouteStep`] - The computed hop list
//! - [`find_route`] - Infallible entry point; any failure is an incomplete route
//! - [`plan_route`] - Fallible entry point that reports why no route exists
//!
//! # Strategy Pattern
//!
//! Path search sits behind the [`RoutePlanner`] trait. Each algorithm is its
//! own planner struct, and [`select_planner`] picks one for a request.
//!
//! # Example
//!
//! ```
//! use entrance_tracker_lib::{find_route, ConnectionStore, LocationCatalog};
//!
//! let catalog = LocationCatalog::bundled();
//! let mut connections = ConnectionStore::new();
//! connections.set("kf-lost-woods", "Lost Woods to KF");
//!
//! let route = find_route(catalog, &connections, "kf-lost-woods", "lw-kokiri-forest");
//! assert!(route.is_complete);
//! assert_eq!(route.total_steps, 1);
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{EntranceId, LocationCatalog};
use crate::connections::ConnectionStore;
use crate::error::{Error, Result};
use crate::graph::{build_graph, EdgeKind, Graph};

/// Maximum number of "did you mean" suggestions attached to unknown labels.
const MAX_SUGGESTIONS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Dijkstra's algorithm with unit edge weights.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "bfs" => Ok(RouteAlgorithm::Bfs),
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            other => Err(format!("unknown route algorithm '{other}'")),
        }
    }
}

/// High-level route planning request.
///
/// `start` and `goal` are entrance ids or `"{area} - {entrance}"` labels.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for BFS routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Bfs,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// A single hop of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    /// `"{area} - {entrance}"` of the entrance taken.
    pub from_entrance: String,
    /// Destination reached through that entrance.
    pub to_destination: String,
    /// Area the hop starts in.
    pub area_name: String,
}

/// Result of a route search.
///
/// An incomplete route never carries steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub steps: Vec<RouteStep>,
    pub total_steps: usize,
    pub is_complete: bool,
}

impl Route {
    /// Route reporting that no path was found.
    pub fn incomplete() -> Self {
        Self::default()
    }

    /// Zero-length route: start and goal are the same entrance.
    pub fn arrived() -> Self {
        Self::from_steps(Vec::new())
    }

    fn from_steps(steps: Vec<RouteStep>) -> Self {
        Self {
            total_steps: steps.len(),
            steps,
            is_complete: true,
        }
    }
}

/// Compute the shortest route between two entrance labels.
///
/// Never fails: unknown labels and unreachable goals both produce
/// [`Route::incomplete`]. Use [`plan_route`] to tell the two apart.
pub fn find_route(
    catalog: &LocationCatalog,
    connections: &ConnectionStore,
    start: &str,
    goal: &str,
) -> Route {
    match plan_route(catalog, connections, &RouteRequest::bfs(start, goal)) {
        Ok(route) => route,
        Err(err) => {
            debug!(start, goal, error = %err, "route search produced no route");
            Route::incomplete()
        }
    }
}

/// Compute a route using the requested algorithm.
///
/// The graph is rebuilt from `catalog` and `connections` on every call.
///
/// # Errors
///
/// - [`Error::UnknownEntrance`] when the start or goal label does not resolve.
/// - [`Error::RouteNotFound`] when the goal is unreachable from the start.
pub fn plan_route(
    catalog: &LocationCatalog,
    connections: &ConnectionStore,
    request: &RouteRequest,
) -> Result<Route> {
    let start_id = resolve_entrance(catalog, &request.start)?;
    let goal_id = resolve_entrance(catalog, &request.goal)?;

    if start_id == goal_id {
        return Ok(Route::arrived());
    }

    let graph = build_graph(catalog, connections);
    let planner = select_planner(request);
    let path = planner
        .find_path(&graph, start_id, goal_id)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    debug!(
        algorithm = %planner.algorithm(),
        hops = path.len().saturating_sub(1),
        "route found"
    );

    Ok(route_from_path(catalog, connections, &graph, &path))
}

/// Resolve an entrance label, attaching suggestions when it is unknown.
fn resolve_entrance<'a>(catalog: &'a LocationCatalog, label: &str) -> Result<&'a str> {
    catalog
        .resolve_entrance(label)
        .ok_or_else(|| Error::UnknownEntrance {
            name: label.to_string(),
            suggestions: catalog.fuzzy_entrance_matches(label, MAX_SUGGESTIONS),
        })
}

/// Turn a node path into human-readable steps.
fn route_from_path(
    catalog: &LocationCatalog,
    connections: &ConnectionStore,
    graph: &Graph,
    path: &[EntranceId],
) -> Route {
    let steps = path
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (pair[0].as_str(), pair[1].as_str());
            let area = catalog.area_of(from)?;
            let entrance = catalog.entrance(from)?;

            // A mirrored edge was created by the far side's connection, so the
            // label recorded on `from` (if any) does not describe this hop.
            let recorded = graph
                .edge(from, to)
                .filter(|edge| edge.kind == EdgeKind::Recorded)
                .and(connections.get(from));
            let to_destination = recorded
                .or_else(|| catalog.entrance(to).map(|target| target.name.as_str()))
                .unwrap_or(to);

            Some(RouteStep {
                from_entrance: format!("{} - {}", area.name, entrance.name),
                to_destination: to_destination.to_string(),
                area_name: area.name.clone(),
            })
        })
        .collect();

    Route::from_steps(steps)
}

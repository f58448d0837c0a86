//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for the
//! supported search algorithms. The strategy pattern allows adding new
//! algorithms without modifying the `plan_route` orchestrator.

use crate::catalog::EntranceId;
use crate::graph::Graph;
use crate::path::{find_route_bfs, find_route_dijkstra};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Option<Vec<EntranceId>>;
}

/// Breadth-first search planner. Finds the path with the fewest hops.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Option<Vec<EntranceId>> {
        find_route_bfs(graph, start, goal)
    }
}

/// Dijkstra planner over unit-weight edges.
///
/// Every hop costs the same, so hop counts always match [`BfsPlanner`]; only
/// the choice between equally short paths can differ.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Option<Vec<EntranceId>> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bfs_planner_returns_correct_algorithm() {
        assert_eq!(BfsPlanner.algorithm(), RouteAlgorithm::Bfs);
    }

    #[test]
    fn dijkstra_planner_returns_correct_algorithm() {
        assert_eq!(DijkstraPlanner.algorithm(), RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        let bfs_request = RouteRequest::bfs("A", "B");
        assert_eq!(select_planner(&bfs_request).algorithm(), RouteAlgorithm::Bfs);

        let dijkstra_request = bfs_request.with_algorithm(RouteAlgorithm::Dijkstra);
        assert_eq!(
            select_planner(&dijkstra_request).algorithm(),
            RouteAlgorithm::Dijkstra
        );
    }
}

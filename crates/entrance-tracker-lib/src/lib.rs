//! Entrance tracker library entry points.
//!
//! This crate exposes the location catalog, the connection store, graph
//! construction over recorded entrance connections, and route finding between
//! entrances. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod config;
pub mod connections;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod search;
pub mod state;

pub use catalog::{
    load_catalog, Area, AreaKind, Entrance, EntranceId, EntranceOption, Game, LocationCatalog,
};
pub use config::{default_state_path, resolve_catalog, resolve_state_path};
pub use connections::ConnectionStore;
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeKind, Graph};
pub use output::{describe_step, RouteEndpoint, RouteRenderMode, RouteSummary};
pub use path::{find_route_bfs, find_route_dijkstra};
pub use routing::{
    find_route, plan_route, select_planner, Route, RouteAlgorithm, RoutePlanner, RouteRequest,
    RouteStep,
};
pub use search::AreaFilter;
pub use state::{TrackerImport, TrackerState};

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{EntranceId, LocationCatalog};
use crate::connections::ConnectionStore;

/// How an edge came to exist in the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    /// The source entrance's own connection names the target.
    Recorded,
    /// Added as the return trip of a connection recorded on the target.
    Mirrored,
}

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: EntranceId,
    pub kind: EdgeKind,
}

/// Undirected entrance graph used by the path finders. Nodes are entrance ids.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<EntranceId, Vec<Edge>>>,
}

impl Graph {
    /// Wrap a prebuilt adjacency map.
    pub fn from_parts(adjacency: HashMap<EntranceId, Vec<Edge>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the neighbours for a given entrance, in insertion order.
    pub fn neighbours(&self, entrance: &str) -> &[Edge] {
        self.adjacency
            .get(entrance)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edge from `from` to `to`, if the two entrances are adjacent.
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    /// Whether the entrance is a node of this graph.
    pub fn contains(&self, entrance: &str) -> bool {
        self.adjacency.contains_key(entrance)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

/// Build the entrance graph from the catalog and the current connections.
///
/// Every catalog entrance becomes a node. Each recorded connection links its
/// entrance with every other entrance whose display name equals the
/// destination, in both directions. Connections on unknown entrances and
/// destinations that name no entrance contribute nothing.
pub fn build_graph(catalog: &LocationCatalog, connections: &ConnectionStore) -> Graph {
    let mut adjacency: HashMap<EntranceId, Vec<Edge>> = HashMap::new();
    for entrance_id in catalog.entrance_ids() {
        adjacency.insert(entrance_id.to_string(), Vec::new());
    }

    for (source, destination) in connections.iter() {
        if !catalog.contains_entrance(source) {
            debug!(entrance = source, "skipping connection on unknown entrance");
            continue;
        }

        let targets = catalog.entrances_named(destination);
        if targets.is_empty() {
            debug!(
                entrance = source,
                destination, "destination matches no catalog entrance"
            );
            continue;
        }

        for target in targets {
            if target == source {
                continue;
            }
            add_edge(&mut adjacency, source, target, EdgeKind::Recorded);
            add_edge(&mut adjacency, target, source, EdgeKind::Mirrored);
        }
    }

    let graph = Graph::from_parts(adjacency);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built entrance graph"
    );
    graph
}

fn add_edge(
    adjacency: &mut HashMap<EntranceId, Vec<Edge>>,
    from: &str,
    to: &str,
    kind: EdgeKind,
) {
    let edges = adjacency.entry(from.to_string()).or_default();
    if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
        existing.kind = existing.kind.min(kind);
        return;
    }
    edges.push(Edge {
        target: to.to_string(),
        kind,
    });
}

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::catalog::EntranceId;
use crate::graph::Graph;

/// Run breadth-first search.
///
/// Returns the entrances visited from `start` to `goal` inclusive, or `None`
/// when either endpoint is not in the graph or the goal is unreachable.
/// Neighbours are expanded in adjacency order, so ties resolve the same way
/// for identical graphs.
pub fn find_route_bfs(graph: &Graph, start: &str, goal: &str) -> Option<Vec<EntranceId>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            let next = edge.target.as_str();
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Run Dijkstra's algorithm with every edge weighing one hop.
///
/// Produces paths of the same length as [`find_route_bfs`]; equal-cost
/// frontier entries are popped in ascending id order.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Option<Vec<EntranceId>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut distances: HashMap<&str, usize> = HashMap::new();
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        match distances.get(entry.node) {
            Some(distance) if *distance < entry.cost => continue,
            None => continue,
            Some(_) => {}
        }

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        let next_cost = entry.cost + 1;
        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            if next_cost < distances.get(next).copied().unwrap_or(usize::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

fn reconstruct_path<'a>(
    parents: &HashMap<&'a str, Option<&'a str>>,
    start: &str,
    goal: &'a str,
) -> Vec<EntranceId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: usize,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: usize) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

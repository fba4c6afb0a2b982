#[cfg(test)]
#[path = "../../../tests/unit/algorithms/graph/shortest_path_test.rs"]
mod shortest_path_test;

use super::{Graph, NodeIndex, Weight};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A path found by shortest path search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    /// Nodes from source to target, both included.
    pub nodes: Vec<NodeIndex>,
    /// Accumulated weight.
    pub weight: Weight,
}

impl ShortestPath {
    /// Creates a new instance of `ShortestPath`.
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}

/// Runs Dijkstra's algorithm from `source` to `target`. Returns `None` when target is not
/// reachable or any of nodes is out of graph range.
pub fn find_shortest_path(graph: &Graph, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
    let size = graph.size();
    if source >= size || target >= size {
        return None;
    }

    let mut distances = vec![Weight::MAX; size];
    let mut predecessors: Vec<Option<NodeIndex>> = vec![None; size];
    let mut queue = BinaryHeap::new();

    distances[source] = 0;
    queue.push(Reverse((0, source)));

    while let Some(Reverse((distance, node))) = queue.pop() {
        if node == target {
            break;
        }

        // stale entry
        if distance > distances[node] {
            continue;
        }

        for &(next, weight) in graph.arcs(node) {
            let next_distance = distance.saturating_add(weight);
            if next_distance < distances[next] {
                distances[next] = next_distance;
                predecessors[next] = Some(node);
                queue.push(Reverse((next_distance, next)));
            }
        }
    }

    if distances[target] == Weight::MAX {
        return None;
    }

    let mut nodes = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current] {
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();

    Some(ShortestPath::new(nodes, distances[target]))
}

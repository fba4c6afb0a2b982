//! Provides a simple weighted directed graph stored as adjacency list.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/graph/graph_test.rs"]
mod graph_test;

mod shortest_path;
pub use self::shortest_path::*;

/// A dense node index.
pub type NodeIndex = usize;

/// An integer edge weight.
pub type Weight = u64;

/// A weighted directed graph with fixed amount of nodes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: Vec<Vec<(NodeIndex, Weight)>>,
}

impl Graph {
    /// Creates a new graph with `size` nodes and no arcs.
    pub fn new(size: usize) -> Self {
        Self { adjacency: vec![Vec::new(); size] }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds a directed arc. Panics if any of nodes is out of range.
    pub fn add_arc(&mut self, from: NodeIndex, to: NodeIndex, weight: Weight) {
        assert!(to < self.adjacency.len(), "node {to} is out of graph range");
        self.adjacency[from].push((to, weight));
    }

    /// Adds two arcs with the same weight in both directions.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: Weight) {
        self.add_arc(a, b, weight);
        self.add_arc(b, a, weight);
    }

    /// Returns outgoing arcs of the node.
    pub fn arcs(&self, node: NodeIndex) -> &[(NodeIndex, Weight)] {
        self.adjacency.get(node).map(|arcs| arcs.as_slice()).unwrap_or(&[])
    }

    /// Returns all arcs as (from, to, weight) triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, Weight)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, arcs)| arcs.iter().map(move |&(to, weight)| (from, to, weight)))
    }
}

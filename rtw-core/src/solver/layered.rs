#[cfg(test)]
#[path = "../../tests/unit/solver/layered_test.rs"]
mod layered_test;

use crate::algorithms::graph::{Graph, NodeIndex, ShortestPath, Weight, find_shortest_path};
use crate::models::{City, ContinentGroup};
use rustc_hash::FxHashMap;
use std::ops::Range;

/// A reserved index of the source node.
pub const SOURCE_INDEX: NodeIndex = 0;

/// A graph built for one specific continent order: source, one layer per continent and sink.
/// Both source and sink stand for the origin city. Owns its index mapping, so it is not
/// reusable for other orders.
pub struct LayeredGraph<'a> {
    graph: Graph,
    index_to_city: Vec<&'a City>,
    city_to_index: FxHashMap<&'a str, NodeIndex>,
    layers: Vec<Range<NodeIndex>>,
}

impl<'a> LayeredGraph<'a> {
    /// Builds a graph for given continent order.
    pub fn new(origin: &'a City, order: &[&'a ContinentGroup]) -> Self {
        let total = order.iter().map(|group| group.cities.len()).sum::<usize>();

        let mut index_to_city = Vec::with_capacity(total + 2);
        index_to_city.push(origin);
        index_to_city.extend(order.iter().flat_map(|&group| group.cities.iter()));
        index_to_city.push(origin);

        let city_to_index = index_to_city[1..=total]
            .iter()
            .copied()
            .enumerate()
            .map(|(idx, city)| (city.id.as_str(), idx + 1))
            .collect::<FxHashMap<_, _>>();

        let layers = order
            .iter()
            .scan(1, |start, group| {
                let layer = *start..*start + group.cities.len();
                *start = layer.end;
                Some(layer)
            })
            .collect::<Vec<_>>();

        let sink = total + 1;
        let mut graph = Graph::new(total + 2);
        let weight = |from: NodeIndex, to: NodeIndex| get_weight(index_to_city[from], index_to_city[to]);

        layers.windows(2).for_each(|pair| {
            for from in pair[0].clone() {
                for to in pair[1].clone() {
                    graph.add_edge(from, to, weight(from, to));
                }
            }
        });

        if let Some(first) = layers.first() {
            first.clone().for_each(|to| graph.add_edge(SOURCE_INDEX, to, weight(SOURCE_INDEX, to)));
        }

        // sink is the origin again, but reachable only from the last layer
        if let Some(last) = layers.last() {
            last.clone().for_each(|from| graph.add_arc(from, sink, weight(from, sink)));
        }

        Self { graph, index_to_city, city_to_index, layers }
    }

    /// Returns index of the sink node.
    pub fn sink(&self) -> NodeIndex {
        self.graph.size() - 1
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns index ranges of continent layers in visit order.
    pub fn layers(&self) -> &[Range<NodeIndex>] {
        self.layers.as_slice()
    }

    /// Returns city by its node index.
    pub fn city(&self, index: NodeIndex) -> Option<&'a City> {
        self.index_to_city.get(index).copied()
    }

    /// Returns node index of intermediate city. Origin is not mapped as it has two nodes.
    pub fn index_of(&self, city_id: &str) -> Option<NodeIndex> {
        self.city_to_index.get(city_id).copied()
    }

    /// Finds the shortest path from source to sink.
    pub fn find_shortest_path(&self) -> Option<ShortestPath> {
        find_shortest_path(&self.graph, SOURCE_INDEX, self.sink())
    }
}

/// Gets distance between cities rounded down to whole kilometers.
fn get_weight(from: &City, to: &City) -> Weight {
    from.distance_to(to).floor() as Weight
}

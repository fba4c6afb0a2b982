use super::*;
use crate::helpers::models::{create_world_cities, test_city};
use crate::models::group_by_continent;
use crate::solver::get_continents_excluding_origin;

fn create_groups() -> (City, Vec<ContinentGroup>) {
    let cities = create_world_cities();
    let continents = group_by_continent(cities.iter());
    let origin = cities.iter().find(|city| city.id == "lon").cloned().unwrap();
    let groups = get_continents_excluding_origin(&origin, &continents).unwrap();

    (origin, groups)
}

fn get_layer(layered: &LayeredGraph, node: NodeIndex) -> usize {
    if node == SOURCE_INDEX {
        0
    } else if node == layered.sink() {
        layered.layers().len() + 1
    } else {
        layered.layers().iter().position(|layer| layer.contains(&node)).unwrap() + 1
    }
}

#[test]
fn can_build_graph_with_expected_size() {
    let (origin, groups) = create_groups();
    let order = groups.iter().rev().collect::<Vec<_>>();
    let total = groups.iter().map(|group| group.cities.len()).sum::<usize>();

    let layered = LayeredGraph::new(&origin, order.as_slice());

    assert_eq!(layered.graph().size(), total + 2);
    assert_eq!(layered.sink(), total + 1);
    assert_eq!(layered.layers().len(), groups.len());
    assert_eq!(layered.city(SOURCE_INDEX), Some(&origin));
    assert_eq!(layered.city(layered.sink()), Some(&origin));
    assert_eq!(layered.city(total + 2), None);
}

#[test]
fn can_assign_sequential_indices_in_order() {
    let (origin, groups) = create_groups();
    let order = groups.iter().collect::<Vec<_>>();

    let layered = LayeredGraph::new(&origin, order.as_slice());

    let expected = order.iter().flat_map(|group| group.cities.iter()).collect::<Vec<_>>();
    expected.iter().enumerate().for_each(|(idx, city)| {
        assert_eq!(layered.index_of(city.id.as_str()), Some(idx + 1));
        assert_eq!(layered.city(idx + 1), Some(*city));
    });
    assert_eq!(layered.index_of(origin.id.as_str()), None);
}

#[test]
fn can_connect_only_consecutive_layers() {
    let (origin, groups) = create_groups();
    let order = vec![&groups[2], &groups[0], &groups[4], &groups[1], &groups[3]];

    let layered = LayeredGraph::new(&origin, order.as_slice());
    let sink = layered.sink();
    let last_layer = layered.layers().len();

    layered.graph().edges().for_each(|(from, to, _)| {
        let (from_layer, to_layer) = (get_layer(&layered, from), get_layer(&layered, to));

        assert_eq!(from_layer.abs_diff(to_layer), 1, "edge {from}->{to} skips or stays within a layer");
        assert_ne!(from, sink, "sink has outgoing edge");
        if to == sink {
            assert_eq!(from_layer, last_layer);
        }
    });
}

#[test]
fn can_add_all_expected_edges_with_truncated_weights() {
    let (origin, groups) = create_groups();
    let order = groups.iter().collect::<Vec<_>>();

    let layered = LayeredGraph::new(&origin, order.as_slice());
    let graph = layered.graph();
    let layers = layered.layers();

    let sizes = layers.iter().map(|layer| layer.len()).collect::<Vec<_>>();
    let consecutive = sizes.windows(2).map(|pair| pair[0] * pair[1]).sum::<usize>();
    let expected_arcs = 2 * consecutive + 2 * sizes[0] + sizes[sizes.len() - 1];
    assert_eq!(graph.edges().count(), expected_arcs);

    graph.edges().for_each(|(from, to, weight)| {
        let distance = layered.city(from).unwrap().distance_to(layered.city(to).unwrap());

        assert_eq!(weight, distance.floor() as Weight);
    });

    graph.edges().filter(|&(from, to, _)| from != SOURCE_INDEX && to != layered.sink()).for_each(|(from, to, weight)| {
        assert!(graph.arcs(to).contains(&(from, weight)), "edge {from}->{to} is not bidirectional");
    });
}

#[test]
fn can_build_graph_without_continents() {
    let origin = test_city("home", 0., 0., "EU");

    let layered = LayeredGraph::new(&origin, &[]);

    assert_eq!(layered.graph().size(), 2);
    assert_eq!(layered.graph().edges().count(), 0);
    assert_eq!(layered.find_shortest_path(), None);
}

#[test]
fn can_find_path_through_every_layer() {
    let (origin, groups) = create_groups();
    let order = groups.iter().collect::<Vec<_>>();

    let layered = LayeredGraph::new(&origin, order.as_slice());
    let path = layered.find_shortest_path().unwrap();

    assert_eq!(path.nodes.len(), groups.len() + 2);
    path.nodes.iter().enumerate().for_each(|(position, &node)| {
        assert_eq!(get_layer(&layered, node), position);
    });
}

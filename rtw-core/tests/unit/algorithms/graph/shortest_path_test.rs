use super::*;

fn create_test_graph() -> Graph {
    // 0 -> 1 -> 3 is cheaper than 0 -> 3 directly, 0 -> 2 -> 3 is the cheapest one
    let mut graph = Graph::new(5);
    graph.add_arc(0, 1, 2);
    graph.add_arc(1, 3, 5);
    graph.add_arc(0, 3, 10);
    graph.add_arc(0, 2, 3);
    graph.add_arc(2, 3, 1);
    graph.add_arc(3, 0, 1);

    graph
}

parameterized_test! {can_find_shortest_path, (source, target, expected), {
    let graph = create_test_graph();

    let result = find_shortest_path(&graph, source, target);

    assert_eq!(result, expected.map(|(nodes, weight): (Vec<usize>, Weight)| ShortestPath::new(nodes, weight)));
}}

can_find_shortest_path! {
    case_01_via_cheapest_node: (0, 3, Some((vec![0, 2, 3], 4))),
    case_02_direct_arc: (0, 1, Some((vec![0, 1], 2))),
    case_03_backwards: (3, 2, Some((vec![3, 0, 2], 4))),
    case_04_same_node: (1, 1, Some((vec![1], 0))),
    case_05_disconnected: (0, 4, None),
    case_06_no_outgoing_arcs: (4, 0, None),
    case_07_out_of_range: (0, 5, None),
}

#[test]
fn can_handle_zero_weights() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, 0);
    graph.add_arc(1, 2, 0);

    let result = find_shortest_path(&graph, 0, 2);

    assert_eq!(result, Some(ShortestPath::new(vec![0, 1, 2], 0)));
}

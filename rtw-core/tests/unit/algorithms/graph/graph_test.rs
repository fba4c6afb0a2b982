use super::*;

#[test]
fn can_add_arcs_and_edges() {
    let mut graph = Graph::new(3);

    graph.add_arc(0, 1, 5);
    graph.add_edge(1, 2, 7);

    assert_eq!(graph.size(), 3);
    assert_eq!(graph.arcs(0), &[(1, 5)]);
    assert_eq!(graph.arcs(1), &[(2, 7)]);
    assert_eq!(graph.arcs(2), &[(1, 7)]);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, 5), (1, 2, 7), (2, 1, 7)]);
}

#[test]
fn can_return_no_arcs_for_unknown_node() {
    let graph = Graph::new(1);

    assert!(graph.arcs(0).is_empty());
    assert!(graph.arcs(10).is_empty());
}

#[test]
#[should_panic]
fn can_reject_arc_outside_of_graph() {
    let mut graph = Graph::new(2);

    graph.add_arc(0, 2, 1);
}

use path_planning::graph::generators::{generate_random, generate_random_connected, generate_window_grid, window_label};
use path_planning::graph::{Graph, MutableGraph, UndirectedGraph};
use path_planning::{Dijkstra, Error, ShortestPathEngine};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_add_edge_creates_both_endpoints_symmetrically() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "B", OrderedFloat(3.0)).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(&"A", &"B"), Some(OrderedFloat(3.0)));
    assert_eq!(graph.get_edge_weight(&"B", &"A"), Some(OrderedFloat(3.0)));
    assert!(graph.is_symmetric());
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: UndirectedGraph<&str, OrderedFloat<f64>> = UndirectedGraph::new();
    assert!(graph.add_vertex("A"));
    assert!(!graph.add_vertex("A"));
    assert_eq!(graph.vertex_count(), 1);

    graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();
    graph.add_edge("B", "A", OrderedFloat(1.0)).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_last_write_wins() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(5.0)).unwrap();
    graph.add_edge(2, 1, OrderedFloat(2.0)).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(&1, &2), Some(OrderedFloat(2.0)));
    assert_eq!(graph.get_edge_weight(&2, &1), Some(OrderedFloat(2.0)));
    assert!(graph.is_symmetric());
}

#[test]
fn test_negative_and_nan_weights_are_rejected() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();

    let err = graph.add_edge("A", "Z", OrderedFloat(-1.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { weight, .. } if weight == -1.0));
    assert!(graph.add_edge("A", "B", OrderedFloat(f64::NAN)).is_err());

    // Nothing changed: no new vertex, old weight intact
    assert_eq!(graph.vertex_count(), 2);
    assert!(!graph.has_vertex(&"Z"));
    assert_eq!(graph.get_edge_weight(&"A", &"B"), Some(OrderedFloat(1.0)));
}

#[test]
fn test_from_edges_is_all_or_nothing() {
    let ok = UndirectedGraph::from_edges(vec![
        ("A", "B", OrderedFloat(1.0)),
        ("B", "C", OrderedFloat(2.0)),
    ])
    .unwrap();
    assert_eq!(ok.edge_count(), 2);

    let err = UndirectedGraph::from_edges(vec![
        ("A", "B", OrderedFloat(1.0)),
        ("B", "C", OrderedFloat(-2.0)),
    ]);
    assert!(matches!(err, Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_neighbors_of_unknown_vertex_fails() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();
    graph.add_edge("A", "C", OrderedFloat(2.0)).unwrap();

    let neighbours: Vec<(&str, f64)> = graph
        .neighbors(&"A")
        .unwrap()
        .map(|(v, w)| (*v, w.into_inner()))
        .collect();
    assert_eq!(neighbours, vec![("B", 1.0), ("C", 2.0)]);

    assert!(matches!(graph.neighbors(&"Q"), Err(Error::UnknownVertex(_))));
}

#[test]
fn test_self_loop_counts_once() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "A", OrderedFloat(5.0)).unwrap();
    graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge(&"A", &"A"));
    assert!(graph.is_symmetric());
}

#[test]
fn test_window_grid_shape() {
    let graph = generate_window_grid(4, 3, 1.0, 2.0).unwrap();

    assert_eq!(graph.vertex_count(), 12);
    // 4 floors * 2 horizontal + 3 columns * 3 vertical
    assert_eq!(graph.edge_count(), 17);
    assert_eq!(graph.get_edge_weight(&window_label(1, 1), &window_label(1, 2)), Some(OrderedFloat(1.0)));
    assert_eq!(graph.get_edge_weight(&window_label(1, 1), &window_label(2, 1)), Some(OrderedFloat(2.0)));
    assert!(!graph.has_edge(&window_label(1, 1), &window_label(2, 2)));
    assert!(graph.is_symmetric());

    let single = generate_window_grid(1, 1, 1.0, 2.0).unwrap();
    assert!(single.has_vertex(&window_label(1, 1)));
    assert_eq!(single.edge_count(), 0);

    assert!(generate_window_grid(2, 2, -1.0, 2.0).is_err());
}

#[test]
fn test_random_connected_graph_is_connected() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_random_connected(200, 300, 50.0, &mut rng).unwrap();
    assert_eq!(graph.vertex_count(), 200);
    assert!(graph.is_symmetric());

    let result = Dijkstra::new().compute_distances(&graph, &0usize).unwrap();
    assert_eq!(result.reachable_count(), 200);
}

#[test]
fn test_random_graph_keeps_isolated_vertices() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_random(50, 0.0, &mut rng).unwrap();
    assert_eq!(graph.vertex_count(), 50);
    assert_eq!(graph.edge_count(), 0);
}

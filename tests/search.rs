use dynamic_routing::{
    dynamics::{WeightDynamics, INITIAL_WEIGHTS},
    graphs::{matrix_graph::MatrixGraph, Distance, Graph, Vertex, Weight},
    search::{
        dijkstra::single_source,
        dijkstra_data::{DijkstraData, Path},
    },
    tree::extract_from_paths,
};
use proptest::prelude::*;

/// Shortest distance to every vertex by enumerating all simple paths.
fn brute_force_distances(graph: &MatrixGraph, source: Vertex) -> Vec<Option<Distance>> {
    fn visit(
        graph: &MatrixGraph,
        vertex: Vertex,
        distance: Distance,
        visited: &mut Vec<bool>,
        best: &mut Vec<Option<Distance>>,
    ) {
        if best[vertex as usize].map_or(true, |best| distance < best) {
            best[vertex as usize] = Some(distance);
        }
        for edge in graph.out_edges(vertex) {
            if !visited[edge.head() as usize] {
                visited[edge.head() as usize] = true;
                visit(graph, edge.head(), distance + edge.weight(), visited, best);
                visited[edge.head() as usize] = false;
            }
        }
    }

    let n = graph.number_of_vertices() as usize;
    let mut visited = vec![false; n];
    let mut best = vec![None; n];
    visited[source as usize] = true;
    visit(graph, source, 0, &mut visited, &mut best);
    best
}

fn path_weight(graph: &MatrixGraph, path: &Path) -> Option<Distance> {
    path.vertices
        .windows(2)
        .map(|pair| graph.get_weight(pair[0], pair[1]))
        .sum()
}

fn symmetric_graph() -> impl Strategy<Value = MatrixGraph> {
    (1usize..=6).prop_flat_map(|n| {
        prop::collection::vec(prop_oneof![Just(0 as Weight), 1..=(20 as Weight)], n * n).prop_map(
            move |weights| {
                let mut matrix = vec![vec![0; n]; n];
                for tail in 0..n {
                    for head in tail + 1..n {
                        matrix[tail][head] = weights[tail * n + head];
                        matrix[head][tail] = weights[tail * n + head];
                    }
                }
                MatrixGraph::from_matrix(&matrix).unwrap()
            },
        )
    })
}

#[test]
fn star_scenario() {
    let mut graph =
        MatrixGraph::from_matrix(&[vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]).unwrap();
    graph.set_matrix_weight(0, 1, 5);
    graph.set_matrix_weight(1, 0, 5);
    graph.set_matrix_weight(0, 2, 10);
    graph.set_matrix_weight(2, 0, 10);

    let data = single_source(&graph, 0);

    assert_eq!(data.get_distances(), vec![Some(0), Some(5), Some(10)]);
    assert_eq!(data.get_path(1).unwrap().vertices, vec![0, 1]);
    assert_eq!(data.get_path(2).unwrap().vertices, vec![0, 2]);
}

#[test]
fn disconnected_scenario() {
    let graph = MatrixGraph::from_matrix(&[
        vec![0, 3, 0, 0],
        vec![3, 0, 4, 0],
        vec![0, 4, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();

    for source in 0..3 {
        let data = single_source(&graph, source);
        assert_eq!(data.get_distance(3), Distance::MAX);
        assert_eq!(data.get_path(3), None);
    }

    let data = single_source(&graph, 3);
    assert_eq!(data.get_distances(), vec![None, None, None, Some(0)]);
    assert!(extract_from_paths(&data.get_paths()).is_empty());
}

#[test]
fn classic_six_vertex_graph() {
    let graph = MatrixGraph::from_matrix(&[
        vec![0, 7, 9, 0, 0, 14],
        vec![7, 0, 10, 15, 0, 0],
        vec![9, 10, 0, 11, 0, 2],
        vec![0, 15, 11, 0, 6, 0],
        vec![0, 0, 0, 6, 0, 9],
        vec![14, 0, 2, 0, 9, 0],
    ])
    .unwrap();
    let path = single_source(&graph, 0).get_path(4).unwrap();

    assert_eq!(path.distance, 20);
    assert_eq!(path.vertices, vec![0, 2, 5, 4]);
    assert_eq!(single_source(&graph, 4).get_distance(0), 20);
}

proptest! {
    #[test]
    fn proptest_dijkstra_matches_brute_force(graph in symmetric_graph(), source: u32) {
        let source = source % graph.number_of_vertices();
        let data = single_source(&graph, source);

        prop_assert_eq!(data.get_distances(), brute_force_distances(&graph, source));

        for target in graph.vertices() {
            if let Some(path) = data.get_path(target) {
                prop_assert_eq!(path.vertices.first(), Some(&source));
                prop_assert_eq!(path.vertices.last(), Some(&target));
                prop_assert_eq!(path_weight(&graph, &path), Some(path.distance));
            }
        }
    }

    #[test]
    fn proptest_dijkstra_is_repeatable(graph in symmetric_graph(), source: u32) {
        let source = source % graph.number_of_vertices();
        prop_assert_eq!(single_source(&graph, source), single_source(&graph, source));
    }

    #[test]
    fn proptest_tree_edges_are_unique(graph in symmetric_graph(), source: u32) {
        let source = source % graph.number_of_vertices();
        let edges = extract_from_paths(&single_source(&graph, source).get_paths());

        let mut sorted = edges.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), edges.len());

        // Nothing leads back into the source.
        prop_assert!(edges.iter().all(|edge| edge.head() != source));
    }

    #[test]
    fn proptest_dynamics_keep_weights_valid(graph in symmetric_graph(), seed: u64) {
        let original = graph.clone();
        let mut graph = graph;
        let mut dynamics = WeightDynamics::from_seed(Some(seed));

        dynamics.initialize_weights(&mut graph);
        for tail in graph.vertices() {
            for head in graph.vertices() {
                match original.get_weight(tail, head) {
                    None => {
                        prop_assert_eq!(graph.get_weight(tail, head), None);
                    }
                    Some(_) => {
                        prop_assert!(INITIAL_WEIGHTS.contains(&graph.weight(tail, head)));
                    }
                }
            }
        }

        for _ in 0..10 {
            dynamics.update_weights(&mut graph);
            prop_assert!(graph.is_symmetric());
            prop_assert_eq!(graph.number_of_edges(), original.number_of_edges());
        }
    }
}

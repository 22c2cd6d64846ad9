use super::dijkstra_data::{DijkstraData, DijkstraDataVec};
use crate::graphs::{Distance, Graph, Vertex};

/// Single source Dijkstra without a priority queue.
///
/// The next vertex to settle is found by a linear scan, the lowest index wins
/// ties. This costs O(n²) per source, which is fine for the small router
/// graphs this crate simulates but does not scale to large graphs.
///
/// # Panics
///
/// Panics if `source` is not a vertex of `graph`.
pub fn single_source(graph: &dyn Graph, source: Vertex) -> DijkstraDataVec {
    let mut data = DijkstraDataVec::new(graph);
    search_into(graph, source, &mut data);
    data
}

/// Same search as [`single_source`], reusing the buffers of `data`.
///
/// `data` is cleared first and must have one entry per vertex of `graph`.
pub fn search_into(graph: &dyn Graph, source: Vertex, data: &mut DijkstraDataVec) {
    data.clear();
    let mut settled = vec![false; graph.number_of_vertices() as usize];

    data.set_distance(source, 0);

    for _ in 0..graph.number_of_vertices() {
        // All remaining vertices are unreachable.
        let Some(tail) = min_distance(data, &settled) else {
            break;
        };
        settled[tail as usize] = true;

        let distance_tail = data.get_distance(tail);
        for edge in graph.out_edges(tail) {
            if settled[edge.head() as usize] {
                continue;
            }

            let alternative_distance_head = distance_tail.saturating_add(edge.weight());
            if alternative_distance_head < data.get_distance(edge.head()) {
                data.set_distance(edge.head(), alternative_distance_head);
                data.set_predecessor(edge.head(), tail);
            }
        }
    }
}

/// Unsettled, reached vertex with the smallest distance.
fn min_distance(data: &DijkstraDataVec, settled: &[bool]) -> Option<Vertex> {
    let mut min = None;
    let mut min_distance = Distance::MAX;

    for (vertex, &distance) in data.distances.iter().enumerate() {
        if !settled[vertex] && distance < min_distance {
            min_distance = distance;
            min = Some(vertex as Vertex);
        }
    }

    min
}

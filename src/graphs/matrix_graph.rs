use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, Graph, Vertex, Weight};

/// Dense adjacency matrix, the graph store of a routing simulation.
///
/// Square by construction. Vertices are never added or removed after
/// creation, only re-weighted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixGraph {
    edges: Vec<Vec<Option<Weight>>>, // [tail][head] = Option<Weight>
}

impl Graph for MatrixGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.iter().flatten().flatten().count() as u32
    }

    fn out_edges(
        &self,
        tail: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct OutEdgeIterator<'a> {
            tail: Vertex,
            current_head: Vertex,
            row: &'a [Option<Weight>],
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                while (self.current_head as usize) < self.row.len() {
                    let head = self.current_head;
                    self.current_head += 1;

                    if let Some(weight) = self.row[head as usize] {
                        return Some(WeightedEdge::new(self.tail, head, weight));
                    }
                }
                None
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let remaining = self.row[self.current_head as usize..]
                    .iter()
                    .flatten()
                    .count();
                (remaining, Some(remaining))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {}

        Box::new(OutEdgeIterator {
            tail,
            current_head: 0,
            row: &self.edges[tail as usize],
        })
    }

    fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        *self.edges.get(tail as usize)?.get(head as usize)?
    }

    fn set_weight(&mut self, tail: Vertex, head: Vertex, weight: Option<Weight>) {
        self.edges[tail as usize][head as usize] = weight.filter(|&weight| weight != 0);
    }
}

impl MatrixGraph {
    /// A graph with `number_of_vertices` vertices and no edges.
    pub fn with_vertices(number_of_vertices: u32) -> MatrixGraph {
        let n = number_of_vertices as usize;
        MatrixGraph {
            edges: vec![vec![None; n]; n],
        }
    }

    /// Builds a graph from a square weight matrix, `0` meaning no edge.
    ///
    /// Returns `None` if `matrix` is not square.
    pub fn from_matrix(matrix: &[Vec<Weight>]) -> Option<MatrixGraph> {
        if matrix.iter().any(|row| row.len() != matrix.len()) {
            return None;
        }

        let edges = matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&weight| Some(weight).filter(|&weight| weight != 0))
                    .collect()
            })
            .collect();

        Some(MatrixGraph { edges })
    }

    /// Weight of the edge from `tail` to `head`, `0` if there is none.
    pub fn weight(&self, tail: Vertex, head: Vertex) -> Weight {
        self.get_weight(tail, head).unwrap_or(0)
    }

    /// Sets the weight from `tail` to `head`; `0` removes the edge.
    ///
    /// # Panics
    ///
    /// Panics if `tail` or `head` is out of range, like [`Graph::set_weight`].
    pub fn set_matrix_weight(&mut self, tail: Vertex, head: Vertex, weight: Weight) {
        self.set_weight(tail, head, Some(weight));
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.number_of_vertices();
        (0..n).all(|tail| {
            (tail + 1..n).all(|head| self.get_weight(tail, head) == self.get_weight(head, tail))
        })
    }

    /// The weight matrix with `0` for missing edges.
    pub fn to_matrix(&self) -> Vec<Vec<Weight>> {
        self.edges
            .iter()
            .map(|row| row.iter().map(|weight| weight.unwrap_or(0)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MatrixGraph {
        MatrixGraph::from_matrix(&[vec![0, 4, 2], vec![4, 0, 0], vec![2, 0, 0]]).unwrap()
    }

    #[test]
    fn out_edges_in_head_order() {
        let graph = triangle();
        let edges: Vec<_> = graph.out_edges(0).collect();

        assert_eq!(
            edges,
            vec![WeightedEdge::new(0, 1, 4), WeightedEdge::new(0, 2, 2)]
        );
        assert_eq!(graph.out_edges(0).len(), 2);
        assert_eq!(graph.out_edges(1).len(), 1);
    }

    #[test]
    fn exact_size_shrinks_while_iterating() {
        let graph = triangle();
        let mut edges = graph.out_edges(0);
        edges.next();

        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn zero_weight_removes_edge() {
        let mut graph = triangle();
        graph.set_matrix_weight(0, 1, 0);

        assert_eq!(graph.get_weight(0, 1), None);
        assert_eq!(graph.weight(0, 1), 0);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn rejects_non_square_matrix() {
        assert!(MatrixGraph::from_matrix(&[vec![0, 1], vec![1]]).is_none());
    }

    #[test]
    fn matrix_round_trip() {
        let matrix = vec![vec![0, 4, 2], vec![4, 0, 0], vec![2, 0, 0]];
        assert_eq!(MatrixGraph::from_matrix(&matrix).unwrap().to_matrix(), matrix);
    }

    #[test]
    fn out_of_range_weight_is_none() {
        assert_eq!(triangle().get_weight(0, 7), None);
    }

    #[test]
    #[should_panic]
    fn out_of_range_set_weight_panics() {
        triangle().set_matrix_weight(0, 7, 3);
    }
}

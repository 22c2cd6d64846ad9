use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Graph, Vertex};

/// Path from a source to a target, both inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Trait for handling data access in Dijkstra's algorithm.
///
/// Unreached vertices have the distance `Distance::MAX` and no predecessor.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the distance to a given vertex.
    fn get_distance(&self, vertex: Vertex) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let mut vertices = vec![target];

        // Predecessors form a tree rooted at the source, so this terminates.
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Predecessors and distances of one single source search, one entry per
/// vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DijkstraDataVec {
    pub predecessors: Vec<Vertex>,
    pub distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        DijkstraDataVec {
            predecessors: vec![Vertex::MAX; graph.number_of_vertices() as usize],
            distances: vec![Distance::MAX; graph.number_of_vertices() as usize],
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    /// Paths to every vertex in index order, `None` where unreachable.
    pub fn get_paths(&self) -> Vec<Option<Path>> {
        (0..self.number_of_vertices())
            .map(|target| self.get_path(target))
            .collect()
    }

    /// Distances to every vertex, `None` where unreachable.
    pub fn get_distances(&self) -> Vec<Option<Distance>> {
        self.distances
            .iter()
            .map(|&distance| Some(distance).filter(|&distance| distance != Distance::MAX))
            .collect()
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(Vertex::MAX);
        self.distances.fill(Distance::MAX);
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[vertex as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance
    }
}

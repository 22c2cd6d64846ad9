use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn unweighted(&self) -> TreeEdge {
        TreeEdge {
            tail: self.tail,
            head: self.head,
        }
    }
}

/// An edge of a routing tree, rendered as `tail -- head`.
///
/// Tree edges keep the orientation they were discovered in, so `0 -- 1` and
/// `1 -- 0` are different edges as far as deduplication is concerned.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TreeEdge {
    tail: Vertex,
    head: Vertex,
}

impl TreeEdge {
    pub fn new(tail: Vertex, head: Vertex) -> TreeEdge {
        TreeEdge { tail, head }
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    /// Same edge with the smaller vertex first.
    pub fn normalized(&self) -> TreeEdge {
        TreeEdge {
            tail: self.tail.min(self.head),
            head: self.tail.max(self.head),
        }
    }
}

impl fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.tail, self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_edge_display() {
        assert_eq!(TreeEdge::new(3, 1).to_string(), "3 -- 1");
        assert_eq!(TreeEdge::new(3, 1).normalized().to_string(), "1 -- 3");
    }

    #[test]
    fn unweighted_keeps_orientation() {
        let edge = WeightedEdge::new(4, 0, 12).unweighted();
        assert_eq!((edge.tail(), edge.head()), (4, 0));
    }
}

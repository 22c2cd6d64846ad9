//! Routing trees: the edge lists handed to a renderer.

use ahash::{HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use crate::{
    graphs::{edge::TreeEdge, Graph, Vertex, Weight},
    search::dijkstra_data::Path,
};

/// Edges along the given paths, deduplicated in first seen order.
///
/// `None` marks an unreachable destination and contributes nothing, as does
/// the single vertex path of the source to itself.
pub fn extract_from_paths<'a>(
    paths: impl IntoIterator<Item = &'a Option<Path>>,
) -> Vec<TreeEdge> {
    let edges = paths
        .into_iter()
        .flatten()
        .flat_map(|path| {
            path.vertices
                .windows(2)
                .map(|pair| TreeEdge::new(pair[0], pair[1]))
        });
    unique(edges)
}

/// One edge per vertex pair that is connected in at least one direction,
/// written with the smaller vertex first.
pub fn extract_global(graph: &dyn Graph) -> Vec<TreeEdge> {
    let edges = graph.vertices().flat_map(|tail| {
        graph
            .out_edges(tail)
            .map(|edge| edge.unweighted().normalized())
    });
    unique(edges)
}

fn unique(edges: impl Iterator<Item = TreeEdge>) -> Vec<TreeEdge> {
    let mut seen = HashSet::new();
    edges.filter(|edge| seen.insert(*edge)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeKind {
    Global,
    Router(Vertex),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledEdge {
    pub edge: TreeEdge,
    pub weight: Weight,
}

/// A tree to render, labelled with the edge weights at extraction time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingTree {
    pub kind: TreeKind,
    pub iteration: u32,
    pub edges: Vec<LabeledEdge>,
}

impl RoutingTree {
    pub fn global(graph: &dyn Graph, iteration: u32) -> RoutingTree {
        RoutingTree::with_labels(graph, TreeKind::Global, iteration, extract_global(graph))
    }

    pub fn for_router(
        graph: &dyn Graph,
        router: Vertex,
        iteration: u32,
        paths: &[Option<Path>],
    ) -> RoutingTree {
        RoutingTree::with_labels(
            graph,
            TreeKind::Router(router),
            iteration,
            extract_from_paths(paths),
        )
    }

    fn with_labels(
        graph: &dyn Graph,
        kind: TreeKind,
        iteration: u32,
        edges: Vec<TreeEdge>,
    ) -> RoutingTree {
        let edges = edges
            .into_iter()
            .map(|edge| LabeledEdge {
                edge,
                weight: graph
                    .get_weight(edge.tail(), edge.head())
                    .or_else(|| graph.get_weight(edge.head(), edge.tail()))
                    .unwrap_or(0),
            })
            .collect();

        RoutingTree {
            kind,
            iteration,
            edges,
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TreeKind::Global => format!("Global Tree - Iteration {}", self.iteration),
            TreeKind::Router(router) => {
                format!("Router tree {} - Iteration {}", router, self.iteration)
            }
        }
    }

    /// File name stem shared by every artifact rendered for this tree.
    pub fn file_stem(&self) -> String {
        match self.kind {
            TreeKind::Global => format!("global_tree_iter{}", self.iteration),
            TreeKind::Router(router) => format!("tree_iter{}_router{}", self.iteration, router),
        }
    }
}

//! Pseudo-random edge weights that drift between iterations.
//!
//! Weights are drawn per undirected vertex pair and written to every present
//! direction of that pair, so a symmetric matrix stays symmetric. Directions
//! without an edge are never touched.

use std::ops::RangeInclusive;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::graphs::{Graph, Vertex, Weight};

/// Range of the weights assigned by [`WeightDynamics::initialize_weights`].
pub const INITIAL_WEIGHTS: RangeInclusive<Weight> = 5..=20;

/// Range of the perturbations drawn by [`WeightDynamics::update_weights`].
pub const PERTURBATIONS: RangeInclusive<i32> = -10..=10;

/// Adds `perturbation` to `weight`, reflecting it if the edge would otherwise
/// drop to zero or below.
///
/// The result is always strictly positive for a positive `weight`, so an
/// existing edge never turns into "no edge".
pub fn apply_perturbation(weight: Weight, perturbation: i32) -> Weight {
    let shifted = weight as i64 + perturbation as i64;
    let new_weight = if shifted > 0 {
        shifted
    } else {
        weight as i64 - perturbation as i64
    };
    Weight::try_from(new_weight).unwrap_or(Weight::MAX)
}

pub struct WeightDynamics<R: Rng> {
    rng: R,
}

impl WeightDynamics<StdRng> {
    /// Seeded dynamics if `seed` is given, otherwise seeded from entropy.
    pub fn from_seed(seed: Option<u64>) -> WeightDynamics<StdRng> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        WeightDynamics::new(rng)
    }
}

impl<R: Rng> WeightDynamics<R> {
    pub fn new(rng: R) -> WeightDynamics<R> {
        WeightDynamics { rng }
    }

    /// Replaces every edge weight by a draw from [`INITIAL_WEIGHTS`].
    pub fn initialize_weights(&mut self, graph: &mut dyn Graph) {
        let mut pairs = 0;
        for (tail, head) in edge_pairs(graph) {
            let weight = self.rng.gen_range(INITIAL_WEIGHTS);
            set_pair(graph, tail, head, |_| weight);
            pairs += 1;
        }
        debug!("initialized weights of {} vertex pairs", pairs);
    }

    /// Perturbs every edge weight by a draw from [`PERTURBATIONS`].
    pub fn update_weights(&mut self, graph: &mut dyn Graph) {
        let mut pairs = 0;
        for (tail, head) in edge_pairs(graph) {
            let perturbation = self.rng.gen_range(PERTURBATIONS);
            set_pair(graph, tail, head, |weight| {
                apply_perturbation(weight, perturbation)
            });
            pairs += 1;
        }
        debug!("updated weights of {} vertex pairs", pairs);
    }
}

/// Vertex pairs `(tail, head)` with `tail <= head` that have an edge in at
/// least one direction.
fn edge_pairs(graph: &dyn Graph) -> Vec<(Vertex, Vertex)> {
    let n = graph.number_of_vertices();
    (0..n)
        .flat_map(|tail| (tail..n).map(move |head| (tail, head)))
        .filter(|&(tail, head)| {
            graph.get_weight(tail, head).is_some() || graph.get_weight(head, tail).is_some()
        })
        .collect()
}

fn set_pair(
    graph: &mut dyn Graph,
    tail: Vertex,
    head: Vertex,
    new_weight: impl Fn(Weight) -> Weight,
) {
    if let Some(weight) = graph.get_weight(tail, head) {
        graph.set_weight(tail, head, Some(new_weight(weight)));
    }
    if tail != head {
        if let Some(weight) = graph.get_weight(head, tail) {
            graph.set_weight(head, tail, Some(new_weight(weight)));
        }
    }
}

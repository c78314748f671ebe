//! Graph augmentation: duplicating shortest paths between paired odd vertices.
//!
//! For each pair, the shortest path is recomputed and every edge along it is
//! appended to an arena copy of the graph. Intermediate path vertices gain
//! two edge-ends each (parity kept); the two paired vertices gain one each
//! (odd becomes even).
//!
//! The weight of a duplicated step `a → b` is the first `b` entry in `a`'s
//! original adjacency. With parallel edges of differing weight between the
//! same two vertices that may not be the edge the shortest path used.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{trace, warn};

use crate::error::{PostmanError, Result};
use crate::euler::EulerGraph;
use crate::graph::Graph;
use crate::models::Edge;
use crate::pairing::IndexPair;
use crate::shortest_path::dijkstra;

/// An arena copy of a graph with duplicated edges, ready for circuit building.
#[derive(Debug, Clone)]
pub struct Augmentation<V> {
    /// Original edges followed by the duplicates.
    pub graph: EulerGraph,
    /// Total weight of the duplicated edges.
    pub extra_cost: f64,
    /// The duplicated edges, in insertion order.
    pub duplicated: Vec<Edge<V>>,
}

/// Duplicates the shortest path of every pair in `pairs` on top of `graph`.
///
/// The returned arena holds the original edges (ids unchanged) followed by
/// one duplicate per shortest-path step, in pair order.
///
/// # Arguments
///
/// * `graph`: The input graph; never modified
/// * `pairs`: Odd-vertex pairs by vertex index, as produced by a
///   [`PairingStrategy`](crate::pairing::PairingStrategy)
///
/// # Errors
///
/// [`PostmanError::DisconnectedGraph`] if a pair has no path, and
/// [`PostmanError::InternalConsistency`] if a path step has no backing edge.
pub fn augment<V: Clone + Eq + Hash + Debug>(
    graph: &Graph<V>,
    pairs: &[IndexPair],
) -> Result<Augmentation<V>> {
    let mut arena = EulerGraph::from_graph(graph);
    let mut extra_cost = 0.0;
    let mut duplicated = Vec::new();

    for pair in pairs {
        let tree = dijkstra(graph, pair.from, Some(pair.to));
        if !tree.dist[pair.to].is_finite() {
            let (from, to) = (graph.vertex_at(pair.from), graph.vertex_at(pair.to));
            warn!(?from, ?to, "no path between paired odd vertices");
            return Err(PostmanError::disconnected(from, to));
        }

        let path = tree.path_to(pair.to);
        for step in path.windows(2) {
            let (a, b) = (step[0], step[1]);
            let weight = first_weight(graph, a, b).ok_or_else(|| PostmanError::InternalConsistency {
                message: format!("shortest path step #{a} -> #{b} has no edge"),
            })?;
            arena.add_edge(a, b);
            extra_cost += weight;
            duplicated.push(Edge::new(
                graph.vertex_at(a).clone(),
                graph.vertex_at(b).clone(),
                weight,
            ));
        }
        trace!(
            from = ?graph.vertex_at(pair.from),
            to = ?graph.vertex_at(pair.to),
            steps = path.len() - 1,
            "duplicated shortest path"
        );
    }

    Ok(Augmentation {
        graph: arena,
        extra_cost,
        duplicated,
    })
}

/// Weight of the first `b` entry in `a`'s adjacency.
fn first_weight<V: Clone + Eq + Hash>(graph: &Graph<V>, a: usize, b: usize) -> Option<f64> {
    graph
        .adjacent(a)
        .iter()
        .find(|e| e.neighbor == b)
        .map(|e| e.weight)
}

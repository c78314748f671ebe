//! Degree parity and connectivity analysis.

use std::collections::VecDeque;
use std::hash::Hash;

use super::Graph;
use crate::error::{PostmanError, Result};

/// Returns the indices of odd-degree vertices, in vertex insertion order.
///
/// Degrees are counted over the edge list in O(E). By the handshake lemma
/// the result always has even length; an odd length is reported as
/// [`PostmanError::InternalConsistency`].
pub(crate) fn odd_vertex_indices<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Result<Vec<usize>> {
    let mut degree = vec![0usize; graph.vertex_count()];
    for &(u, v) in graph.endpoints() {
        degree[u] += 1;
        degree[v] += 1;
    }

    let odd: Vec<usize> = degree
        .iter()
        .enumerate()
        .filter(|(_, d)| **d % 2 != 0)
        .map(|(i, _)| i)
        .collect();

    if odd.len() % 2 != 0 {
        return Err(PostmanError::InternalConsistency {
            message: format!(
                "{} odd-degree vertices across {} edges breaks the handshake lemma",
                odd.len(),
                graph.edge_count()
            ),
        });
    }
    Ok(odd)
}

/// Breadth-first search from `start`; returns the first vertex (in insertion
/// order) that is not reachable, or `None` if the graph is connected.
pub(crate) fn first_unreached<V: Clone + Eq + Hash>(
    graph: &Graph<V>,
    start: usize,
) -> Option<usize> {
    let n = graph.vertex_count();
    if n == 0 {
        return None;
    }
    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for a in graph.adjacent(u) {
            if !seen[a.neighbor] {
                seen[a.neighbor] = true;
                queue.push_back(a.neighbor);
            }
        }
    }

    seen.iter().position(|&s| !s)
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Returns the odd-degree vertices in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge(1, 2, 1.0);
    /// g.add_edge(2, 3, 1.0);
    /// assert_eq!(g.degree_parity().unwrap(), vec![1, 3]);
    /// ```
    pub fn degree_parity(&self) -> Result<Vec<V>> {
        let odd = odd_vertex_indices(self)?;
        Ok(odd.into_iter().map(|i| self.vertex_at(i).clone()).collect())
    }

    /// Returns `true` if every vertex can reach every other vertex.
    pub fn is_connected(&self) -> bool {
        first_unreached(self, 0).is_none()
    }
}

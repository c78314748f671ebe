//! Eulerian circuit construction.
//!
//! - [`EulerGraph`]: edge arena with per-vertex adjacency of edge ids
//! - [`eulerian_circuit`]: Hierholzer's algorithm, O(V + E)

mod arena;
mod hierholzer;

use std::fmt::Debug;
use std::hash::Hash;

pub use arena::EulerGraph;
pub use hierholzer::eulerian_circuit;

use crate::error::{PostmanError, Result};
use crate::graph::Graph;

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    /// Eulerian circuit of this graph as-is, without augmentation.
    ///
    /// Starts at `start`, or the first inserted vertex. Fails with
    /// [`PostmanError::InternalConsistency`] if some vertex has odd degree and
    /// with [`PostmanError::IncompleteCircuit`] if the graph is disconnected.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge("A", "B", 1.0);
    /// g.add_edge("B", "C", 1.0);
    /// g.add_edge("C", "A", 1.0);
    /// assert_eq!(g.eulerian_circuit(Some(&"B")).unwrap(), vec!["B", "A", "C", "B"]);
    /// ```
    pub fn eulerian_circuit(&self, start: Option<&V>) -> Result<Vec<V>> {
        let start = match start {
            Some(v) => Some(
                self.index_of(v)
                    .ok_or_else(|| PostmanError::UnknownVertex {
                        vertex: format!("{v:?}"),
                    })?,
            ),
            None => None,
        };

        let circuit = eulerian_circuit(&EulerGraph::from_graph(self), start)?;
        Ok(circuit
            .into_iter()
            .map(|i| self.vertex_at(i).clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_circuit_default_start() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        g.add_edge(3, 1, 1.0);
        assert_eq!(g.eulerian_circuit(None).expect("eulerian"), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_graph_circuit_odd_vertices_fail() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        let err = g.eulerian_circuit(None).expect_err("path, not circuit");
        assert!(err.is_internal_error());
    }

    #[test]
    fn test_graph_circuit_unknown_start() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 1, 1.0);
        let err = g.eulerian_circuit(Some(&7)).expect_err("unknown");
        assert_eq!(err, PostmanError::UnknownVertex { vertex: "7".into() });
    }
}

//! Edge arena for circuit construction.

use std::hash::Hash;

use crate::graph::Graph;

/// Multigraph of edge records referenced by index from per-vertex adjacency
/// lists.
///
/// Each edge id appears once in each endpoint's list (twice in the same list
/// for a self-loop). Circuit construction marks edges used by id instead of
/// searching and removing list entries.
///
/// # Examples
///
/// ```
/// use u_postman::euler::EulerGraph;
///
/// let mut g = EulerGraph::with_vertices(3);
/// g.add_edge(0, 1);
/// g.add_edge(1, 2);
/// g.add_edge(2, 0);
/// assert_eq!(g.num_edges(), 3);
/// assert!(g.is_even());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EulerGraph {
    edges: Vec<(usize, usize)>,
    adjacency: Vec<Vec<(usize, usize)>>,
}

impl EulerGraph {
    /// Creates an edgeless graph on vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Copies the adjacency of `graph`, keeping its entry order and edge ids.
    pub fn from_graph<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Self {
        let adjacency = (0..graph.vertex_count())
            .map(|i| {
                graph
                    .adjacent(i)
                    .iter()
                    .map(|a| (a.neighbor, a.edge))
                    .collect()
            })
            .collect();
        Self {
            edges: graph.endpoints().to_vec(),
            adjacency,
        }
    }

    /// Appends an edge between `u` and `v` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) -> usize {
        let id = self.edges.len();
        self.edges.push((u, v));
        self.adjacency[u].push((v, id));
        self.adjacency[v].push((u, id));
        id
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Endpoints of edge `id`.
    pub fn edge(&self, id: usize) -> (usize, usize) {
        self.edges[id]
    }

    /// Number of edge-ends at `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Returns `true` if every vertex has even degree.
    pub fn is_even(&self) -> bool {
        self.adjacency.iter().all(|a| a.len() % 2 == 0)
    }

    pub(super) fn entries(&self, v: usize) -> &[(usize, usize)] {
        &self.adjacency[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_graph_keeps_order_and_ids() {
        let mut g = Graph::new();
        g.add_edge('a', 'b', 1.0);
        g.add_edge('a', 'c', 2.0);
        g.add_edge('b', 'c', 3.0);
        let eg = EulerGraph::from_graph(&g);
        assert_eq!(eg.num_vertices(), 3);
        assert_eq!(eg.num_edges(), 3);
        assert_eq!(eg.entries(0), &[(1, 0), (2, 1)]);
        assert_eq!(eg.entries(2), &[(0, 1), (1, 2)]);
        assert_eq!(eg.edge(2), (1, 2));
    }

    #[test]
    fn test_add_edge_appends() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 1.0);
        let mut eg = EulerGraph::from_graph(&g);
        assert!(!eg.is_even());
        let id = eg.add_edge(1, 0);
        assert_eq!(id, 1);
        assert_eq!(eg.entries(0), &[(1, 0), (1, 1)]);
        assert!(eg.is_even());
    }

    #[test]
    fn test_self_loop_degree() {
        let mut eg = EulerGraph::with_vertices(1);
        eg.add_edge(0, 0);
        assert_eq!(eg.degree(0), 2);
        assert!(eg.is_even());
    }
}

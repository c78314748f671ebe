//! Insertion-ordered undirected graph store.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::models::Edge;

/// One adjacency entry: the far endpoint, the edge weight, and the id of the
/// edge record it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Adjacent {
    pub neighbor: usize,
    pub weight: f64,
    pub edge: usize,
}

/// A weighted undirected graph built by repeated edge insertion.
///
/// Vertices are generic and iterate in insertion order (first appearance as
/// an edge endpoint). Each edge is stored once in the edge list and twice in
/// the adjacency lists, once per endpoint, with identical weight. Parallel
/// edges and self-loops are kept as inserted.
///
/// Weights should be finite and non-negative. They are not validated:
/// negative weights make shortest paths meaningless.
///
/// # Examples
///
/// ```
/// use u_postman::graph::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge("A", "B", 3.0);
/// g.add_edge("B", "C", 4.0);
///
/// assert_eq!(g.vertices().collect::<Vec<_>>(), vec![&"A", &"B", &"C"]);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.degree(&"B"), 2);
/// assert_eq!(g.neighbors(&"B").collect::<Vec<_>>(), vec![(&"A", 3.0), (&"C", 4.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: IndexSet<V>,
    adjacency: Vec<Vec<Adjacent>>,
    edges: Vec<Edge<V>>,
    endpoints: Vec<(usize, usize)>,
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Inserts an undirected edge between `u` and `v`.
    ///
    /// Unknown endpoints are added as vertices, `u` before `v`.
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) {
        debug_assert!(weight.is_finite(), "edge weight must be finite");
        let ui = self.intern(u.clone());
        let vi = self.intern(v.clone());
        let id = self.edges.len();

        self.adjacency[ui].push(Adjacent {
            neighbor: vi,
            weight,
            edge: id,
        });
        self.adjacency[vi].push(Adjacent {
            neighbor: ui,
            weight,
            edge: id,
        });
        self.edges.push(Edge::new(u, v, weight));
        self.endpoints.push((ui, vi));
    }

    fn intern(&mut self, vertex: V) -> usize {
        let (index, inserted) = self.vertices.insert_full(vertex);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        index
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Iterates over `(neighbor, weight)` entries of `vertex`, in insertion
    /// order. Empty for unknown vertices.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        let entries: &[Adjacent] = match self.index_of(vertex) {
            Some(i) => &self.adjacency[i],
            None => &[],
        };
        entries
            .iter()
            .map(move |a| (&self.vertices[a.neighbor], a.weight))
    }

    /// The edge list in insertion order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of inserted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge has been inserted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` if `vertex` is an endpoint of some edge.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Number of edge-ends incident to `vertex` (a self-loop counts twice).
    pub fn degree(&self, vertex: &V) -> usize {
        self.index_of(vertex)
            .map_or(0, |i| self.adjacency[i].len())
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[Adjacent] {
        &self.adjacency[index]
    }

    pub(crate) fn endpoints(&self) -> &[(usize, usize)] {
        &self.endpoints
    }
}

impl<V: Clone + Eq + Hash> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Dijkstra's algorithm over the graph store.
//!
//! # Algorithm
//!
//! A binary heap holds `(distance, vertex)` entries ordered by smallest
//! distance. Popped entries that are staler than the best known distance are
//! skipped; neighbours are relaxed only on strict improvement, recording the
//! predecessor. Equal distances pop in vertex insertion order.
//!
//! # Complexity
//!
//! O((V + E) log V) per search.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::graph::Graph;

/// Distance from a source to every vertex, in vertex insertion order.
/// Unreached vertices map to `f64::INFINITY`.
pub type DistanceTable<V> = IndexMap<V, f64>;

/// Result of a point-to-point query.
///
/// When the target is unreachable `distance` is infinite and `path` is the
/// degenerate `[end]`; check [`ShortestPath::is_reachable`] before using the
/// path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V> {
    /// Total weight along `path`.
    pub distance: f64,
    /// Vertices from start to end, inclusive.
    pub path: Vec<V>,
}

impl<V> ShortestPath<V> {
    /// Returns `true` if the target was reached.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of edges on the path.
    pub fn num_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    dist: f64,
    node: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour in BinaryHeap
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Shortest-path tree rooted at one source, indexed by vertex index.
#[derive(Debug, Clone)]
pub(crate) struct SearchTree {
    pub dist: Vec<f64>,
    pub pred: Vec<Option<usize>>,
}

impl SearchTree {
    /// Walks predecessors back from `target`. Yields `[target]` if it was
    /// never reached.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.pred[current] {
            // Non-negative weights keep the tree acyclic; the bound guards
            // against negative-weight input.
            if path.len() > self.pred.len() {
                break;
            }
            path.push(p);
            current = p;
        }
        path.reverse();
        path
    }
}

/// Runs Dijkstra from `source`, stopping early once `target` is popped.
pub(crate) fn dijkstra<V: Clone + Eq + Hash>(
    graph: &Graph<V>,
    source: usize,
    target: Option<usize>,
) -> SearchTree {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(HeapEntry {
        dist: 0.0,
        node: source,
    });

    while let Some(HeapEntry { dist: d, node: u }) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        if target == Some(u) {
            break;
        }
        for a in graph.adjacent(u) {
            let candidate = d + a.weight;
            if candidate < dist[a.neighbor] {
                dist[a.neighbor] = candidate;
                pred[a.neighbor] = Some(u);
                heap.push(HeapEntry {
                    dist: candidate,
                    node: a.neighbor,
                });
            }
        }
    }

    SearchTree { dist, pred }
}

/// Shortest distance from `start` to every vertex of `graph`.
///
/// An unknown `start` yields an all-infinite table.
pub fn single_source<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V) -> DistanceTable<V> {
    let dist = match graph.index_of(start) {
        Some(s) => dijkstra(graph, s, None).dist,
        None => vec![f64::INFINITY; graph.vertex_count()],
    };
    graph.vertices().cloned().zip(dist).collect()
}

/// Shortest path from `start` to `end`.
///
/// Unknown or unreachable endpoints yield an infinite distance and the
/// path `[end]`.
pub fn point_to_point<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V, end: &V) -> ShortestPath<V> {
    let (Some(s), Some(t)) = (graph.index_of(start), graph.index_of(end)) else {
        return ShortestPath {
            distance: f64::INFINITY,
            path: vec![end.clone()],
        };
    };

    let tree = dijkstra(graph, s, Some(t));
    ShortestPath {
        distance: tree.dist[t],
        path: tree
            .path_to(t)
            .into_iter()
            .map(|i| graph.vertex_at(i).clone())
            .collect(),
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Shortest distance from `start` to every vertex. See [`single_source`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge("A", "B", 3.0);
    /// g.add_edge("B", "C", 4.0);
    /// g.add_edge("A", "C", 10.0);
    ///
    /// let table = g.single_source(&"A");
    /// assert_eq!(table[&"C"], 7.0);
    /// ```
    pub fn single_source(&self, start: &V) -> DistanceTable<V> {
        single_source(self, start)
    }

    /// Shortest path between two vertices. See [`point_to_point`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge("A", "B", 3.0);
    /// g.add_edge("B", "C", 4.0);
    /// g.add_edge("A", "C", 10.0);
    ///
    /// let sp = g.point_to_point(&"A", &"C");
    /// assert!(sp.is_reachable());
    /// assert_eq!(sp.distance, 7.0);
    /// assert_eq!(sp.path, vec!["A", "B", "C"]);
    /// ```
    pub fn point_to_point(&self, start: &V, end: &V) -> ShortestPath<V> {
        point_to_point(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph<u32> {
        let mut g = Graph::new();
        g.add_edge(1, 2, 4.0);
        g.add_edge(1, 3, 3.0);
        g.add_edge(1, 5, 10.0);
        g.add_edge(2, 3, 2.0);
        g.add_edge(2, 4, 3.0);
        g.add_edge(3, 4, 3.0);
        g.add_edge(4, 5, 9.0);
        g
    }

    #[test]
    fn test_single_source_distances() {
        let g = sample_graph();
        let table = g.single_source(&1);
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5, 4]);
        assert!((table[&1] - 0.0).abs() < 1e-10);
        assert!((table[&2] - 4.0).abs() < 1e-10);
        assert!((table[&3] - 3.0).abs() < 1e-10);
        assert!((table[&4] - 6.0).abs() < 1e-10);
        assert!((table[&5] - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_source_unknown_start() {
        let g = sample_graph();
        let table = g.single_source(&42);
        assert_eq!(table.len(), 5);
        assert!(table.values().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_point_to_point_path() {
        let g = sample_graph();
        let sp = g.point_to_point(&1, &4);
        assert!((sp.distance - 6.0).abs() < 1e-10);
        assert_eq!(sp.path, vec![1, 3, 4]);
        assert_eq!(sp.num_edges(), 2);
    }

    #[test]
    fn test_point_to_point_same_vertex() {
        let g = sample_graph();
        let sp = g.point_to_point(&2, &2);
        assert_eq!(sp.distance, 0.0);
        assert_eq!(sp.path, vec![2]);
    }

    #[test]
    fn test_point_to_point_prefers_cheaper_detour() {
        let g = sample_graph();
        // Direct 1-5 costs 10; no detour is cheaper (1-3-4-5 = 15)
        let sp = g.point_to_point(&1, &5);
        assert_eq!(sp.path, vec![1, 5]);
        // 5-2: 5-1-2 = 14, 5-4-2 = 12
        let sp = g.point_to_point(&5, &2);
        assert!((sp.distance - 12.0).abs() < 1e-10);
        assert_eq!(sp.path, vec![5, 4, 2]);
    }

    #[test]
    fn test_point_to_point_unreachable() {
        let mut g = Graph::new();
        g.add_edge('a', 'b', 1.0);
        g.add_edge('c', 'd', 1.0);
        let sp = g.point_to_point(&'a', &'d');
        assert!(!sp.is_reachable());
        assert_eq!(sp.path, vec!['d']);
        assert!(g.single_source(&'a')[&'c'].is_infinite());
    }

    #[test]
    fn test_point_to_point_unknown_vertex() {
        let g = sample_graph();
        let sp = g.point_to_point(&1, &99);
        assert!(!sp.is_reachable());
        assert_eq!(sp.path, vec![99]);
    }

    #[test]
    fn test_heap_pops_smallest_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { dist: 2.0, node: 0 });
        heap.push(HeapEntry { dist: 1.0, node: 5 });
        heap.push(HeapEntry { dist: 1.0, node: 3 });
        assert_eq!(heap.pop().map(|e| e.node), Some(3));
        assert_eq!(heap.pop().map(|e| e.node), Some(5));
        assert_eq!(heap.pop().map(|e| e.node), Some(0));
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 0.0);
        g.add_edge(2, 3, 0.0);
        let sp = g.point_to_point(&1, &3);
        assert_eq!(sp.distance, 0.0);
        assert_eq!(sp.path, vec![1, 2, 3]);
    }
}

//! Hierholzer's algorithm for Eulerian circuits.
//!
//! # Algorithm
//!
//! Keep a stack seeded with the start vertex. While it is non-empty, look at
//! the top vertex: if it still has an unused incident edge, mark the edge
//! used and push the far endpoint; otherwise pop the vertex onto the output.
//! The output, reversed, is the circuit.
//!
//! Each vertex keeps a cursor to its first possibly-unused adjacency entry,
//! so every entry is inspected a constant number of times.
//!
//! # Complexity
//!
//! O(V + E).
//!
//! # Reference
//!
//! Hierholzer, C. & Wiener, C. (1873). "Ueber die Möglichkeit, einen
//! Linienzug ohne Wiederholung und ohne Unterbrechung zu umfahren",
//! *Mathematische Annalen* 6(1), 30-32.

use tracing::trace;

use super::EulerGraph;
use crate::error::{PostmanError, Result};

/// Builds an Eulerian circuit of `graph` as a sequence of vertex indices.
///
/// Starts at `start`, or vertex 0 when `None`. The graph must be connected
/// (over its edge-bearing vertices) with every degree even. An odd degree is
/// reported as [`PostmanError::InternalConsistency`]; if any edge is left
/// unused the result is [`PostmanError::IncompleteCircuit`] rather than a
/// partial walk. An edgeless graph yields `[start]`, and a graph with no
/// vertices yields an empty circuit.
///
/// # Examples
///
/// ```
/// use u_postman::euler::{eulerian_circuit, EulerGraph};
///
/// // Two triangles sharing vertex 0
/// let mut g = EulerGraph::with_vertices(5);
/// for (u, v) in [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)] {
///     g.add_edge(u, v);
/// }
/// let circuit = eulerian_circuit(&g, None).unwrap();
/// assert_eq!(circuit, vec![0, 1, 2, 0, 3, 4, 0]);
/// ```
pub fn eulerian_circuit(graph: &EulerGraph, start: Option<usize>) -> Result<Vec<usize>> {
    let n = graph.num_vertices();
    let m = graph.num_edges();
    if n == 0 {
        return Ok(Vec::new());
    }

    let start = start.unwrap_or(0);
    if start >= n {
        return Err(PostmanError::UnknownVertex {
            vertex: format!("#{start}"),
        });
    }

    if let Some(odd) = (0..n).find(|&v| graph.degree(v) % 2 != 0) {
        return Err(PostmanError::InternalConsistency {
            message: format!("vertex #{odd} has odd degree {}", graph.degree(odd)),
        });
    }

    let mut used = vec![false; m];
    let mut cursor = vec![0usize; n];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(m + 1);
    let mut consumed = 0;

    while let Some(&v) = stack.last() {
        let entries = graph.entries(v);
        while cursor[v] < entries.len() && used[entries[cursor[v]].1] {
            cursor[v] += 1;
        }

        match entries.get(cursor[v]) {
            Some(&(next, edge)) => {
                used[edge] = true;
                consumed += 1;
                cursor[v] += 1;
                stack.push(next);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }

    if consumed != m {
        return Err(PostmanError::IncompleteCircuit { consumed, total: m });
    }

    circuit.reverse();
    trace!(start, edges = m, "built eulerian circuit");
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: usize, edges: &[(usize, usize)]) -> EulerGraph {
        let mut g = EulerGraph::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    fn assert_uses_every_edge(g: &EulerGraph, circuit: &[usize]) {
        assert_eq!(circuit.len(), g.num_edges() + 1);
        assert_eq!(circuit.first(), circuit.last());
        let mut remaining: Vec<(usize, usize)> = (0..g.num_edges()).map(|i| g.edge(i)).collect();
        for w in circuit.windows(2) {
            let pos = remaining
                .iter()
                .position(|&(a, b)| (a, b) == (w[0], w[1]) || (a, b) == (w[1], w[0]))
                .expect("step follows an unused edge");
            remaining.swap_remove(pos);
        }
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_triangle() {
        let g = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let c = eulerian_circuit(&g, None).expect("eulerian");
        assert_eq!(c, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_custom_start() {
        let g = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let c = eulerian_circuit(&g, Some(2)).expect("eulerian");
        assert_eq!(c.first(), Some(&2));
        assert_uses_every_edge(&g, &c);
    }

    #[test]
    fn test_splices_subtour() {
        // Square 0-1-2-3 with a detour triangle 1-4-5 hanging off vertex 1
        let g = build(
            6,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 4), (4, 5), (5, 1)],
        );
        let c = eulerian_circuit(&g, None).expect("eulerian");
        assert_uses_every_edge(&g, &c);
    }

    #[test]
    fn test_parallel_edges_and_loop() {
        let g = build(2, &[(0, 1), (0, 1), (1, 1)]);
        let c = eulerian_circuit(&g, None).expect("eulerian");
        assert_eq!(c, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_disconnected_is_incomplete() {
        let g = build(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let err = eulerian_circuit(&g, None).expect_err("two components");
        assert_eq!(
            err,
            PostmanError::IncompleteCircuit {
                consumed: 3,
                total: 6
            }
        );
    }

    #[test]
    fn test_edgeless() {
        let g = EulerGraph::with_vertices(2);
        assert_eq!(eulerian_circuit(&g, Some(1)).expect("trivial"), vec![1]);
        let empty = EulerGraph::default();
        assert!(eulerian_circuit(&empty, None).expect("trivial").is_empty());
    }

    #[test]
    fn test_odd_degree_rejected() {
        let g = build(3, &[(0, 1), (1, 2)]);
        let err = eulerian_circuit(&g, None).expect_err("open path");
        assert!(matches!(err, PostmanError::InternalConsistency { .. }));
    }

    #[test]
    fn test_start_out_of_range() {
        let g = build(2, &[(0, 1), (0, 1)]);
        let err = eulerian_circuit(&g, Some(5)).expect_err("bad start");
        assert!(matches!(err, PostmanError::UnknownVertex { .. }));
    }
}

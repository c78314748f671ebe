//! Matching and solution types.

use serde::{Deserialize, Serialize};

use super::Edge;

/// Two odd-degree vertices paired by a pairing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair<V> {
    /// Vertex the pairing started from.
    pub from: V,
    /// Vertex it was paired with.
    pub to: V,
    /// Shortest-path distance between the two.
    pub cost: f64,
}

/// A complete route inspection result.
///
/// The circuit is a closed walk (first vertex == last vertex) that covers
/// every edge of the input graph at least once. `total_cost` is the cost of
/// walking it: `base_cost` (every input edge once) plus `extra_cost` (the
/// duplicated edges needed to make every degree even).
///
/// # Examples
///
/// ```
/// use u_postman::graph::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge('a', 'b', 1.0);
/// g.add_edge('b', 'c', 1.0);
/// g.add_edge('c', 'a', 1.0);
///
/// let sol = g.solve().unwrap();
/// assert_eq!(sol.total_cost(), 3.0);
/// assert_eq!(sol.extra_cost(), 0.0);
/// assert_eq!(sol.circuit(), &['a', 'b', 'c', 'a']);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSolution<V> {
    circuit: Vec<V>,
    base_cost: f64,
    extra_cost: f64,
    matching: Vec<MatchedPair<V>>,
    duplicated_edges: Vec<Edge<V>>,
}

impl<V> RouteSolution<V> {
    pub(crate) fn new(
        circuit: Vec<V>,
        base_cost: f64,
        extra_cost: f64,
        matching: Vec<MatchedPair<V>>,
        duplicated_edges: Vec<Edge<V>>,
    ) -> Self {
        Self {
            circuit,
            base_cost,
            extra_cost,
            matching,
            duplicated_edges,
        }
    }

    /// Cost of walking the circuit.
    pub fn total_cost(&self) -> f64 {
        self.base_cost + self.extra_cost
    }

    /// Sum of all input edge weights.
    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Weight of the duplicated edges.
    pub fn extra_cost(&self) -> f64 {
        self.extra_cost
    }

    /// The closed walk, in traversal order.
    pub fn circuit(&self) -> &[V] {
        &self.circuit
    }

    /// Number of edges walked (`circuit().len() - 1`).
    pub fn num_steps(&self) -> usize {
        self.circuit.len().saturating_sub(1)
    }

    /// Odd-vertex pairs chosen by the pairing strategy. Empty if the input
    /// graph was already Eulerian.
    pub fn matching(&self) -> &[MatchedPair<V>] {
        &self.matching
    }

    /// Sum of the matched pairs' shortest-path distances.
    pub fn matching_cost(&self) -> f64 {
        self.matching.iter().map(|p| p.cost).sum()
    }

    /// Edges walked a second time.
    pub fn duplicated_edges(&self) -> &[Edge<V>] {
        &self.duplicated_edges
    }

    /// Consumes the solution into `(total_cost, circuit)`.
    pub fn into_parts(self) -> (f64, Vec<V>) {
        (self.base_cost + self.extra_cost, self.circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteSolution<u32> {
        RouteSolution::new(
            vec![1, 2, 3, 2, 1],
            10.0,
            4.0,
            vec![MatchedPair {
                from: 1,
                to: 3,
                cost: 4.0,
            }],
            vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, 3.0)],
        )
    }

    #[test]
    fn test_costs() {
        let sol = sample();
        assert!((sol.total_cost() - 14.0).abs() < 1e-10);
        assert!((sol.matching_cost() - 4.0).abs() < 1e-10);
        assert_eq!(sol.num_steps(), 4);
        assert_eq!(sol.duplicated_edges().len(), 2);
    }

    #[test]
    fn test_into_parts() {
        let (cost, circuit) = sample().into_parts();
        assert!((cost - 14.0).abs() < 1e-10);
        assert_eq!(circuit, vec![1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_empty_circuit_steps() {
        let sol: RouteSolution<u32> = RouteSolution::new(vec![], 0.0, 0.0, vec![], vec![]);
        assert_eq!(sol.num_steps(), 0);
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_string(&sample()).expect("serializable");
        let back: RouteSolution<u32> = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, sample());
    }
}

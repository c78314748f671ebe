//! Route inspection solver.
//!
//! # Pipeline
//!
//! 1. Reject graphs without edges.
//! 2. Reject disconnected graphs.
//! 3. Find odd-degree vertices.
//! 4. If there are none, the graph is Eulerian: build the circuit directly.
//! 5. Otherwise pair the odd vertices, duplicate each pair's shortest path,
//!    and build the circuit of the augmented graph.
//!
//! The result is all-or-nothing: any failure aborts the solve without a
//! partial circuit.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::augment::augment;
use crate::config::SolverConfig;
use crate::error::{PostmanError, Result};
use crate::euler::{eulerian_circuit, EulerGraph};
use crate::graph::{first_unreached, odd_vertex_indices, Graph};
use crate::models::{Edge, MatchedPair, RouteSolution};
use crate::pairing::{pairing_cost, IndexPair, PairingStrategy};
use crate::shortest_path::DistanceCache;

/// Solves the route inspection problem on a [`Graph`].
///
/// The solver holds only configuration. It borrows the graph immutably, so
/// one graph can be solved repeatedly (and concurrently) as long as it is not
/// modified; every solve allocates its own working copies.
///
/// # Examples
///
/// ```
/// use u_postman::config::SolverConfig;
/// use u_postman::graph::Graph;
/// use u_postman::pairing::PairingMethod;
/// use u_postman::solver::Solver;
///
/// let mut g = Graph::new();
/// g.add_edge("A", "B", 3.0);
/// g.add_edge("B", "C", 4.0);
/// g.add_edge("C", "D", 5.0);
/// g.add_edge("D", "A", 2.0);
/// g.add_edge("A", "C", 1.0);
///
/// let solver = Solver::new(SolverConfig::default().with_pairing(PairingMethod::Exchange));
/// let sol = solver.solve(&g).unwrap();
/// assert_eq!(sol.total_cost(), 16.0);
/// assert_eq!(sol.circuit(), &["A", "B", "C", "D", "A", "C", "A"]);
/// ```
pub struct Solver<V> {
    config: SolverConfig,
    strategy: Box<dyn PairingStrategy>,
    start: Option<V>,
}

impl<V: Clone + Eq + Hash + Debug> Solver<V> {
    /// Creates a solver using the pairing method named in `config`.
    pub fn new(config: SolverConfig) -> Self {
        let strategy = config.pairing.strategy();
        Self {
            config,
            strategy,
            start: None,
        }
    }

    /// Replaces the pairing strategy with a custom one.
    pub fn with_strategy(mut self, strategy: Box<dyn PairingStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Starts the circuit at `vertex` instead of the first inserted vertex.
    pub fn with_start_vertex(mut self, vertex: V) -> Self {
        self.start = Some(vertex);
        self
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes a closed walk covering every edge of `graph`.
    ///
    /// # Errors
    ///
    /// - [`PostmanError::EmptyGraph`] if `graph` has no edges
    /// - [`PostmanError::UnknownVertex`] if the start vertex is not in `graph`
    /// - [`PostmanError::DisconnectedGraph`] if some edge cannot be reached
    /// - [`PostmanError::TooManyOddVertices`] if the configured ceiling is exceeded
    /// - [`PostmanError::InternalConsistency`] / [`PostmanError::IncompleteCircuit`]
    ///   if a pipeline invariant breaks
    pub fn solve(&self, graph: &Graph<V>) -> Result<RouteSolution<V>> {
        if graph.is_empty() {
            return Err(PostmanError::EmptyGraph);
        }

        let start = match &self.start {
            Some(v) => graph.index_of(v).ok_or_else(|| PostmanError::UnknownVertex {
                vertex: format!("{v:?}"),
            })?,
            None => 0,
        };

        if let Some(unreached) = first_unreached(graph, start) {
            return Err(PostmanError::disconnected(
                graph.vertex_at(start),
                graph.vertex_at(unreached),
            ));
        }

        let base_cost = graph.total_weight();
        let odd = odd_vertex_indices(graph)?;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            odd = odd.len(),
            "solving route inspection"
        );

        if odd.is_empty() {
            let circuit = eulerian_circuit(&EulerGraph::from_graph(graph), Some(start))?;
            return Ok(self.finish(graph, circuit, base_cost, 0.0, &[], Vec::new()));
        }

        if let Some(limit) = self.config.max_odd_vertices {
            if odd.len() > limit {
                return Err(PostmanError::TooManyOddVertices {
                    count: odd.len(),
                    limit,
                });
            }
        }

        let oracle = DistanceCache::new(graph, &odd);
        let pairs = self.strategy.pair(&odd, &oracle)?;
        check_perfect_pairing(&odd, &pairs)?;
        if let Some(p) = pairs.iter().find(|p| !p.cost.is_finite()) {
            return Err(PostmanError::disconnected(
                graph.vertex_at(p.from),
                graph.vertex_at(p.to),
            ));
        }
        debug!(
            strategy = self.strategy.name(),
            pairs = pairs.len(),
            cost = pairing_cost(&pairs),
            "paired odd vertices"
        );

        let augmentation = augment(graph, &pairs)?;
        debug!(
            duplicated = augmentation.duplicated.len(),
            extra_cost = augmentation.extra_cost,
            "augmented graph"
        );

        let circuit = eulerian_circuit(&augmentation.graph, Some(start))?;
        Ok(self.finish(
            graph,
            circuit,
            base_cost,
            augmentation.extra_cost,
            &pairs,
            augmentation.duplicated,
        ))
    }

    fn finish(
        &self,
        graph: &Graph<V>,
        circuit: Vec<usize>,
        base_cost: f64,
        extra_cost: f64,
        pairs: &[IndexPair],
        duplicated: Vec<Edge<V>>,
    ) -> RouteSolution<V> {
        debug!(
            steps = circuit.len().saturating_sub(1),
            total_cost = base_cost + extra_cost,
            "built circuit"
        );
        let circuit = circuit
            .into_iter()
            .map(|i| graph.vertex_at(i).clone())
            .collect();
        let matching = pairs
            .iter()
            .map(|p| MatchedPair {
                from: graph.vertex_at(p.from).clone(),
                to: graph.vertex_at(p.to).clone(),
                cost: p.cost,
            })
            .collect();
        RouteSolution::new(circuit, base_cost, extra_cost, matching, duplicated)
    }
}

impl<V: Clone + Eq + Hash + Debug> Default for Solver<V> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Every odd vertex must appear in exactly one pair.
fn check_perfect_pairing(odd: &[usize], pairs: &[IndexPair]) -> Result<()> {
    let mut expected = odd.to_vec();
    let mut got: Vec<usize> = pairs.iter().flat_map(|p| [p.from, p.to]).collect();
    expected.sort_unstable();
    got.sort_unstable();
    if expected != got {
        return Err(PostmanError::InternalConsistency {
            message: format!(
                "pairing covers {} vertex slots, expected each of {} odd vertices once",
                got.len(),
                expected.len()
            ),
        });
    }
    Ok(())
}

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    /// Solves with the default configuration (greedy pairing).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// for (u, v, w) in [(1, 2, 4.0), (1, 3, 3.0), (1, 5, 10.0), (2, 3, 2.0),
    ///                   (2, 4, 3.0), (3, 4, 3.0), (4, 5, 9.0)] {
    ///     g.add_edge(u, v, w);
    /// }
    /// let (cost, circuit) = g.solve().unwrap().into_parts();
    /// assert_eq!(cost, 40.0);
    /// assert_eq!(circuit, vec![1, 2, 3, 1, 5, 4, 2, 4, 3, 1]);
    /// ```
    pub fn solve(&self) -> Result<RouteSolution<V>> {
        Solver::default().solve(self)
    }
}

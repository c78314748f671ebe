//! Randomised invariants over connected simple graphs.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use proptest::sample::Index;

use u_postman::config::SolverConfig;
use u_postman::graph::Graph;
use u_postman::pairing::PairingMethod;
use u_postman::solver::Solver;
use u_postman::PostmanError;

type EdgeList = Vec<(u32, u32, u32)>;

/// Spanning tree over `0..n` plus deduplicated extra edges, integer weights.
fn connected_simple_graph() -> impl Strategy<Value = EdgeList> {
    (2usize..10)
        .prop_flat_map(|n| {
            let parents = prop::collection::vec(any::<Index>(), n - 1);
            let weights = prop::collection::vec(1u32..20, n - 1);
            let extras = prop::collection::vec((0..n as u32, 0..n as u32, 1u32..20), 0..14);
            (Just(n), parents, weights, extras)
        })
        .prop_map(|(n, parents, weights, extras)| {
            let mut seen = BTreeSet::new();
            let mut edges = Vec::new();
            for i in 1..n {
                let p = parents[i - 1].index(i) as u32;
                let i = i as u32;
                seen.insert((p.min(i), p.max(i)));
                edges.push((p, i, weights[i as usize - 1]));
            }
            for (a, b, w) in extras {
                if a != b && seen.insert((a.min(b), a.max(b))) {
                    edges.push((a, b, w));
                }
            }
            edges
        })
}

fn build(edges: &EdgeList) -> Graph<u32> {
    let mut g = Graph::new();
    for &(u, v, w) in edges {
        g.add_edge(u, v, f64::from(w));
    }
    g
}

fn weight_lookup(edges: &EdgeList) -> HashMap<(u32, u32), f64> {
    edges
        .iter()
        .map(|&(u, v, w)| ((u.min(v), u.max(v)), f64::from(w)))
        .collect()
}

fn solve_with(g: &Graph<u32>, method: PairingMethod) -> f64 {
    Solver::new(SolverConfig::default().with_pairing(method))
        .solve(g)
        .expect("connected graph")
        .total_cost()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_circuit_is_closed_and_covers_every_edge(edges in connected_simple_graph()) {
        let g = build(&edges);
        let sol = g.solve().expect("connected graph");
        let circuit = sol.circuit();

        prop_assert_eq!(circuit.first(), circuit.last());
        prop_assert_eq!(circuit.first(), g.vertices().next());
        prop_assert_eq!(
            circuit.len(),
            g.edge_count() + sol.duplicated_edges().len() + 1
        );

        let walked: BTreeSet<(u32, u32)> = circuit
            .windows(2)
            .map(|w| (w[0].min(w[1]), w[0].max(w[1])))
            .collect();
        for &(u, v, _) in &edges {
            prop_assert!(walked.contains(&(u.min(v), u.max(v))));
        }
    }

    #[test]
    fn prop_walked_weight_equals_total_cost(edges in connected_simple_graph()) {
        let g = build(&edges);
        let sol = g.solve().expect("connected graph");
        let weights = weight_lookup(&edges);

        let mut walked = 0.0;
        for w in sol.circuit().windows(2) {
            let key = (w[0].min(w[1]), w[0].max(w[1]));
            // Every step must follow an existing edge
            prop_assert!(weights.contains_key(&key));
            walked += weights[&key];
        }
        prop_assert!((walked - sol.total_cost()).abs() < 1e-9);
        prop_assert!((sol.base_cost() - g.total_weight()).abs() < 1e-9);
        prop_assert!((sol.extra_cost() - sol.matching_cost()).abs() < 1e-9);
    }

    #[test]
    fn prop_even_graphs_need_no_extra(edges in connected_simple_graph()) {
        let g = build(&edges);
        let odd = g.degree_parity().expect("handshake lemma");
        prop_assert_eq!(odd.len() % 2, 0);

        let sol = g.solve().expect("connected graph");
        prop_assert_eq!(sol.matching().len() * 2, odd.len());
        if odd.is_empty() {
            prop_assert_eq!(sol.extra_cost(), 0.0);
            prop_assert!(sol.duplicated_edges().is_empty());
            prop_assert_eq!(sol.circuit().len(), g.edge_count() + 1);
        } else {
            prop_assert!(sol.extra_cost() > 0.0);
        }
    }

    #[test]
    fn prop_solve_is_deterministic(edges in connected_simple_graph()) {
        let first = build(&edges).solve().expect("connected graph");
        let second = build(&edges).solve().expect("connected graph");
        prop_assert_eq!(first.circuit(), second.circuit());
        prop_assert_eq!(first.total_cost(), second.total_cost());
    }

    #[test]
    fn prop_improving_pairings_never_worse(edges in connected_simple_graph()) {
        let g = build(&edges);
        let greedy = solve_with(&g, PairingMethod::Greedy);
        let exchange = solve_with(&g, PairingMethod::Exchange);
        let multi = solve_with(&g, PairingMethod::MultiStart { restarts: 4, seed: 7 });
        prop_assert!(exchange <= greedy + 1e-9);
        prop_assert!(multi <= exchange + 1e-9);
    }

    #[test]
    fn prop_two_components_are_rejected(
        left in connected_simple_graph(),
        right in connected_simple_graph(),
    ) {
        let mut g = build(&left);
        for &(u, v, w) in &right {
            g.add_edge(u + 100, v + 100, f64::from(w));
        }
        let err = g.solve().expect_err("two components");
        prop_assert!(matches!(err, PostmanError::DisconnectedGraph { .. }), "unexpected error: {:?}", err);
        prop_assert!(g.point_to_point(&0, &100).distance.is_infinite());
    }
}

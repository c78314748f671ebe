//! # u-postman
//!
//! Route inspection (Chinese Postman) for weighted undirected graphs: find
//! a closed walk that covers every edge at least once, duplicating as little
//! weight as the pairing heuristic manages.
//!
//! ## Modules
//!
//! - [`graph`]: Insertion-ordered graph store and degree analysis
//! - [`shortest_path`]: Dijkstra distance tables, paths, and a cached distance oracle
//! - [`pairing`]: Odd-vertex pairing strategies (greedy, exchange, multi-start)
//! - [`augment`]: Duplicating shortest paths to restore even degree
//! - [`euler`]: Edge arena and Hierholzer's circuit construction
//! - [`solver`]: The end-to-end pipeline
//! - [`config`]: Solver options and feature flags
//! - [`render`]: Graphviz DOT output for graphs and routes
//! - [`models`]: Edges, matched pairs, and solutions
//!
//! ## Example
//!
//! ```
//! use u_postman::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edge("A", "B", 3.0);
//! g.add_edge("B", "C", 4.0);
//! g.add_edge("C", "D", 5.0);
//! g.add_edge("D", "A", 2.0);
//! g.add_edge("A", "C", 1.0);
//!
//! let (cost, circuit) = g.solve().unwrap().into_parts();
//! assert_eq!(cost, 16.0);
//! assert_eq!(circuit, vec!["A", "B", "C", "D", "A", "C", "A"]);
//! ```

pub mod augment;
pub mod config;
pub mod error;
pub mod euler;
pub mod graph;
pub mod models;
pub mod pairing;
pub mod render;
pub mod shortest_path;
pub mod solver;

pub use error::{PostmanError, Result};

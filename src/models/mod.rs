//! Domain model types for route inspection.
//!
//! Provides the edge record stored by a graph, the odd-vertex pairs chosen
//! during augmentation, and the solution returned by a solve.

mod edge;
mod solution;

pub use edge::Edge;
pub use solution::{MatchedPair, RouteSolution};

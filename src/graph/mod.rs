//! Graph storage and degree analysis.
//!
//! - [`Graph`]: insertion-ordered undirected weighted graph
//! - [`Graph::degree_parity`]: odd-degree vertices, O(E)

mod degree;
mod store;

pub(crate) use degree::{first_unreached, odd_vertex_indices};
pub use store::Graph;

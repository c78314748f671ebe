//! Shortest-path engine.
//!
//! - [`single_source`]: Dijkstra distance table from one vertex
//! - [`point_to_point`]: Dijkstra with predecessor tracking and early exit
//! - [`DistanceCache`]: per-source cached rows behind the [`DistanceOracle`] trait
//!
//! Lookups never fail: unreachable vertices report `f64::INFINITY` and the
//! caller decides whether that is an error.

mod cache;
mod dijkstra;

pub use cache::{DistanceCache, DistanceOracle};
pub(crate) use dijkstra::dijkstra;
pub use dijkstra::{point_to_point, single_source, DistanceTable, ShortestPath};

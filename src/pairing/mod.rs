//! Odd-vertex pairing strategies.
//!
//! Augmentation needs the odd-degree vertices grouped into pairs; each pair
//! is later joined by a duplicated shortest path. The contract is the
//! [`PairingStrategy`] trait: odd vertex indices plus a [`DistanceOracle`]
//! in, a perfect pairing out.
//!
//! - [`GreedyPairing`]: nearest remaining partner, O(k²) distance queries
//! - [`ExchangePairing`]: greedy followed by pairwise exchange local search
//! - [`MultiStartPairing`]: exchange pairing from seeded shuffled orders
//!
//! None of these is an exact minimum-weight perfect matching. On adversarial
//! inputs they can pair vertices at a strictly higher cost than optimal.

mod exchange;
mod greedy;
mod multi_start;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shortest_path::DistanceOracle;

pub use exchange::{improve_by_exchange, ExchangePairing};
pub use greedy::GreedyPairing;
pub use multi_start::MultiStartPairing;

/// Two vertex indices joined by a pairing, with their shortest-path distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexPair {
    /// Index of the first vertex.
    pub from: usize,
    /// Index of its partner.
    pub to: usize,
    /// Shortest-path distance between them. Infinite if unreachable.
    pub cost: f64,
}

/// Pairs odd-degree vertices for augmentation.
///
/// Implementations must return every index of `odd` exactly once across the
/// returned pairs. Pairs whose cost is infinite are allowed; the solver
/// reports them as a disconnected graph.
pub trait PairingStrategy: Send + Sync {
    /// Groups `odd` (an even number of vertex indices) into pairs.
    fn pair(&self, odd: &[usize], oracle: &dyn DistanceOracle) -> Result<Vec<IndexPair>>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Sum of the pair costs.
pub fn pairing_cost(pairs: &[IndexPair]) -> f64 {
    pairs.iter().map(|p| p.cost).sum()
}

/// Selects a built-in [`PairingStrategy`].
///
/// # Examples
///
/// ```
/// use u_postman::pairing::PairingMethod;
///
/// let method = PairingMethod::MultiStart { restarts: 8, seed: 42 };
/// assert_eq!(method.strategy().name(), "multi-start");
/// assert_eq!(PairingMethod::default(), PairingMethod::Greedy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PairingMethod {
    /// [`GreedyPairing`].
    #[default]
    Greedy,
    /// [`ExchangePairing`].
    Exchange,
    /// [`MultiStartPairing`] with the given restart count and RNG seed.
    MultiStart { restarts: usize, seed: u64 },
}

impl PairingMethod {
    /// Instantiates the selected strategy.
    pub fn strategy(&self) -> Box<dyn PairingStrategy> {
        match *self {
            Self::Greedy => Box::new(GreedyPairing),
            Self::Exchange => Box::new(ExchangePairing),
            Self::MultiStart { restarts, seed } => Box::new(MultiStartPairing::new(restarts, seed)),
        }
    }
}

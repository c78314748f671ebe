//! Multi-start exchange pairing.
//!
//! Greedy pairing depends on the order odd vertices are scanned in. This
//! strategy runs [`ExchangePairing`] once in the natural order and then once
//! per seeded random shuffle, keeping the cheapest result. The first run
//! being the natural order guarantees the result is never worse than
//! `ExchangePairing` alone.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

use super::{pairing_cost, ExchangePairing, IndexPair, PairingStrategy};
use crate::error::Result;
use crate::shortest_path::DistanceOracle;

/// Exchange pairing restarted from shuffled orders. See the [module docs](self).
///
/// Deterministic for a fixed `seed`.
///
/// # Examples
///
/// ```
/// use u_postman::pairing::{MultiStartPairing, PairingStrategy};
///
/// let strategy = MultiStartPairing::new(16, 42);
/// assert_eq!(strategy.restarts(), 16);
/// assert_eq!(strategy.name(), "multi-start");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MultiStartPairing {
    restarts: usize,
    seed: u64,
}

impl MultiStartPairing {
    /// Creates a strategy with `restarts` shuffled runs on top of the natural order.
    pub fn new(restarts: usize, seed: u64) -> Self {
        Self { restarts, seed }
    }

    /// Number of shuffled runs.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PairingStrategy for MultiStartPairing {
    fn pair(&self, odd: &[usize], oracle: &dyn DistanceOracle) -> Result<Vec<IndexPair>> {
        let mut best = ExchangePairing.pair(odd, oracle)?;
        let mut best_cost = pairing_cost(&best);

        if odd.len() < 4 {
            return Ok(best);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut order = odd.to_vec();

        for restart in 0..self.restarts {
            order.shuffle(&mut rng);
            let candidate = ExchangePairing.pair(&order, oracle)?;
            let cost = pairing_cost(&candidate);
            if cost < best_cost - 1e-10 {
                trace!(restart, cost, previous = best_cost, "multi-start improved pairing");
                best = candidate;
                best_cost = cost;
            }
        }

        Ok(best)
    }

    fn name(&self) -> &'static str {
        "multi-start"
    }
}

//! Greedy nearest-partner pairing.
//!
//! Repeatedly takes the first unpaired odd vertex and pairs it with the
//! closest remaining one (first seen wins ties).
//!
//! # Complexity
//!
//! O(k²) distance queries for k odd vertices.
//!
//! # Quality
//!
//! Fast and deterministic, but not a minimum-weight perfect matching: an
//! early cheap pair can force an expensive one later.

use super::{IndexPair, PairingStrategy};
use crate::error::{PostmanError, Result};
use crate::shortest_path::DistanceOracle;

/// Greedy nearest-partner pairing. See the [module docs](self).
///
/// # Examples
///
/// ```
/// use u_postman::pairing::{GreedyPairing, PairingStrategy};
/// use u_postman::shortest_path::DistanceOracle;
///
/// // Points on a line at 0, 1, 5, 6
/// struct Line;
/// impl DistanceOracle for Line {
///     fn distance(&self, a: usize, b: usize) -> f64 {
///         let pos: [f64; 4] = [0.0, 1.0, 5.0, 6.0];
///         (pos[a] - pos[b]).abs()
///     }
/// }
///
/// let pairs = GreedyPairing.pair(&[0, 1, 2, 3], &Line).unwrap();
/// assert_eq!((pairs[0].from, pairs[0].to), (0, 1));
/// assert_eq!((pairs[1].from, pairs[1].to), (2, 3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPairing;

impl PairingStrategy for GreedyPairing {
    fn pair(&self, odd: &[usize], oracle: &dyn DistanceOracle) -> Result<Vec<IndexPair>> {
        greedy_pairs(odd, oracle)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

pub(super) fn greedy_pairs(odd: &[usize], oracle: &dyn DistanceOracle) -> Result<Vec<IndexPair>> {
    let mut remaining = odd.to_vec();
    let mut pairs = Vec::with_capacity(odd.len() / 2);

    while let Some(&from) = remaining.first() {
        // (position in `remaining`, distance)
        let mut best: Option<(usize, f64)> = None;
        for (pos, &candidate) in remaining.iter().enumerate().skip(1) {
            let d = oracle.distance(from, candidate);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((pos, d));
            }
        }

        let Some((pos, cost)) = best else {
            return Err(PostmanError::InternalConsistency {
                message: format!("odd vertex #{from} left without a partner"),
            });
        };

        let to = remaining.remove(pos);
        remaining.remove(0);
        pairs.push(IndexPair { from, to, cost });
    }

    Ok(pairs)
}

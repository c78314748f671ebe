//! Solver configuration and feature flags.
//!
//! Feature flags are read once, by the caller, into a [`FeatureFlags`]
//! value and turned into a [`SolverConfig`]. The solver never consults the
//! process environment itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pairing::PairingMethod;

/// Highlights the circuit in rendered output.
pub const RED_LINE: &str = "RED_LINE";
/// Selects [`PairingMethod::Exchange`].
pub const PAIR_EXCHANGE: &str = "PAIR_EXCHANGE";
/// Selects [`PairingMethod::MultiStart`] with default parameters.
pub const PAIR_MULTI_START: &str = "PAIR_MULTI_START";

/// Every flag understood by [`SolverConfig::from_flags`].
pub const KNOWN_FLAGS: [&str; 3] = [RED_LINE, PAIR_EXCHANGE, PAIR_MULTI_START];

/// Restart count used when multi-start pairing is enabled by flag.
pub const DEFAULT_RESTARTS: usize = 16;
/// RNG seed used when multi-start pairing is enabled by flag.
pub const DEFAULT_SEED: u64 = 42;

/// Named boolean switches. Unknown names are disabled.
///
/// # Examples
///
/// ```
/// use u_postman::config::{FeatureFlags, RED_LINE};
///
/// let flags = FeatureFlags::new().with(RED_LINE, true);
/// assert!(flags.is_enabled(RED_LINE));
/// assert!(!flags.is_enabled("SOMETHING_ELSE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    flags: BTreeMap<String, bool>,
}

impl FeatureFlags {
    /// Creates an empty flag set (everything disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `name` switched to `enabled`.
    pub fn with(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.set(name, enabled);
        self
    }

    /// Switches `name` to `enabled`.
    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.flags.insert(name.into(), enabled);
    }

    /// Reads each of `names` through `lookup`. A flag is enabled iff its
    /// value is exactly `"true"`.
    pub fn from_lookup<F>(names: &[&str], lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flags = names
            .iter()
            .map(|&name| (name.to_string(), lookup(name).as_deref() == Some("true")))
            .collect();
        Self { flags }
    }

    /// Reads each of `names` from the process environment, once.
    pub fn from_env(names: &[&str]) -> Self {
        Self::from_lookup(names, |name| std::env::var(name).ok())
    }

    /// Returns `true` if `name` is enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// Options for [`Solver`](crate::solver::Solver).
///
/// # Examples
///
/// ```
/// use u_postman::config::SolverConfig;
/// use u_postman::pairing::PairingMethod;
///
/// let config = SolverConfig::default()
///     .with_pairing(PairingMethod::Exchange)
///     .with_max_odd_vertices(500);
/// assert_eq!(config.pairing, PairingMethod::Exchange);
/// assert_eq!(config.max_odd_vertices, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// How odd-degree vertices are paired.
    pub pairing: PairingMethod,
    /// Refuse to solve graphs with more odd-degree vertices than this.
    pub max_odd_vertices: Option<usize>,
    /// Draw the circuit on top of the graph when rendering.
    pub highlight_route: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pairing: PairingMethod::Greedy,
            max_odd_vertices: None,
            highlight_route: false,
        }
    }
}

impl SolverConfig {
    /// Builds a config from feature flags.
    ///
    /// `PAIR_MULTI_START` takes precedence over `PAIR_EXCHANGE`; with neither
    /// set, greedy pairing is used. `RED_LINE` sets `highlight_route`.
    pub fn from_flags(flags: &FeatureFlags) -> Self {
        let pairing = if flags.is_enabled(PAIR_MULTI_START) {
            PairingMethod::MultiStart {
                restarts: DEFAULT_RESTARTS,
                seed: DEFAULT_SEED,
            }
        } else if flags.is_enabled(PAIR_EXCHANGE) {
            PairingMethod::Exchange
        } else {
            PairingMethod::Greedy
        };

        Self {
            pairing,
            max_odd_vertices: None,
            highlight_route: flags.is_enabled(RED_LINE),
        }
    }

    /// Sets the pairing method.
    pub fn with_pairing(mut self, pairing: PairingMethod) -> Self {
        self.pairing = pairing;
        self
    }

    /// Sets the odd-vertex ceiling.
    pub fn with_max_odd_vertices(mut self, limit: usize) -> Self {
        self.max_odd_vertices = Some(limit);
        self
    }

    /// Enables or disables route highlighting.
    pub fn with_highlight_route(mut self, highlight: bool) -> Self {
        self.highlight_route = highlight;
        self
    }
}

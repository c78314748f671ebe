//! Error taxonomy for route inspection solves.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PostmanError>;

/// Failures raised by [`Solver::solve`](crate::solver::Solver::solve) and the
/// pipeline stages behind it.
///
/// Input errors (empty graph, disconnected graph, unknown vertex, too many
/// odd vertices) mean the caller should fix the graph or the configuration.
/// Internal errors (consistency, incomplete circuit) mean an invariant of
/// the pipeline was broken and indicate a bug.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostmanError {
    #[error("graph has no edges")]
    EmptyGraph,

    #[error("graph is disconnected: no path from {from} to {to}")]
    DisconnectedGraph { from: String, to: String },

    #[error("internal consistency violated: {message}")]
    InternalConsistency { message: String },

    #[error("eulerian circuit incomplete: consumed {consumed} of {total} edges")]
    IncompleteCircuit { consumed: usize, total: usize },

    #[error("vertex {vertex} is not in the graph")]
    UnknownVertex { vertex: String },

    #[error("{count} odd-degree vertices exceed the configured limit of {limit}")]
    TooManyOddVertices { count: usize, limit: usize },
}

impl PostmanError {
    /// Returns `true` if the failure stems from the input graph or configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyGraph
                | Self::DisconnectedGraph { .. }
                | Self::UnknownVertex { .. }
                | Self::TooManyOddVertices { .. }
        )
    }

    /// Returns `true` if the failure indicates a broken pipeline invariant.
    pub fn is_internal_error(&self) -> bool {
        !self.is_input_error()
    }

    pub(crate) fn disconnected(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::DisconnectedGraph {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

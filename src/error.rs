//! Crate error type.

use thiserror::Error;

/// Errors surfaced by graph construction, configuration validation, and the
/// solve lifecycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A coefficient key did not parse as one or two comma-separated
    /// integer variable ids.
    #[error("malformed coefficient key {key:?}: expected \"i\" or \"i,j\" with integer ids")]
    MalformedKey {
        /// The offending key, verbatim.
        key: String,
    },

    /// A coefficient value was NaN or infinite.
    #[error("non-finite weight {weight} for coefficient key {key:?}")]
    NonFiniteWeight {
        /// The key carrying the bad weight.
        key: String,
        /// The rejected value.
        weight: f64,
    },

    /// An annealing parameter is outside its valid domain.
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),

    /// The worker thread went away before delivering the terminal report.
    /// Indicates a panic inside the annealing loop.
    #[error("annealing worker disconnected before finishing")]
    WorkerDisconnected,
}

//! Error types for search configuration and instance validation.

use thiserror::Error;

/// Errors reported before a search starts.
///
/// None of these are recoverable mid-search: every check runs up front and
/// a failing check aborts the run without touching the random source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A search parameter is out of range (population size, `keep`,
    /// generations, mutation rate, sample size).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A route is not a permutation of the non-home cities.
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// The distance matrix does not match the city-index domain.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Dimension actually supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub(crate) fn route(msg: impl Into<String>) -> Self {
        Self::InvalidRoute(msg.into())
    }
}

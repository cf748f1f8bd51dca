//! Error types for substitution mapping.

use thiserror::Error;

/// Errors raised while drawing replacement values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The generator stopped producing new distinct values before the pool
    /// reached its requested size.
    #[error(
        "not enough distinct values could be generated: wanted {requested}, \
         got {distinct} after {attempts} attempts; use fast mode instead"
    )]
    PoolExhausted {
        requested: usize,
        distinct: usize,
        attempts: usize,
    },

    /// Rejection sampling gave up on finding an unissued value.
    #[error(
        "no unused replacement found after {attempts} attempts \
         ({issued} values already issued); use fast mode instead"
    )]
    RetryLimitExceeded { attempts: usize, issued: usize },
}

pub type Result<T> = std::result::Result<T, MapError>;

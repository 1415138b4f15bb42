//! Error types for Vetted
//!
//! Centralized error handling using thiserror. `GuardError` is the two-kind
//! taxonomy returned by a guarded call; `VettedError` covers everything else
//! the crate can fail at.

use crate::guard::Failure;
use thiserror::Error;

/// Outcome of a guarded call that did not produce an accepted result.
///
/// `A` is the argument bundle of the wrapped function, `R` its result type.
#[derive(Debug, Error)]
pub enum GuardError<A, R> {
    /// Input validation rejected the arguments; the function was never invoked
    #[error("Input parameters {0:?} are invalid")]
    InputInvalid(A),

    /// Every permitted attempt produced an invalid result and no fallback was set
    #[error("{0}")]
    ResultInvalid(Failure<R>),
}

impl<A, R> GuardError<A, R> {
    pub fn is_input_invalid(&self) -> bool {
        matches!(self, Self::InputInvalid(_))
    }

    pub fn is_result_invalid(&self) -> bool {
        matches!(self, Self::ResultInvalid(_))
    }

    /// Recover the rejected argument bundle
    pub fn into_input(self) -> Option<A> {
        match self {
            Self::InputInvalid(args) => Some(args),
            Self::ResultInvalid(_) => None,
        }
    }

    /// Recover the last invalid result value
    pub fn into_result(self) -> Option<R> {
        match self {
            Self::InputInvalid(_) => None,
            Self::ResultInvalid(failure) => Some(failure.value),
        }
    }
}

/// All other error types that can occur in Vetted
#[derive(Debug, Error)]
pub enum VettedError {
    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed command-line style argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vetted operations
pub type Result<T> = std::result::Result<T, VettedError>;

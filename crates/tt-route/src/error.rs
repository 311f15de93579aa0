//! Routing error type.

use thiserror::Error;

use tt_core::CoreError;

/// Errors produced by `tt-route`.
///
/// An unreachable target is not an error: it comes back as
/// `Minutes::INFINITE`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("departure frequency must be positive, got {0}")]
    InvalidFrequency(i64),

    #[error("{what} must be a non-negative minute count, got {value}")]
    InvalidTime { what: &'static str, value: i64 },
}

pub type RouteResult<T> = Result<T, RouteError>;

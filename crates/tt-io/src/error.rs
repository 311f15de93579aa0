//! Error types for tt-io.

use thiserror::Error;

use tt_core::CoreError;
use tt_route::RouteError;

/// Errors raised while reading inputs or writing results.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid network: {0}")]
    Network(#[from] CoreError),

    #[error("routing failed: {0}")]
    Route(#[from] RouteError),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;

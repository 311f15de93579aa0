//! Error taxonomy for malformed input.
//!
//! Sub-crates wrap `CoreError` as one variant of their own enums via `#[from]`.
//! An unreachable station is never an error; it is `Minutes::INFINITE`.

use thiserror::Error;

use crate::StationId;

/// Which of the schedule matrices a validation error refers to.
pub type MatrixName = &'static str;

/// Errors raised while building or querying graphs and networks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{matrix} matrix is empty")]
    Empty { matrix: MatrixName },

    #[error("{matrix} matrix is not square: row {row} has {got} entries, expected {expected}")]
    NotSquare {
        matrix:   MatrixName,
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("{matrix} matrix is {got}x{got}, expected {expected}x{expected}")]
    DimensionMismatch {
        matrix:   MatrixName,
        expected: usize,
        got:      usize,
    },

    #[error("{matrix}[{from}][{to}] is negative ({value})")]
    NegativeValue {
        matrix: MatrixName,
        from:   usize,
        to:     usize,
        value:  i64,
    },

    #[error("{matrix}[{from}][{to}] = {value} does not fit in a minute count")]
    ValueOutOfRange {
        matrix: MatrixName,
        from:   usize,
        to:     usize,
        value:  i64,
    },

    #[error("edge {from}->{to} exists but its departure frequency is zero")]
    ZeroFrequency { from: usize, to: usize },

    #[error("station mapping is not a permutation of 0..{count}")]
    NotAPermutation { count: usize },

    #[error("{station} is out of range for a network of {count} stations")]
    StationOutOfRange { station: StationId, count: usize },
}

/// Shorthand result type for all `tt-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

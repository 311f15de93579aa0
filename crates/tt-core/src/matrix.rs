//! Flat row-major square matrix.

use crate::error::MatrixName;
use crate::{CoreError, CoreResult, StationId};

/// An N×N matrix stored as one contiguous `Vec` of length N².
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareMatrix<T> {
    n:    usize,
    data: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Build from nested rows, rejecting empty or ragged input.
    ///
    /// `name` is only used to label errors.
    pub fn from_rows(name: MatrixName, rows: Vec<Vec<T>>) -> CoreResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(CoreError::Empty { matrix: name });
        }
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(CoreError::NotSquare {
                    matrix: name,
                    row,
                    expected: n,
                    got: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { n, data })
    }

    /// An `n`×`n` matrix with every entry set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self { n, data: vec![value; n * n] }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> T {
        self.data[from * self.n + to]
    }

    #[inline]
    pub fn set(&mut self, from: usize, to: usize, value: T) {
        self.data[from * self.n + to] = value;
    }

    /// Entry at `(from, to)` addressed by station ids.
    #[inline]
    pub fn at(&self, from: StationId, to: StationId) -> T {
        self.get(from.index(), to.index())
    }

    /// Iterate `(from, to, value)` over every entry in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / self.n, i % self.n, v))
    }

    /// Apply `f` to every entry, failing on the first error.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<SquareMatrix<U>, E>
    where
        F: FnMut(usize, usize, T) -> Result<U, E>,
    {
        let data = self
            .entries()
            .map(|(from, to, v)| f(from, to, v))
            .collect::<Result<Vec<U>, E>>()?;
        Ok(SquareMatrix { n: self.n, data })
    }
}

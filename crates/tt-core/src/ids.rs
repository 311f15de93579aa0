//! Strongly typed station identifier.
//!
//! The inner integer is `pub` so matrices can be indexed with `id.0 as usize`,
//! but callers should prefer [`StationId::index`] for clarity.

use std::fmt;

/// Index of a station (vertex) in a transit network, `0..N`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StationId(pub u32);

impl StationId {
    /// Sentinel meaning "no valid station", equal to `u32::MAX`.
    pub const INVALID: StationId = StationId(u32::MAX);

    /// Cast to `usize` for direct use as a row/column index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every station id of an `n`-station network in index order.
    pub fn all(n: usize) -> impl Iterator<Item = StationId> {
        (0..n as u32).map(StationId)
    }
}

impl Default for StationId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl From<StationId> for usize {
    #[inline(always)]
    fn from(id: StationId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for StationId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<StationId, Self::Error> {
        u32::try_from(n).map(StationId)
    }
}

//! Per-station result of a single-source search.

use std::ops::Index;

use tt_core::{Minutes, StationId};

/// Finalized cost from the source to every station.
///
/// Unreachable stations hold `Minutes::INFINITE`, which serializes as
/// `u32::MAX` unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CostTable(Vec<Minutes>);

impl CostTable {
    pub fn new(costs: Vec<Minutes>) -> Self {
        Self(costs)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cost to `station`, `None` when the id is out of range.
    #[inline]
    pub fn get(&self, station: StationId) -> Option<Minutes> {
        self.0.get(station.index()).copied()
    }

    pub fn as_slice(&self) -> &[Minutes] {
        &self.0
    }

    /// `(station, cost)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, Minutes)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &m)| (StationId(i as u32), m))
    }

    /// Stations with a finite cost, the source included.
    pub fn reachable_count(&self) -> usize {
        self.0.iter().filter(|m| m.is_finite()).count()
    }
}

impl Index<StationId> for CostTable {
    type Output = Minutes;

    fn index(&self, station: StationId) -> &Minutes {
        &self.0[station.index()]
    }
}

//! Validated graph inputs for the two engines.
//!
//! # Edge model
//!
//! Both graph types are dense adjacency matrices.  A duration of zero means
//! "no edge", so self-loops and zero-weight edges cannot be expressed; the
//! diagonal is always edge-free.
//!
//! Raw matrices arrive as `i64` so that negative entries can be reported
//! instead of being silently reinterpreted.  Validation happens once, at
//! construction; the engines never re-check.

use std::num::NonZeroU32;

use crate::error::MatrixName;
use crate::{CoreError, CoreResult, Minutes, SquareMatrix, StationId};

pub const DURATION: MatrixName = "duration";
pub const FIRST_DEPARTURE: MatrixName = "first_departure";
pub const FREQUENCY: MatrixName = "frequency";

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Time-invariant directed graph for the static engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGraph {
    weights: SquareMatrix<Minutes>,
}

impl WeightedGraph {
    pub fn from_rows(rows: Vec<Vec<i64>>) -> CoreResult<Self> {
        Self::from_matrix(&SquareMatrix::from_rows(DURATION, rows)?)
    }

    /// Validate a raw matrix: every entry must be a non-negative minute count.
    pub fn from_matrix(raw: &SquareMatrix<i64>) -> CoreResult<Self> {
        let weights = raw.try_map(|from, to, v| to_minutes(DURATION, from, to, v))?;
        Ok(Self { weights })
    }

    #[inline]
    pub fn station_count(&self) -> usize {
        self.weights.size()
    }

    /// Travel time on `from → to`, `None` when there is no edge.
    #[inline]
    pub fn weight(&self, from: StationId, to: StationId) -> Option<Minutes> {
        let w = self.weights.at(from, to);
        (w != Minutes::ZERO).then_some(w)
    }

    /// Number of directed edges (non-zero entries).
    pub fn edge_count(&self) -> usize {
        self.weights.entries().filter(|&(_, _, w)| w != Minutes::ZERO).count()
    }

    pub fn matrix(&self) -> &SquareMatrix<Minutes> {
        &self.weights
    }

    /// Error unless `station` indexes a row of this graph.
    pub fn check_station(&self, station: StationId) -> CoreResult<()> {
        if station.index() < self.station_count() {
            Ok(())
        } else {
            Err(CoreError::StationOutOfRange {
                station,
                count: self.station_count(),
            })
        }
    }

    /// A copy with station `i` renamed to `mapping[i]`.
    ///
    /// Fails unless `mapping` is a permutation of `0..N`.
    pub fn relabel(&self, mapping: &[usize]) -> CoreResult<Self> {
        let n = self.station_count();
        let mut seen = vec![false; n];
        let is_permutation = mapping.len() == n
            && mapping.iter().all(|&to| to < n && !std::mem::replace(&mut seen[to], true));
        if !is_permutation {
            return Err(CoreError::NotAPermutation { count: n });
        }

        let mut weights = SquareMatrix::filled(n, Minutes::ZERO);
        for (from, to, w) in self.weights.entries() {
            weights.set(mapping[from], mapping[to], w);
        }
        Ok(Self { weights })
    }
}

// ── ScheduledEdge ─────────────────────────────────────────────────────────────

/// One present edge of a [`TransitNetwork`] with its departure pattern.
///
/// Departures leave at `first_departure + k * frequency` for `k = 0, 1, …`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScheduledEdge {
    pub from:            StationId,
    pub to:              StationId,
    pub duration:        Minutes,
    pub first_departure: Minutes,
    pub frequency:       NonZeroU32,
}

// ── TransitNetwork ────────────────────────────────────────────────────────────

/// The three parallel schedule matrices, validated for consistency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitNetwork {
    durations:       WeightedGraph,
    first_departure: SquareMatrix<Minutes>,
    /// `None` wherever the duration matrix has no edge.
    frequency:       SquareMatrix<Option<NonZeroU32>>,
}

impl TransitNetwork {
    /// Build from nested rows; see [`TransitNetwork::new`].
    pub fn from_rows(
        duration: Vec<Vec<i64>>,
        first_departure: Vec<Vec<i64>>,
        frequency: Vec<Vec<i64>>,
    ) -> CoreResult<Self> {
        Self::new(
            &SquareMatrix::from_rows(DURATION, duration)?,
            &SquareMatrix::from_rows(FIRST_DEPARTURE, first_departure)?,
            &SquareMatrix::from_rows(FREQUENCY, frequency)?,
        )
    }

    /// Validate and assemble the network.
    ///
    /// Fails when the matrices differ in size, when a duration or frequency is
    /// negative, when any entry is too large, or when a present edge has a
    /// frequency of zero.
    ///
    /// A negative first departure is accepted and replaced by the first
    /// non-negative departure of the same series.  Entries of the first
    /// departure and frequency matrices on absent edges are ignored.
    pub fn new(
        duration: &SquareMatrix<i64>,
        first_departure: &SquareMatrix<i64>,
        frequency: &SquareMatrix<i64>,
    ) -> CoreResult<Self> {
        let n = duration.size();
        for (matrix, m) in [(FIRST_DEPARTURE, first_departure), (FREQUENCY, frequency)] {
            if m.size() != n {
                return Err(CoreError::DimensionMismatch {
                    matrix,
                    expected: n,
                    got: m.size(),
                });
            }
        }

        let durations = WeightedGraph::from_matrix(duration)?;
        let frequency = frequency.try_map(|from, to, v| -> CoreResult<Option<NonZeroU32>> {
            let minutes = to_minutes(FREQUENCY, from, to, v)?;
            if duration.get(from, to) == 0 {
                return Ok(None);
            }
            match NonZeroU32::new(minutes.0) {
                Some(freq) => Ok(Some(freq)),
                None => Err(CoreError::ZeroFrequency { from, to }),
            }
        })?;
        let first_departure = first_departure.try_map(|from, to, v| -> CoreResult<Minutes> {
            match frequency.get(from, to) {
                Some(freq) => to_minutes(FIRST_DEPARTURE, from, to, earliest_departure(v, freq)),
                None => Ok(Minutes::ZERO),
            }
        })?;

        Ok(Self {
            durations,
            first_departure,
            frequency,
        })
    }

    #[inline]
    pub fn station_count(&self) -> usize {
        self.durations.station_count()
    }

    /// The duration matrix on its own, for the static engine.
    pub fn durations(&self) -> &WeightedGraph {
        &self.durations
    }

    /// The edge `from → to`, if present.
    pub fn edge(&self, from: StationId, to: StationId) -> Option<ScheduledEdge> {
        let duration = self.durations.weight(from, to)?;
        let frequency = self.frequency.at(from, to)?;
        Some(ScheduledEdge {
            from,
            to,
            duration,
            first_departure: self.first_departure.at(from, to),
            frequency,
        })
    }

    pub fn check_station(&self, station: StationId) -> CoreResult<()> {
        self.durations.check_station(station)
    }
}

// ── ClockPolicy ───────────────────────────────────────────────────────────────

/// How the schedule-aware engine decides "now" when looking up the next
/// departure on an edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClockPolicy {
    /// One clock per query, starting at the query's start time and advanced by
    /// the new cost on every successful relaxation.  Waits therefore depend on
    /// the order in which stations are finalized.
    #[default]
    SharedAccumulating,
    /// Waits out of station `u` are evaluated at `start_time + cost[u]`, the
    /// true arrival time along the best known path.
    PerStationArrival,
}

impl ClockPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ClockPolicy::SharedAccumulating => "shared_accumulating",
            ClockPolicy::PerStationArrival  => "per_station_arrival",
        }
    }
}

impl std::fmt::Display for ClockPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_minutes(matrix: MatrixName, from: usize, to: usize, value: i64) -> CoreResult<Minutes> {
    if value < 0 {
        return Err(CoreError::NegativeValue { matrix, from, to, value });
    }
    Minutes::from_wide(value as u64).ok_or(CoreError::ValueOutOfRange { matrix, from, to, value })
}

/// `first` itself when non-negative, otherwise the first departure at or
/// after minute zero in the series `first + k * frequency`.
///
/// Search clocks never go below zero, so the two series yield the same waits.
pub fn earliest_departure(first: i64, frequency: NonZeroU32) -> i64 {
    if first >= 0 {
        first
    } else {
        first.rem_euclid(frequency.get() as i64)
    }
}

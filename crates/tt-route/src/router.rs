//! Routing trait and its two implementations.
//!
//! # Pluggability
//!
//! Batch execution and the I/O layer call routing through the [`Router`]
//! trait, so the timetable-aware engine can be compared against the static
//! lower bound (or swapped for a different clock policy) without touching the
//! callers.

use tt_core::{ClockPolicy, Minutes, StationId, TransitNetwork};

use crate::{RouteResult, fixed, scheduled};

// ── TravelQuery ───────────────────────────────────────────────────────────────

/// One origin/destination request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelQuery {
    pub from:       StationId,
    pub to:         StationId,
    /// Minutes after the reference instant at which the traveller is ready to
    /// board at `from`.
    pub start_time: Minutes,
}

impl TravelQuery {
    pub fn new(from: u32, to: u32, start_time: u32) -> Self {
        Self {
            from:       StationId(from),
            to:         StationId(to),
            start_time: Minutes(start_time),
        }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable travel-time engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single router can serve a batch
/// of queries on Rayon worker threads.
pub trait Router: Send + Sync {
    /// Minimum travel time for `query`, `Minutes::INFINITE` if unreachable.
    fn travel_time(&self, network: &TransitNetwork, query: &TravelQuery) -> RouteResult<Minutes>;
}

// ── StaticRouter ──────────────────────────────────────────────────────────────

/// Durations only; departures are assumed to leave the moment the traveller
/// arrives.  Every cost it returns is a lower bound on what
/// [`ScheduleAwareRouter`] returns for the same query, under either policy.
pub struct StaticRouter;

impl Router for StaticRouter {
    fn travel_time(&self, network: &TransitNetwork, query: &TravelQuery) -> RouteResult<Minutes> {
        network.check_station(query.to)?;
        let table = fixed::shortest_times(network.durations(), query.from)?;
        Ok(table[query.to])
    }
}

// ── ScheduleAwareRouter ───────────────────────────────────────────────────────

/// The timetable-aware engine with a fixed clock policy.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScheduleAwareRouter {
    pub policy: ClockPolicy,
}

impl ScheduleAwareRouter {
    pub fn new(policy: ClockPolicy) -> Self {
        Self { policy }
    }
}

impl Router for ScheduleAwareRouter {
    fn travel_time(&self, network: &TransitNetwork, query: &TravelQuery) -> RouteResult<Minutes> {
        scheduled::shortest_travel_time_with(network, query, self.policy)
    }
}

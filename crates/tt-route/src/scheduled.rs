//! Schedule-aware shortest-time engine.
//!
//! # Cost of an edge
//!
//! Using `u → v` costs the wait for its next departure plus its duration:
//!
//! ```text
//! candidate(v) = wait(first[u][v], freq[u][v], now) + cost[u] + duration[u][v]
//! ```
//!
//! # What "now" is
//!
//! Under [`ClockPolicy::SharedAccumulating`] one clock lives for the whole
//! query.  It starts at the query's start time and every successful
//! relaxation adds the new cost of the relaxed station to it:
//!
//! ```text
//! clock += cost[v]
//! ```
//!
//! The clock is never reset between stations, so the wait on an edge depends
//! on how many relaxations happened before it, not on when the traveller
//! actually reaches `u`.  This is the default, and the pinned sample-network
//! regression values depend on it.
//!
//! [`ClockPolicy::PerStationArrival`] evaluates waits out of `u` at
//! `start + cost[u]` instead, which is the traveller's real arrival time at
//! `u` along the best path found.

use tracing::{debug, trace};

use tt_core::{ClockPolicy, Minutes, StationId, TransitNetwork};

use crate::departure::next_departure_wait;
use crate::search::{self, EdgeCost};
use crate::{CostTable, RouteResult, TravelQuery};

// ── Boarding clock ────────────────────────────────────────────────────────────

/// Call-scoped clock state.  Owned by a single search; never shared.
struct TimetableCost<'a> {
    network: &'a TransitNetwork,
    policy:  ClockPolicy,
    start:   u64,
    /// Absolute minutes since the reference instant.  Only advanced under the
    /// shared policy.
    clock:   u64,
}

impl<'a> TimetableCost<'a> {
    fn new(network: &'a TransitNetwork, start_time: Minutes, policy: ClockPolicy) -> Self {
        Self {
            network,
            policy,
            start: start_time.wide(),
            clock: start_time.wide(),
        }
    }

    #[inline]
    fn now(&self, from_cost: Minutes) -> u64 {
        match self.policy {
            ClockPolicy::SharedAccumulating => self.clock,
            ClockPolicy::PerStationArrival  => self.start + from_cost.wide(),
        }
    }
}

impl EdgeCost for TimetableCost<'_> {
    fn candidate(&mut self, from: StationId, to: StationId, from_cost: Minutes) -> Option<u64> {
        let edge = self.network.edge(from, to)?;
        let wait = next_departure_wait(edge.first_departure, edge.frequency, self.now(from_cost));
        Some(wait.wide() + from_cost.wide() + edge.duration.wide())
    }

    fn relaxed(&mut self, from: StationId, to: StationId, cost: Minutes) {
        if self.policy == ClockPolicy::SharedAccumulating {
            self.clock = self.clock.saturating_add(cost.wide());
        }
        trace!(from = from.0, to = to.0, cost = cost.0, clock = self.clock, "relaxed");
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Minimum travel time from `from` to `to` leaving at `start_time`, using the
/// shared accumulating clock.
///
/// Returns `Minutes::INFINITE` when `to` cannot be reached.
pub fn shortest_travel_time(
    network:    &TransitNetwork,
    from:       StationId,
    to:         StationId,
    start_time: Minutes,
) -> RouteResult<Minutes> {
    shortest_travel_time_with(
        network,
        &TravelQuery { from, to, start_time },
        ClockPolicy::SharedAccumulating,
    )
}

/// [`shortest_travel_time`] with an explicit clock policy.
///
/// Stops as soon as the target is finalized.
pub fn shortest_travel_time_with(
    network: &TransitNetwork,
    query:   &TravelQuery,
    policy:  ClockPolicy,
) -> RouteResult<Minutes> {
    network.check_station(query.from)?;
    network.check_station(query.to)?;

    let mut cost = TimetableCost::new(network, query.start_time, policy);
    let table = search::run(network.station_count(), query.from, Some(query.to), &mut cost);
    let result = table[query.to];

    debug!(
        from = query.from.0,
        to = query.to.0,
        start_time = query.start_time.0,
        policy = %policy,
        minutes = result.0,
        reachable = result.is_finite(),
        "timetable search complete"
    );
    Ok(result)
}

/// Travel time from `from` to every station, leaving at `start_time`.
///
/// Runs the full `N - 1` iterations.  Under the shared policy the entry for a
/// given station equals what [`shortest_travel_time_with`] returns for it,
/// because stopping early only skips work after that station is final.
pub fn travel_times(
    network:    &TransitNetwork,
    from:       StationId,
    start_time: Minutes,
    policy:     ClockPolicy,
) -> RouteResult<CostTable> {
    network.check_station(from)?;

    let mut cost = TimetableCost::new(network, start_time, policy);
    let table = search::run(network.station_count(), from, None, &mut cost);

    debug!(
        from = from.0,
        start_time = start_time.0,
        policy = %policy,
        reachable = table.reachable_count(),
        final_clock = cost.clock,
        "timetable search complete"
    );
    Ok(table)
}

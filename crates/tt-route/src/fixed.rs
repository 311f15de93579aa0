//! Static shortest-path engine over time-invariant durations.

use tracing::debug;

use tt_core::{Minutes, StationId, WeightedGraph};

use crate::search::{self, EdgeCost};
use crate::{CostTable, RouteResult};

struct FixedDuration<'a> {
    graph: &'a WeightedGraph,
}

impl EdgeCost for FixedDuration<'_> {
    #[inline]
    fn candidate(&mut self, from: StationId, to: StationId, from_cost: Minutes) -> Option<u64> {
        let w = self.graph.weight(from, to)?;
        Some(from_cost.wide() + w.wide())
    }
}

/// Shortest travel time from `source` to every station, ignoring timetables.
///
/// Stations that cannot be reached keep `Minutes::INFINITE`.  Edges of weight
/// zero do not exist (see `tt_core::network`).
///
/// # Errors
/// `StationOutOfRange` if `source` is not a station of `graph`.
pub fn shortest_times(graph: &WeightedGraph, source: StationId) -> RouteResult<CostTable> {
    graph.check_station(source)?;

    let table = search::run(
        graph.station_count(),
        source,
        None,
        &mut FixedDuration { graph },
    );

    debug!(
        source = source.0,
        stations = table.len(),
        reachable = table.reachable_count(),
        "static search complete"
    );
    Ok(table)
}

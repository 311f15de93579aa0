//! Frontier selection for the array-scan Dijkstra.

use tt_core::{Minutes, StationId};

/// Index of the unprocessed station with the smallest tentative cost.
///
/// The scan runs in increasing index order and replaces the current best on
/// `<=`, so among equal costs the **highest** index wins.  Unreached stations
/// (cost `INFINITE`) still qualify, which means this only returns `None` when
/// every station is processed.
///
/// O(N) per call.
pub fn select_frontier(costs: &[Minutes], processed: &[bool]) -> Option<StationId> {
    debug_assert_eq!(costs.len(), processed.len());

    let mut best = Minutes::INFINITE;
    let mut best_index = None;

    for (i, (&cost, &done)) in costs.iter().zip(processed).enumerate() {
        if !done && cost <= best {
            best = cost;
            best_index = Some(i);
        }
    }

    best_index.map(|i| StationId(i as u32))
}

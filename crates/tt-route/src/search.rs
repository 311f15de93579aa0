//! The array-scan Dijkstra shared by both engines.
//!
//! # Loop shape
//!
//! The loop always performs `N - 1` frontier selections (unless stopped at a
//! target), even after every reachable station is final.  Each selected
//! station `u` is marked processed and then every unprocessed `v` is offered
//! to the [`EdgeCost`] in increasing index order, so a relaxation of `v` is
//! visible to the cost computed for `v + 1`.  The schedule-aware engine relies
//! on that order.

use tt_core::{Minutes, StationId};

use crate::frontier::select_frontier;
use crate::table::CostTable;

/// Edge-cost function plugged into [`run`].
pub(crate) trait EdgeCost {
    /// Candidate total cost of reaching `to` through `from`, given the
    /// (finite) finalized cost of `from`.  `None` when there is no edge.
    ///
    /// Returned as `u64` so that sums never wrap; anything that does not beat
    /// the current cost of `to` is discarded.
    fn candidate(&mut self, from: StationId, to: StationId, from_cost: Minutes) -> Option<u64>;

    /// Called after `to` was relaxed to `cost`.
    fn relaxed(&mut self, _from: StationId, _to: StationId, _cost: Minutes) {}
}

/// Run the search from `source` over `n` stations.
///
/// With `stop_at = Some(t)` the loop ends as soon as `t` is finalized; a
/// finalized cost never changes afterwards, so `costs[t]` is the same as a
/// full run.  Callers must have range-checked `source`.
pub(crate) fn run<C: EdgeCost>(
    n:       usize,
    source:  StationId,
    stop_at: Option<StationId>,
    edges:   &mut C,
) -> CostTable {
    let mut costs = vec![Minutes::INFINITE; n];
    let mut processed = vec![false; n];
    costs[source.index()] = Minutes::ZERO;

    for _ in 0..n.saturating_sub(1) {
        let Some(u) = select_frontier(&costs, &processed) else {
            break;
        };
        processed[u.index()] = true;

        if stop_at == Some(u) {
            break;
        }

        // Without this guard an INFINITE cost would be summed into a
        // spurious finite candidate.
        let from_cost = costs[u.index()];
        if !from_cost.is_finite() {
            continue;
        }

        for v in StationId::all(n) {
            if processed[v.index()] {
                continue;
            }
            let Some(candidate) = edges.candidate(u, v, from_cost) else {
                continue;
            };
            // costs[v] ≤ u32::MAX, so a winning candidate fits and is finite.
            if candidate < costs[v.index()].wide() {
                let cost = Minutes(candidate as u32);
                costs[v.index()] = cost;
                edges.relaxed(u, v, cost);
            }
        }
    }

    CostTable::new(costs)
}

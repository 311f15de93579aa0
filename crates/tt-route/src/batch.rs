//! Many independent queries against one network.
//!
//! Each engine call creates and drops its own state, so queries can run in
//! any order (or concurrently with the `parallel` feature) and results are
//! always returned in input order.

use tt_core::{Minutes, StationId, TransitNetwork, WeightedGraph};

use crate::{CostTable, RouteResult, Router, TravelQuery, fixed};

/// Run every query through `router`.  One result per query, same order.
pub fn route_batch<R: Router + ?Sized>(
    router:  &R,
    network: &TransitNetwork,
    queries: &[TravelQuery],
) -> Vec<RouteResult<Minutes>> {
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|q| router.travel_time(network, q))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|q| router.travel_time(network, q))
            .collect()
    }
}

/// Static cost table from every station, indexed by source.
pub fn shortest_times_all(graph: &WeightedGraph) -> RouteResult<Vec<CostTable>> {
    let sources: Vec<StationId> = StationId::all(graph.station_count()).collect();

    #[cfg(not(feature = "parallel"))]
    {
        sources
            .iter()
            .map(|&s| fixed::shortest_times(graph, s))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        sources
            .par_iter()
            .map(|&s| fixed::shortest_times(graph, s))
            .collect()
    }
}

//! Unit tests for tt-route.
//!
//! Most scenarios use the classic 9-station adjacency matrix with a
//! hand-written timetable on top of it.

#[cfg(test)]
mod helpers {
    use tt_core::{TransitNetwork, WeightedGraph};

    pub fn sample_durations() -> Vec<Vec<i64>> {
        vec![
            vec![0, 4, 0, 0, 0, 0, 0, 8, 0],
            vec![4, 0, 8, 0, 0, 0, 0, 11, 0],
            vec![0, 8, 0, 7, 0, 4, 0, 0, 2],
            vec![0, 0, 7, 0, 9, 14, 0, 0, 0],
            vec![0, 0, 0, 9, 0, 10, 0, 0, 0],
            vec![0, 0, 4, 14, 10, 0, 2, 0, 0],
            vec![0, 0, 0, 0, 0, 2, 0, 1, 6],
            vec![8, 11, 0, 0, 0, 0, 1, 0, 7],
            vec![0, 0, 2, 0, 0, 0, 6, 7, 0],
        ]
    }

    pub fn sample_first_departures() -> Vec<Vec<i64>> {
        vec![
            vec![0, 4, 0, 0, 0, 0, 0, 18, 0],
            vec![14, 0, 18, 0, 0, 0, 10, 11, 0],
            vec![0, 18, 10, 17, 10, 14, 0, 0, 12],
            vec![0, 0, 17, 0, 19, 14, 0, 0, 0],
            vec![0, 0, 0, 9, 0, 10, 0, 0, 0],
            vec![0, 0, 14, 14, 10, 0, 12, 0, 0],
            vec![0, 0, 0, 0, 0, 12, 0, 11, 16],
            vec![18, 11, 0, 0, 0, 0, 11, 0, 17],
            vec![0, 0, 12, 0, 0, 0, 16, 17, 0],
        ]
    }

    pub fn sample_frequencies() -> Vec<Vec<i64>> {
        vec![
            vec![0, 5, 0, 0, 0, 0, 0, 10, 0],
            vec![12, 0, 20, 0, 0, 0, 10, 15, 0],
            vec![0, 18, 10, 25, 10, 30, 0, 0, 14],
            vec![0, 0, 15, 0, 11, 14, 0, 0, 0],
            vec![0, 0, 0, 19, 0, 10, 0, 0, 0],
            vec![0, 0, 15, 14, 13, 0, 8, 0, 0],
            vec![0, 0, 0, 0, 0, 10, 0, 14, 16],
            vec![20, 11, 0, 0, 0, 0, 10, 0, 14],
            vec![0, 0, 12, 0, 0, 0, 15, 18, 0],
        ]
    }

    pub fn sample_graph() -> WeightedGraph {
        WeightedGraph::from_rows(sample_durations()).unwrap()
    }

    pub fn sample_network() -> TransitNetwork {
        TransitNetwork::from_rows(
            sample_durations(),
            sample_first_departures(),
            sample_frequencies(),
        )
        .unwrap()
    }

    pub fn minutes(values: &[u32]) -> Vec<tt_core::Minutes> {
        values.iter().map(|&v| tt_core::Minutes(v)).collect()
    }

    /// Split a flat row-major vector into rows of `n`.
    pub fn rows(flat: &[i64], n: usize) -> Vec<Vec<i64>> {
        flat.chunks(n).map(|c| c.to_vec()).collect()
    }
}

// ── Frontier selection ────────────────────────────────────────────────────────

#[cfg(test)]
mod frontier {
    use tt_core::{Minutes, StationId};

    use crate::select_frontier;

    const INF: Minutes = Minutes::INFINITE;

    #[test]
    fn picks_minimum() {
        let costs = [Minutes(9), Minutes(3), Minutes(7)];
        assert_eq!(select_frontier(&costs, &[false; 3]), Some(StationId(1)));
    }

    #[test]
    fn skips_processed() {
        let costs = [Minutes(0), Minutes(3), Minutes(7)];
        let processed = [true, true, false];
        assert_eq!(select_frontier(&costs, &processed), Some(StationId(2)));
    }

    // The `<=` scan lets the last of several equal minimums win.  This is the
    // established tie-break and other results depend on it.
    #[test]
    fn ties_go_to_highest_index() {
        let costs = [Minutes(0), Minutes(5), Minutes(5), INF];
        let processed = [true, false, false, false];
        assert_eq!(select_frontier(&costs, &processed), Some(StationId(2)));
    }

    #[test]
    fn unreached_stations_still_selectable() {
        let costs = [Minutes(0), INF, INF];
        let processed = [true, false, false];
        assert_eq!(select_frontier(&costs, &processed), Some(StationId(2)));
    }

    #[test]
    fn none_when_all_processed() {
        let costs = [Minutes(0), Minutes(1)];
        assert_eq!(select_frontier(&costs, &[true, true]), None);
    }
}

// ── Next departure ────────────────────────────────────────────────────────────

#[cfg(test)]
mod departure {
    use std::num::NonZeroU32;

    use tt_core::Minutes;

    use crate::{RouteError, next_departure_wait, next_departure_wait_checked};

    fn every(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn before_first_departure() {
        // First train at 18, now is 10 → wait 8.
        assert_eq!(next_departure_wait(Minutes(18), every(10), 10), Minutes(8));
    }

    #[test]
    fn exactly_on_a_departure() {
        assert_eq!(next_departure_wait(Minutes(4), every(5), 4), Minutes(0));
        assert_eq!(next_departure_wait(Minutes(4), every(5), 24), Minutes(0));
    }

    #[test]
    fn between_departures() {
        // Departures 4, 9, 14, …; at 30 the next is 34.
        assert_eq!(next_departure_wait(Minutes(4), every(5), 30), Minutes(4));
        // Departures 0, 12, 24, 36; at 25 the next is 36.
        assert_eq!(next_departure_wait(Minutes(0), every(12), 25), Minutes(11));
    }

    #[test]
    fn unit_frequency_never_waits_after_first() {
        assert_eq!(next_departure_wait(Minutes(3), every(1), 1_000), Minutes(0));
    }

    #[test]
    fn checked_rejects_zero_frequency() {
        assert_eq!(
            next_departure_wait_checked(0, 0, 10),
            Err(RouteError::InvalidFrequency(0))
        );
        assert_eq!(
            next_departure_wait_checked(0, -3, 10),
            Err(RouteError::InvalidFrequency(-3))
        );
    }

    #[test]
    fn checked_rejects_negative_now() {
        assert!(matches!(
            next_departure_wait_checked(1, 5, -10),
            Err(RouteError::InvalidTime { what: "current time", .. })
        ));
    }

    #[test]
    fn checked_negative_first_departure() {
        // Departures -3, 7, 17, …
        assert_eq!(next_departure_wait_checked(-3, 10, 0), Ok(Minutes(7)));
        assert_eq!(next_departure_wait_checked(-3, 10, 5), Ok(Minutes(2)));
        assert_eq!(next_departure_wait_checked(-20, 10, 0), Ok(Minutes(0)));
    }

    #[test]
    fn checked_matches_unchecked() {
        assert_eq!(next_departure_wait_checked(4, 5, 30), Ok(Minutes(4)));
    }
}

// ── Static engine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fixed {
    use tt_core::{CoreError, Minutes, StationId, WeightedGraph};

    use super::helpers::{minutes, sample_graph};
    use crate::{RouteError, shortest_times};

    #[test]
    fn classic_nine_station_result() {
        let table = shortest_times(&sample_graph(), StationId(0)).unwrap();
        assert_eq!(table.as_slice(), minutes(&[0, 4, 12, 19, 21, 11, 9, 8, 14]).as_slice());
    }

    #[test]
    fn disconnected_station_is_infinite() {
        let g = WeightedGraph::from_rows(vec![
            vec![0, 3, 0],
            vec![3, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let table = shortest_times(&g, StationId(0)).unwrap();
        assert_eq!(table[StationId(1)], Minutes(3));
        assert_eq!(table[StationId(2)], Minutes::INFINITE);
        assert_eq!(table.reachable_count(), 2);
    }

    #[test]
    fn one_way_edges_respected() {
        let g = WeightedGraph::from_rows(vec![vec![0, 5], vec![0, 0]]).unwrap();
        assert_eq!(shortest_times(&g, StationId(0)).unwrap()[StationId(1)], Minutes(5));
        assert_eq!(shortest_times(&g, StationId(1)).unwrap()[StationId(0)], Minutes::INFINITE);
    }

    #[test]
    fn single_station() {
        let g = WeightedGraph::from_rows(vec![vec![0]]).unwrap();
        let table = shortest_times(&g, StationId(0)).unwrap();
        assert_eq!(table.as_slice(), &[Minutes(0)]);
    }

    // A zero entry is "no edge", so a zero-minute hop cannot be modelled:
    // station 2 is unreachable rather than reachable in 0 minutes.
    #[test]
    fn zero_weight_edge_is_no_edge() {
        let g = WeightedGraph::from_rows(vec![
            vec![0, 2, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let table = shortest_times(&g, StationId(0)).unwrap();
        assert_eq!(table[StationId(2)], Minutes::INFINITE);
    }

    #[test]
    fn source_out_of_range() {
        let err = shortest_times(&sample_graph(), StationId(9)).unwrap_err();
        assert_eq!(
            err,
            RouteError::Core(CoreError::StationOutOfRange { station: StationId(9), count: 9 })
        );
    }

    #[test]
    fn shorter_path_through_more_hops() {
        // 0→2 direct costs 10; 0→1→2 costs 3.
        let g = WeightedGraph::from_rows(vec![
            vec![0, 1, 10],
            vec![0, 0, 2],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(shortest_times(&g, StationId(0)).unwrap()[StationId(2)], Minutes(3));
    }

    // The second hop would sum past the sentinel and must not be relaxed.
    #[test]
    fn near_sentinel_chain_stays_unreachable() {
        let big = (u32::MAX - 1) as i64;
        let g = WeightedGraph::from_rows(vec![
            vec![0, big, 0],
            vec![0, 0, big],
            vec![0, 0, 0],
        ])
        .unwrap();
        let table = shortest_times(&g, StationId(0)).unwrap();
        assert_eq!(table[StationId(1)], Minutes(4_294_967_294));
        assert_eq!(table[StationId(2)], Minutes::INFINITE);
    }

    #[test]
    fn repeated_calls_identical() {
        let g = sample_graph();
        let a = shortest_times(&g, StationId(4)).unwrap();
        let b = shortest_times(&g, StationId(4)).unwrap();
        assert_eq!(a, b);
    }
}

// ── Schedule-aware engine ─────────────────────────────────────────────────────

#[cfg(test)]
mod scheduled {
    use tt_core::{ClockPolicy, CoreError, Minutes, StationId, TransitNetwork};

    use super::helpers::{minutes, sample_network};
    use crate::{
        RouteError, TravelQuery, shortest_travel_time, shortest_travel_time_with, travel_times,
    };

    fn shared(net: &TransitNetwork, from: u32, to: u32, start: u32) -> Minutes {
        shortest_travel_time(net, StationId(from), StationId(to), Minutes(start)).unwrap()
    }

    fn per_station(net: &TransitNetwork, from: u32, to: u32, start: u32) -> Minutes {
        shortest_travel_time_with(
            net,
            &TravelQuery::new(from, to, start),
            ClockPolicy::PerStationArrival,
        )
        .unwrap()
    }

    // Regression values for the shared accumulating clock.  They depend on
    // relaxation order and must not drift.
    #[test]
    fn sample_regressions_shared_clock() {
        let net = sample_network();
        assert_eq!(shared(&net, 0, 2, 30), Minutes(26));
        assert_eq!(shared(&net, 3, 7, 20), Minutes(35));
        assert_eq!(shared(&net, 1, 5, 55), Minutes(24));
        assert_eq!(shared(&net, 8, 6, 200), Minutes(11));
    }

    #[test]
    fn sample_regressions_per_station_arrival() {
        let net = sample_network();
        assert_eq!(per_station(&net, 0, 2, 30), Minutes(16));
        assert_eq!(per_station(&net, 3, 7, 20), Minutes(34));
        assert_eq!(per_station(&net, 1, 5, 55), Minutes(19));
        assert_eq!(per_station(&net, 8, 6, 200), Minutes(17));
    }

    #[test]
    fn sample_full_table_shared_clock() {
        let net = sample_network();
        let table = travel_times(&net, StationId(0), Minutes(30), ClockPolicy::SharedAccumulating)
            .unwrap();
        assert_eq!(
            table.as_slice(),
            minutes(&[0, 8, 26, 42, 46, 24, 14, 8, 26]).as_slice()
        );
    }

    #[test]
    fn sample_full_table_per_station() {
        let net = sample_network();
        let table = travel_times(&net, StationId(0), Minutes(30), ClockPolicy::PerStationArrival)
            .unwrap();
        assert_eq!(
            table.as_slice(),
            minutes(&[0, 8, 16, 40, 42, 24, 22, 16, 26]).as_slice()
        );
    }

    #[test]
    fn early_exit_matches_full_run() {
        let net = sample_network();
        for from in 0..9 {
            let table =
                travel_times(&net, StationId(from), Minutes(45), ClockPolicy::SharedAccumulating)
                    .unwrap();
            for to in 0..9 {
                assert_eq!(shared(&net, from, to, 45), table[StationId(to)], "{from}->{to}");
            }
        }
    }

    // Frequency equal to duration on a simple line, traced by hand:
    //   start 1; 0→1 departs 3, 8, … → wait 2, cost 7, clock 1 + 7 = 8
    //   1→2 departs 0, 4, 8, … → wait 0 at clock 8, cost 7 + 4 = 11
    #[test]
    fn frequency_equals_duration_line() {
        let net = TransitNetwork::from_rows(
            vec![vec![0, 5, 0], vec![0, 0, 4], vec![0, 0, 0]],
            vec![vec![0, 3, 0], vec![0, 0, 0], vec![0, 0, 0]],
            vec![vec![0, 5, 0], vec![0, 0, 4], vec![0, 0, 0]],
        )
        .unwrap();
        assert_eq!(shared(&net, 0, 1, 1), Minutes(7));
        assert_eq!(shared(&net, 0, 2, 1), Minutes(11));
        assert_eq!(per_station(&net, 0, 2, 1), Minutes(11));
        // Starting at 3 the first train is caught immediately: 5, then the
        // clock reads 8, which is a departure of 1→2.
        assert_eq!(shared(&net, 0, 2, 3), Minutes(9));
    }

    // Relaxing 0→1 pushes the shared clock to 10, so 0→2 (every 20 minutes
    // from 0) is looked up at minute 10 and waits 10 even though the traveller
    // is still at station 0 at minute 0.
    #[test]
    fn shared_clock_inflates_sibling_waits() {
        let net = TransitNetwork::from_rows(
            vec![vec![0, 10, 1], vec![0, 0, 0], vec![0, 0, 0]],
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
            vec![vec![0, 1, 20], vec![0, 0, 0], vec![0, 0, 0]],
        )
        .unwrap();
        assert_eq!(shared(&net, 0, 2, 0), Minutes(11));
        assert_eq!(per_station(&net, 0, 2, 0), Minutes(1));
    }

    fn near_sentinel_chain() -> TransitNetwork {
        let big = (u32::MAX - 1) as i64;
        TransitNetwork::from_rows(
            vec![vec![0, big, 0], vec![0, 0, big], vec![0, 0, 0]],
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
            vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]],
        )
        .unwrap()
    }

    #[test]
    fn near_sentinel_chain_stays_unreachable() {
        let net = near_sentinel_chain();
        for policy in [ClockPolicy::SharedAccumulating, ClockPolicy::PerStationArrival] {
            let table = travel_times(&net, StationId(0), Minutes(0), policy).unwrap();
            assert_eq!(table[StationId(1)], Minutes(4_294_967_294), "{policy}");
            assert_eq!(table[StationId(2)], Minutes::INFINITE, "{policy}");
        }
        assert_eq!(shared(&net, 0, 2, 0), Minutes::INFINITE);
    }

    // A start time near the sentinel pushes the clock past u32 range; waits
    // are still computed against the wide clock.
    #[test]
    fn late_start_time_does_not_wrap() {
        let net = near_sentinel_chain();
        assert_eq!(shared(&net, 0, 1, u32::MAX - 1), Minutes(4_294_967_294));
        assert_eq!(per_station(&net, 0, 1, u32::MAX - 1), Minutes(4_294_967_294));
        assert_eq!(shared(&net, 0, 2, u32::MAX - 1), Minutes::INFINITE);
    }

    #[test]
    fn negative_first_departure_rolls_forward() {
        // 0→1 departs -3, 7, 17, … so leaving at 0 waits 7.
        let net = TransitNetwork::from_rows(
            vec![vec![0, 5], vec![0, 0]],
            vec![vec![0, -3], vec![0, 0]],
            vec![vec![0, 10], vec![0, 0]],
        )
        .unwrap();
        assert_eq!(shared(&net, 0, 1, 0), Minutes(12));
        assert_eq!(shared(&net, 0, 1, 8), Minutes(14));
    }

    #[test]
    fn source_equals_target() {
        let net = sample_network();
        assert_eq!(shared(&net, 4, 4, 100), Minutes(0));
    }

    #[test]
    fn unreachable_target_is_infinite() {
        let net = TransitNetwork::from_rows(
            vec![vec![0, 2, 0], vec![2, 0, 0], vec![0, 0, 0]],
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
            vec![vec![0, 5, 0], vec![5, 0, 0], vec![0, 0, 0]],
        )
        .unwrap();
        assert_eq!(shared(&net, 0, 2, 0), Minutes::INFINITE);
        assert_eq!(per_station(&net, 0, 2, 0), Minutes::INFINITE);
    }

    #[test]
    fn target_out_of_range() {
        let net = sample_network();
        let err = shortest_travel_time(&net, StationId(0), StationId(12), Minutes(0)).unwrap_err();
        assert_eq!(
            err,
            RouteError::Core(CoreError::StationOutOfRange { station: StationId(12), count: 9 })
        );
    }

    #[test]
    fn source_out_of_range() {
        let net = sample_network();
        assert!(shortest_travel_time(&net, StationId(9), StationId(0), Minutes(0)).is_err());
        assert!(travel_times(&net, StationId(9), Minutes(0), ClockPolicy::default()).is_err());
    }

    #[test]
    fn repeated_calls_identical() {
        let net = sample_network();
        let first = shared(&net, 3, 7, 20);
        let second = shared(&net, 3, 7, 20);
        assert_eq!(first, second);
    }
}

// ── Router & batch ────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use tt_core::{ClockPolicy, Minutes, StationId};

    use super::helpers::{sample_graph, sample_network};
    use crate::{
        Router, ScheduleAwareRouter, StaticRouter, TravelQuery, route_batch, shortest_times,
        shortest_times_all,
    };

    #[test]
    fn static_router_uses_durations_only() {
        let net = sample_network();
        let t = StaticRouter
            .travel_time(&net, &TravelQuery::new(0, 8, 999))
            .unwrap();
        assert_eq!(t, Minutes(14));
    }

    #[test]
    fn batch_preserves_order() {
        let net = sample_network();
        let queries = [
            TravelQuery::new(0, 2, 30),
            TravelQuery::new(3, 7, 20),
            TravelQuery::new(1, 5, 55),
            TravelQuery::new(8, 6, 200),
            TravelQuery::new(0, 42, 0),
        ];
        let results = route_batch(&ScheduleAwareRouter::default(), &net, &queries);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0], Ok(Minutes(26)));
        assert_eq!(results[1], Ok(Minutes(35)));
        assert_eq!(results[2], Ok(Minutes(24)));
        assert_eq!(results[3], Ok(Minutes(11)));
        assert!(results[4].is_err());
    }

    #[test]
    fn batch_through_trait_object() {
        let net = sample_network();
        let router: Box<dyn Router> = Box::new(ScheduleAwareRouter::new(ClockPolicy::PerStationArrival));
        let results = route_batch(router.as_ref(), &net, &[TravelQuery::new(0, 2, 30)]);
        assert_eq!(results, vec![Ok(Minutes(16))]);
    }

    #[test]
    fn all_sources_matches_single_source() {
        let g = sample_graph();
        let all = shortest_times_all(&g).unwrap();
        assert_eq!(all.len(), 9);
        for s in StationId::all(9) {
            assert_eq!(all[s.index()], shortest_times(&g, s).unwrap());
        }
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use std::num::NonZeroU32;

    use proptest::prelude::*;

    use tt_core::{ClockPolicy, Minutes, StationId, TransitNetwork, WeightedGraph};

    use super::helpers::rows;
    use crate::{next_departure_wait, shortest_times, shortest_travel_time_with, travel_times, TravelQuery};

    /// Stepping `k` upward from zero until the departure is not in the past.
    fn wait_by_scan(first: u32, frequency: u32, now: u64) -> u64 {
        let mut k = 0u64;
        loop {
            let departure = first as u64 + k * frequency as u64;
            if departure >= now {
                return departure - now;
            }
            k += 1;
        }
    }

    fn edge_weight() -> impl Strategy<Value = i64> {
        prop_oneof![3 => Just(0i64), 2 => 1i64..15]
    }

    fn graph_strategy() -> impl Strategy<Value = WeightedGraph> {
        (1usize..8).prop_flat_map(|n| {
            prop::collection::vec(edge_weight(), n * n)
                .prop_map(move |flat| WeightedGraph::from_rows(rows(&flat, n)).unwrap())
        })
    }

    fn network_strategy() -> impl Strategy<Value = TransitNetwork> {
        (1usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec(edge_weight(), n * n),
                prop::collection::vec(0i64..30, n * n),
                prop::collection::vec(1i64..20, n * n),
            )
                .prop_map(move |(d, f, q)| {
                    TransitNetwork::from_rows(rows(&d, n), rows(&f, n), rows(&q, n)).unwrap()
                })
        })
    }

    fn relabelled_strategy() -> impl Strategy<Value = (WeightedGraph, Vec<usize>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec(edge_weight(), n * n)
                    .prop_map(move |flat| WeightedGraph::from_rows(rows(&flat, n)).unwrap()),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
        })
    }

    proptest! {
        #[test]
        fn closed_form_wait_matches_scan(first in 0u32..500, freq in 1u32..60, now in 0u64..2_000) {
            let wait = next_departure_wait(Minutes(first), NonZeroU32::new(freq).unwrap(), now);
            prop_assert_eq!(wait.wide(), wait_by_scan(first, freq, now));
        }

        #[test]
        fn static_source_is_zero(g in graph_strategy(), pick in any::<prop::sample::Index>()) {
            let source = StationId(pick.index(g.station_count()) as u32);
            let table = shortest_times(&g, source).unwrap();
            prop_assert_eq!(table[source], Minutes::ZERO);
        }

        #[test]
        fn static_relabel_invariance((g, mapping) in relabelled_strategy()) {
            let relabelled = g.relabel(&mapping).unwrap();
            for s in StationId::all(g.station_count()) {
                let original = shortest_times(&g, s).unwrap();
                let moved = shortest_times(&relabelled, StationId(mapping[s.index()] as u32)).unwrap();
                for (v, cost) in original.iter() {
                    prop_assert_eq!(cost, moved[StationId(mapping[v.index()] as u32)]);
                }
            }
        }

        #[test]
        fn static_costs_satisfy_edges(g in graph_strategy()) {
            // No edge can improve on a finalized cost.
            let table = shortest_times(&g, StationId(0)).unwrap();
            for (from, to, w) in g.matrix().entries() {
                let (from, to) = (StationId(from as u32), StationId(to as u32));
                if w == Minutes::ZERO || !table[from].is_finite() {
                    continue;
                }
                prop_assert!(table[to].wide() <= table[from].wide() + w.wide());
            }
        }

        #[test]
        fn timetable_source_is_zero(net in network_strategy(), start in 0u32..300) {
            for policy in [ClockPolicy::SharedAccumulating, ClockPolicy::PerStationArrival] {
                let table = travel_times(&net, StationId(0), Minutes(start), policy).unwrap();
                prop_assert_eq!(table[StationId(0)], Minutes::ZERO);
            }
        }

        #[test]
        fn timetable_reachability_matches_static(net in network_strategy(), start in 0u32..300) {
            let fixed = shortest_times(net.durations(), StationId(0)).unwrap();
            let timed = travel_times(&net, StationId(0), Minutes(start), ClockPolicy::SharedAccumulating).unwrap();
            for (v, cost) in fixed.iter() {
                prop_assert_eq!(cost.is_finite(), timed[v].is_finite());
            }
        }

        #[test]
        fn static_is_lower_bound(net in network_strategy(), start in 0u32..300) {
            let fixed = shortest_times(net.durations(), StationId(0)).unwrap();
            for policy in [ClockPolicy::SharedAccumulating, ClockPolicy::PerStationArrival] {
                let timed = travel_times(&net, StationId(0), Minutes(start), policy).unwrap();
                for (v, cost) in fixed.iter() {
                    prop_assert!(cost <= timed[v]);
                }
            }
        }

        #[test]
        fn timetable_idempotent(net in network_strategy(), start in 0u32..300) {
            let n = net.station_count() as u32;
            let query = TravelQuery::new(0, n - 1, start);
            let a = shortest_travel_time_with(&net, &query, ClockPolicy::SharedAccumulating).unwrap();
            let b = shortest_travel_time_with(&net, &query, ClockPolicy::SharedAccumulating).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

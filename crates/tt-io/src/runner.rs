//! Execute a [`RunConfig`] end to end.

use tracing::info;

use tt_core::StationId;
use tt_route::{CostTable, ScheduleAwareRouter, route_batch, shortest_times};

use crate::writer::{QueryOutcome, ResultWriter};
use crate::{IoResult, RunConfig, load_network_dir};

/// Everything a run computed, in config order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub station_count: usize,
    pub static_tables: Vec<(StationId, CostTable)>,
    pub outcomes:      Vec<QueryOutcome>,
}

/// Load the network, answer every static source and timetable query, and
/// write results if `output_dir` is set.
///
/// Fails on the first invalid source or query.
pub fn execute(config: &RunConfig) -> IoResult<RunReport> {
    let network = load_network_dir(&config.network_dir)?;

    let static_tables = config
        .static_sources
        .iter()
        .map(|&s| Ok((s, shortest_times(network.durations(), s)?)))
        .collect::<IoResult<Vec<_>>>()?;

    let router = ScheduleAwareRouter::new(config.clock_policy);
    let outcomes = route_batch(&router, &network, &config.queries)
        .into_iter()
        .zip(&config.queries)
        .map(|(result, query)| Ok(QueryOutcome::new(query, config.clock_policy, result?)))
        .collect::<IoResult<Vec<_>>>()?;

    info!(
        stations = network.station_count(),
        static_sources = static_tables.len(),
        queries = outcomes.len(),
        policy = %config.clock_policy,
        "run complete"
    );

    if let Some(dir) = &config.output_dir {
        let mut writer = ResultWriter::new(dir)?;
        for (source, table) in &static_tables {
            writer.write_static_table(*source, table)?;
        }
        for outcome in &outcomes {
            writer.push_outcome(*outcome);
        }
        writer.finish()?;
        info!(dir = %dir.display(), "results written");
    }

    Ok(RunReport {
        station_count: network.station_count(),
        static_tables,
        outcomes,
    })
}

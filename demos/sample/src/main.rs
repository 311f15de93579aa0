//! sample — both engines on the classic 9-station network.
//!
//! With no arguments, prints the static cost table from station 0 and four
//! timetable queries under each clock policy.  With a path argument, runs the
//! JSON run configuration at that path instead (see `tt_io::config`).
//!
//! Set `RUST_LOG=debug` (or `trace`) to see per-query and per-relaxation logs.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tt_core::{ClockPolicy, Minutes, ServiceDay, StationId};
use tt_io::{RunReport, execute, load_run_config};
use tt_route::{ScheduleAwareRouter, TravelQuery, route_batch, shortest_times};

use network::build_network;

// ── Queries ───────────────────────────────────────────────────────────────────

/// `(from, to, start_time)`, start times in minutes after 05:30.
const QUERIES: [(u32, u32, u32); 4] = [
    (0, 2, 30),
    (3, 7, 20),
    (1, 5, 55),
    (8, 6, 200),
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match std::env::args().nth(1) {
        Some(path) => run_config(Path::new(&path)),
        None => run_builtin(),
    }
}

fn run_builtin() -> Result<()> {
    println!("=== sample — schedule-aware shortest travel time ===");
    println!();

    let network = build_network()?;
    println!(
        "Network: {} stations, {} directed edges",
        network.station_count(),
        network.durations().edge_count()
    );
    println!();

    // 1. Static engine.
    let table = shortest_times(network.durations(), StationId(0))?;
    println!("Station distances (time) from source 0, durations only");
    for (station, minutes) in table.iter() {
        println!("  {:>2}: {}", station.0, minutes);
    }
    println!();

    // 2. Timetable engine under both policies.
    let queries: Vec<TravelQuery> = QUERIES
        .iter()
        .map(|&(from, to, start)| TravelQuery::new(from, to, start))
        .collect();
    let day = ServiceDay::default();

    let t0 = Instant::now();
    for policy in [ClockPolicy::SharedAccumulating, ClockPolicy::PerStationArrival] {
        println!("Timetable queries ({policy})");
        println!("{:<8} {:<8} {:<8} {:<14} {:<8}", "From", "To", "Leave", "Travel", "Arrive");
        println!("{}", "-".repeat(48));

        let results = route_batch(&ScheduleAwareRouter::new(policy), &network, &queries);
        for (query, result) in queries.iter().zip(results) {
            let minutes = result?;
            let arrival = query
                .start_time
                .checked_add(minutes)
                .unwrap_or(Minutes::INFINITE);
            println!(
                "{:<8} {:<8} {:<8} {:<14} {:<8}",
                query.from.0,
                query.to.0,
                day.format(query.start_time),
                minutes.to_string(),
                day.format(arrival),
            );
        }
        println!();
    }
    println!("Queries answered in {:.3} ms", t0.elapsed().as_secs_f64() * 1_000.0);

    Ok(())
}

fn run_config(path: &Path) -> Result<()> {
    let config = load_run_config(path)?;
    let RunReport { station_count, static_tables, outcomes } = execute(&config)?;

    println!("Network: {station_count} stations  |  policy: {}", config.clock_policy);
    for (source, table) in &static_tables {
        println!("Static costs from {}: {} reachable", source.0, table.reachable_count());
    }
    for o in &outcomes {
        println!("{} -> {} leaving at {}: {}", o.from.0, o.to.0, o.start_time.0, o.minutes);
    }
    if let Some(dir) = &config.output_dir {
        println!("Results written to {}", dir.display());
    }
    Ok(())
}

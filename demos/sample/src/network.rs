//! The classic 9-station network with a hand-written timetable.
//!
//! Times are minutes after 05:30.  The duration matrix is the textbook
//! Dijkstra example; first departures and frequencies sit on the same edges.
//! The CSVs under `data/` are embedded so the binary runs from any directory;
//! `data/run.json` points at the same files for the config-driven mode.

use std::io::Cursor;

use anyhow::Result;

use tt_core::network::{DURATION, FIRST_DEPARTURE, FREQUENCY};
use tt_core::TransitNetwork;
use tt_io::load_matrix_reader;

const DURATION_CSV: &str = include_str!("../data/duration.csv");
const FIRST_DEPARTURE_CSV: &str = include_str!("../data/first_departure.csv");
const FREQUENCY_CSV: &str = include_str!("../data/frequency.csv");

/// Parse and validate the embedded matrices.
pub fn build_network() -> Result<TransitNetwork> {
    let duration = load_matrix_reader(Cursor::new(DURATION_CSV), DURATION)?;
    let first = load_matrix_reader(Cursor::new(FIRST_DEPARTURE_CSV), FIRST_DEPARTURE)?;
    let frequency = load_matrix_reader(Cursor::new(FREQUENCY_CSV), FREQUENCY)?;
    Ok(TransitNetwork::new(&duration, &first, &frequency)?)
}

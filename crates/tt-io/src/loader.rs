//! CSV matrix loader.
//!
//! # CSV format
//!
//! No header.  One matrix row per line, comma-separated integers.  Blank
//! lines and lines starting with `#` are skipped; whitespace around values is
//! ignored.
//!
//! ```csv
//! # duration.csv
//! 0,4,0
//! 4,0,8
//! 0,8,0
//! ```
//!
//! Values are read as `i64` so that negative entries reach the network
//! validator and are reported there instead of failing as parse errors.
//! Ragged rows are likewise passed through and rejected as `NotSquare`.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use tt_core::network::{DURATION, FIRST_DEPARTURE, FREQUENCY};
use tt_core::{SquareMatrix, TransitNetwork, WeightedGraph};

use crate::{IoError, IoResult};

pub const DURATION_FILE: &str = "duration.csv";
pub const FIRST_DEPARTURE_FILE: &str = "first_departure.csv";
pub const FREQUENCY_FILE: &str = "frequency.csv";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load one square matrix from a CSV file.
///
/// `name` labels validation errors (`"duration"`, `"frequency"`, …).
pub fn load_matrix_csv(path: &Path, name: &'static str) -> IoResult<SquareMatrix<i64>> {
    let file = std::fs::File::open(path)?;
    read_matrix(file, name, &path.display().to_string())
}

/// Like [`load_matrix_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for matrices embedded in
/// a binary.
pub fn load_matrix_reader<R: Read>(reader: R, name: &'static str) -> IoResult<SquareMatrix<i64>> {
    read_matrix(reader, name, name)
}

/// Load a static graph from a single duration CSV.
pub fn load_weighted_graph_csv(path: &Path) -> IoResult<WeightedGraph> {
    let raw = load_matrix_csv(path, DURATION)?;
    Ok(WeightedGraph::from_matrix(&raw)?)
}

/// Load and validate the three schedule matrices from `dir`.
pub fn load_network_dir(dir: &Path) -> IoResult<TransitNetwork> {
    let duration = load_matrix_csv(&dir.join(DURATION_FILE), DURATION)?;
    let first = load_matrix_csv(&dir.join(FIRST_DEPARTURE_FILE), FIRST_DEPARTURE)?;
    let frequency = load_matrix_csv(&dir.join(FREQUENCY_FILE), FREQUENCY)?;

    let network = TransitNetwork::new(&duration, &first, &frequency)?;
    debug!(
        dir = %dir.display(),
        stations = network.station_count(),
        edges = network.durations().edge_count(),
        "loaded transit network"
    );
    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_matrix<R: Read>(reader: R, name: &'static str, source: &str) -> IoResult<SquareMatrix<i64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<i64>> = Vec::new();
    for (line, result) in csv_reader.deserialize::<Vec<i64>>().enumerate() {
        let row = result.map_err(|e| IoError::Parse {
            path:    source.to_string(),
            message: format!("row {line}: {e}"),
        })?;
        rows.push(row);
    }

    Ok(SquareMatrix::from_rows(name, rows)?)
}

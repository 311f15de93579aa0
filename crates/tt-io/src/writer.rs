//! Result writers.
//!
//! The unreachable sentinel is written as the integer `4294967295`
//! (`u32::MAX`) in both CSV and JSON, never as an empty cell or `null`.
//!
//! [`ResultWriter`] creates these files in an output directory:
//! - `queries.csv`, `queries.json` (one row/object per timetable query)
//! - `static_<source>.csv` (one per static source)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tt_core::{ClockPolicy, Minutes, StationId};
use tt_route::{CostTable, TravelQuery};

use crate::IoResult;

// ── Rows ──────────────────────────────────────────────────────────────────────

/// One answered timetable query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub from:         StationId,
    pub to:           StationId,
    pub start_time:   Minutes,
    pub clock_policy: ClockPolicy,
    /// `u32::MAX` when `to` cannot be reached.
    pub minutes:      Minutes,
}

impl QueryOutcome {
    pub fn new(query: &TravelQuery, clock_policy: ClockPolicy, minutes: Minutes) -> Self {
        Self {
            from: query.from,
            to: query.to,
            start_time: query.start_time,
            clock_policy,
            minutes,
        }
    }
}

#[derive(Serialize)]
struct CostRow {
    station: StationId,
    minutes: Minutes,
}

// ── Stream helpers ────────────────────────────────────────────────────────────

/// Write a cost table as `station,minutes` rows.
pub fn write_cost_table_csv<W: Write>(writer: W, table: &CostTable) -> IoResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (station, minutes) in table.iter() {
        csv_writer.serialize(CostRow { station, minutes })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write outcomes as CSV with a `from,to,start_time,clock_policy,minutes`
/// header.
pub fn write_outcomes_csv<W: Write>(writer: W, outcomes: &[QueryOutcome]) -> IoResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(outcome)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write outcomes as a pretty-printed JSON array.
pub fn write_outcomes_json<W: Write>(mut writer: W, outcomes: &[QueryOutcome]) -> IoResult<()> {
    serde_json::to_writer_pretty(&mut writer, outcomes)?;
    writer.write_all(b"\n")?;
    Ok(())
}

// ── ResultWriter ──────────────────────────────────────────────────────────────

/// Writes a run's results into one directory.
pub struct ResultWriter {
    dir:      PathBuf,
    outcomes: Vec<QueryOutcome>,
    finished: bool,
}

impl ResultWriter {
    /// Create `dir` if needed.
    pub fn new(dir: &Path) -> IoResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            outcomes: Vec::new(),
            finished: false,
        })
    }

    /// Write `static_<source>.csv` immediately.
    pub fn write_static_table(&mut self, source: StationId, table: &CostTable) -> IoResult<PathBuf> {
        let path = self.dir.join(format!("static_{}.csv", source.0));
        write_cost_table_csv(BufWriter::new(File::create(&path)?), table)?;
        Ok(path)
    }

    /// Buffer an outcome; query files are written by [`ResultWriter::finish`].
    pub fn push_outcome(&mut self, outcome: QueryOutcome) {
        self.outcomes.push(outcome);
    }

    /// Write `queries.csv` and `queries.json`.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> IoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        write_outcomes_csv(
            BufWriter::new(File::create(self.dir.join("queries.csv"))?),
            &self.outcomes,
        )?;
        write_outcomes_json(
            BufWriter::new(File::create(self.dir.join("queries.json"))?),
            &self.outcomes,
        )?;
        Ok(())
    }
}

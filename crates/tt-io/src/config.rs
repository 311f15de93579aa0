//! JSON run configuration.
//!
//! ```json
//! {
//!   "network_dir": "data/sample",
//!   "static_sources": [0],
//!   "queries": [
//!     { "from": 0, "to": 2, "start_time": 30 },
//!     { "from": 3, "to": 7, "start_time": 20 }
//!   ],
//!   "clock_policy": "shared_accumulating",
//!   "output_dir": "out"
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tt_core::{ClockPolicy, StationId};
use tt_route::TravelQuery;

use crate::IoResult;

/// Everything needed to run a batch of queries against one network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Directory holding `duration.csv`, `first_departure.csv`,
    /// `frequency.csv`.
    pub network_dir: PathBuf,

    /// Sources for which the full static cost table is computed.
    #[serde(default)]
    pub static_sources: Vec<StationId>,

    /// Timetable-aware queries.
    #[serde(default)]
    pub queries: Vec<TravelQuery>,

    #[serde(default)]
    pub clock_policy: ClockPolicy,

    /// Where to write results.  `None` keeps them in memory only.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    /// Make relative paths relative to `base` instead of the process cwd.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.network_dir.is_relative() {
            self.network_dir = base.join(&self.network_dir);
        }
        if let Some(out) = &self.output_dir {
            if out.is_relative() {
                self.output_dir = Some(base.join(out));
            }
        }
    }
}

/// Read a config file and resolve its paths against the file's directory.
pub fn load_run_config(path: &Path) -> IoResult<RunConfig> {
    let file = std::fs::File::open(path)?;
    let mut config = load_run_config_reader(file)?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

/// Parse a config from any reader without touching its paths.
pub fn load_run_config_reader<R: Read>(reader: R) -> IoResult<RunConfig> {
    Ok(serde_json::from_reader(reader)?)
}

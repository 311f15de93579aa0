//! `tt-io` — getting networks in and results out.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`loader`] | `load_matrix_csv`, `load_matrix_reader`, `load_network_dir`, `load_weighted_graph_csv` |
//! | [`config`] | `RunConfig`, `load_run_config`, `load_run_config_reader`       |
//! | [`writer`] | `ResultWriter`, `QueryOutcome`, CSV/JSON helpers               |
//! | [`runner`] | `execute`, `RunReport`                                         |
//! | [`error`]  | `IoError`, `IoResult<T>`                                       |
//!
//! # Network directory
//!
//! A network is three header-less CSV files of integers in one directory:
//!
//! ```text
//! duration.csv          travel minutes, 0 = no edge
//! first_departure.csv   minutes after the reference instant of the first departure
//! frequency.csv         minutes between departures
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod runner;
pub mod writer;


pub use config::{RunConfig, load_run_config, load_run_config_reader};
pub use error::{IoError, IoResult};
pub use loader::{load_matrix_csv, load_matrix_reader, load_network_dir, load_weighted_graph_csv};
pub use runner::{RunReport, execute};
pub use writer::{
    QueryOutcome, ResultWriter, write_cost_table_csv, write_outcomes_csv, write_outcomes_json,
};

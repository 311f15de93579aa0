//! `tt-core` — foundational types for the `transit_time` workspace.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`ids`]       | `StationId`                                              |
//! | [`time`]      | `Minutes` (with the `INFINITE` sentinel), `ServiceDay`   |
//! | [`matrix`]    | `SquareMatrix<T>`                                        |
//! | [`network`]   | `WeightedGraph`, `TransitNetwork`, `ScheduledEdge`, `ClockPolicy` |
//! | [`error`]     | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod matrix;
pub mod network;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::StationId;
pub use matrix::SquareMatrix;
pub use network::{ClockPolicy, ScheduledEdge, TransitNetwork, WeightedGraph, earliest_departure};
pub use time::{Minutes, ServiceDay};

//! `tt-route` — shortest-time search over transit networks.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`frontier`]  | `select_frontier`                                          |
//! | [`departure`] | `next_departure_wait`, `next_departure_wait_checked`       |
//! | [`table`]     | `CostTable`                                                |
//! | [`fixed`]     | `shortest_times` (static durations)                        |
//! | [`scheduled`] | `shortest_travel_time`, `travel_times` (timetable-aware)   |
//! | [`router`]    | `Router` trait, `TravelQuery`, `StaticRouter`, `ScheduleAwareRouter` |
//! | [`batch`]     | `route_batch`, `shortest_times_all`                        |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                             |
//!
//! Both engines are the same O(N²) array-scan Dijkstra (see `search`),
//! differing only in how an edge's cost is computed.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `route_batch` fans queries out over Rayon.               |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.       |

pub mod batch;
pub mod departure;
pub mod error;
pub mod fixed;
pub mod frontier;
pub mod router;
pub mod scheduled;
pub mod table;

mod search;

#[cfg(test)]
mod tests;

pub use batch::{route_batch, shortest_times_all};
pub use departure::{next_departure_wait, next_departure_wait_checked};
pub use error::{RouteError, RouteResult};
pub use fixed::shortest_times;
pub use frontier::select_frontier;
pub use router::{Router, ScheduleAwareRouter, StaticRouter, TravelQuery};
pub use scheduled::{shortest_travel_time, shortest_travel_time_with, travel_times};
pub use table::CostTable;

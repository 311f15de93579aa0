//! Wait until the next scheduled departure on an edge.
//!
//! Departures on an edge leave at `first + k * frequency` for `k ≥ 0`.  The
//! wait at instant `now` is the smallest non-negative `first + k * frequency -
//! now`.  The closed form picks `k = max(0, ceil((now - first) / frequency))`,
//! which yields the same value as stepping `k` upward from zero.

use std::num::NonZeroU32;

use tt_core::{Minutes, earliest_departure};

use crate::{RouteError, RouteResult};

/// Minutes to wait at `now` for the next departure.
///
/// `now` is a `u64` because the shared search clock can run past the range
/// of a single cost.  The result always fits: it is either `first - now`
/// (when the first departure has not left yet) or less than `frequency`.
#[inline]
pub fn next_departure_wait(first: Minutes, frequency: NonZeroU32, now: u64) -> Minutes {
    let first = first.wide();
    if first >= now {
        return Minutes((first - now) as u32);
    }
    let freq = frequency.get() as u64;
    let k = (now - first).div_ceil(freq);
    Minutes((first + k * freq - now) as u32)
}

/// [`next_departure_wait`] for unvalidated integers.
///
/// Rejects a non-positive frequency (which would otherwise never find a
/// departure) and a negative `now`.  A negative `first` is moved forward
/// along its own series, so `(-3, 10, 0)` waits 7 minutes.
pub fn next_departure_wait_checked(first: i64, frequency: i64, now: i64) -> RouteResult<Minutes> {
    let frequency = u32::try_from(frequency)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(RouteError::InvalidFrequency(frequency))?;
    let first = u32::try_from(earliest_departure(first, frequency))
        .ok()
        .and_then(|v| Minutes::from_wide(v as u64))
        .ok_or(RouteError::InvalidTime { what: "first departure", value: first })?;
    let now = u64::try_from(now).map_err(|_| RouteError::InvalidTime { what: "current time", value: now })?;
    Ok(next_departure_wait(first, frequency, now))
}

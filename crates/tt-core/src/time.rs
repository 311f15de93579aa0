//! Minute-based time model.
//!
//! # Design
//!
//! Every quantity the engines handle (travel durations, waits, first
//! departures, absolute clock readings, accumulated costs) is a whole number
//! of minutes measured from a fixed reference instant:
//!
//!   wall_time = origin + minutes
//!
//! `Minutes::INFINITE` (`u32::MAX`) is the "unreachable" sentinel.  It is
//! carried verbatim through serialization and must never take part in
//! arithmetic; [`Minutes::checked_add`] returns `None` instead of producing
//! a value at or beyond the sentinel.

use std::fmt;

// ── Minutes ───────────────────────────────────────────────────────────────────

/// A non-negative count of minutes, or the unreachable sentinel.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    /// Cost of a station that cannot be reached.
    pub const INFINITE: Minutes = Minutes(u32::MAX);

    #[inline]
    pub fn is_finite(self) -> bool {
        self != Self::INFINITE
    }

    /// Sum of two finite values, `None` if either side is the sentinel or the
    /// sum would reach it.
    #[inline]
    pub fn checked_add(self, rhs: Minutes) -> Option<Minutes> {
        if !self.is_finite() || !rhs.is_finite() {
            return None;
        }
        Self::from_wide(self.0 as u64 + rhs.0 as u64)
    }

    /// Narrow a `u64` intermediate back to `Minutes`.  Values at or beyond the
    /// sentinel are rejected.
    #[inline]
    pub fn from_wide(value: u64) -> Option<Minutes> {
        if value < u32::MAX as u64 {
            Some(Minutes(value as u32))
        } else {
            None
        }
    }

    /// Widen for overflow-free intermediate arithmetic.
    #[inline]
    pub fn wide(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{} min", self.0)
        } else {
            f.write_str("unreachable")
        }
    }
}

// ── ServiceDay ────────────────────────────────────────────────────────────────

/// Maps minute offsets to wall-clock time of day.
///
/// Timetable data is expressed as minutes after a reference instant (05:30,
/// the start of the service day, by default).  `ServiceDay` holds no heap data
/// and is cheap to copy.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceDay {
    /// Minutes after midnight of offset zero.
    pub origin_minutes: u32,
}

impl ServiceDay {
    /// `(hour, minute)` on a 24-hour clock for an offset.  Offsets past
    /// midnight wrap; `None` for the unreachable sentinel.
    pub fn wall_clock(&self, offset: Minutes) -> Option<(u32, u32)> {
        if !offset.is_finite() {
            return None;
        }
        let total = (self.origin_minutes as u64 + offset.wide()) % (24 * 60);
        Some(((total / 60) as u32, (total % 60) as u32))
    }

    /// `HH:MM` rendering of [`ServiceDay::wall_clock`], `"--:--"` when
    /// unreachable.
    pub fn format(&self, offset: Minutes) -> String {
        match self.wall_clock(offset) {
            Some((h, m)) => format!("{h:02}:{m:02}"),
            None => "--:--".to_string(),
        }
    }
}

impl Default for ServiceDay {
    /// 05:30.
    fn default() -> Self {
        Self { origin_minutes: 5 * 60 + 30 }
    }
}

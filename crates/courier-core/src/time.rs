//! Clock-time model.
//!
//! # Design
//!
//! A time of day is a monotonically increasing minute counter since midnight
//! ([`ClockTime`]).  Using an integer minute as the canonical time unit means
//! all schedule arithmetic is exact (no floating-point drift) and comparisons
//! are O(1).  Minute granularity is deliberate: the planner never needs
//! sub-minute precision, and `HH:MM` is the display format throughout.
//!
//! The mapping from route distance to elapsed minutes is held in
//! [`TimeClock`]:
//!
//! ```text
//! minutes = distance / speed * 60
//! ```
//!
//! Times are same-day: a route that runs past midnight keeps counting hours
//! (`25:10` formats as such) rather than wrapping, so comparisons within one
//! simulated shift stay total-ordered.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A minute-granularity time of day.
///
/// Stored as minutes since midnight in a `u16` (enough for ~45 days — far
/// beyond any single shift).  Ordering and equality follow the minute
/// counter directly.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Construct from an absolute minute count since midnight.
    #[inline]
    pub const fn from_minutes(minutes: u16) -> ClockTime {
        ClockTime(minutes)
    }

    /// Construct from hour/minute components.
    ///
    /// Fails if `minute >= 60`.  `hour` is not bounded at 24 — late-shift
    /// arithmetic can push a same-day clock past midnight.
    pub fn new(hour: u16, minute: u16) -> CoreResult<ClockTime> {
        if minute >= 60 {
            return Err(CoreError::MalformedTime(format!("{hour}:{minute}")));
        }
        Ok(ClockTime(hour.saturating_mul(60).saturating_add(minute)))
    }

    /// Parse an `HH:MM` string (a single-digit hour such as `9:45` is
    /// accepted; the hour must be 0–23 for parsed input).
    pub fn parse(s: &str) -> CoreResult<ClockTime> {
        let malformed = || CoreError::MalformedTime(s.to_string());

        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour: u16 = h.parse().map_err(|_| malformed())?;
        let minute: u16 = m.parse().map_err(|_| malformed())?;
        if hour >= 24 || minute >= 60 {
            return Err(malformed());
        }
        Ok(ClockTime(hour * 60 + minute))
    }

    /// Absolute minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (may exceed 23 for a clock pushed past midnight).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute-of-hour component.
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// The time `minutes` later than `self`, saturating at the `u16` ceiling.
    #[inline]
    pub fn plus_minutes(self, minutes: u16) -> ClockTime {
        ClockTime(self.0.saturating_add(minutes))
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: ClockTime) -> u16 {
        self.0 - earlier.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── TimeClock ─────────────────────────────────────────────────────────────────

/// Converts route distance into elapsed clock time at a fixed average speed.
///
/// `TimeClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
pub struct TimeClock {
    /// Clock time at which the delivery shift begins.  Default: 08:00.
    pub shift_start: ClockTime,
    /// Average travel speed in distance units per hour.  Default: 18.0.
    pub speed: f64,
}

impl TimeClock {
    pub fn new(shift_start: ClockTime, speed: f64) -> Self {
        debug_assert!(speed > 0.0, "speed must be positive");
        Self { shift_start, speed }
    }

    /// Minutes needed to cover `distance` at the configured speed.
    #[inline]
    pub fn minutes_for(&self, distance: f64) -> f64 {
        distance / self.speed * 60.0
    }

    /// Distance covered in `minutes` at the configured speed.
    #[inline]
    pub fn distance_in(&self, minutes: f64) -> f64 {
        minutes / 60.0 * self.speed
    }

    /// Clock time after travelling `distance`, starting from `departure`.
    ///
    /// Fractional minutes truncate — the clock only ever shows whole minutes.
    pub fn time_after(&self, departure: ClockTime, distance: f64) -> ClockTime {
        departure.plus_minutes(self.minutes_for(distance) as u16)
    }
}

impl Default for TimeClock {
    /// 08:00 shift start at 18 distance units per hour.
    fn default() -> Self {
        Self {
            shift_start: ClockTime::from_minutes(8 * 60),
            speed: 18.0,
        }
    }
}

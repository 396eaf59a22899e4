//! Countdown arithmetic for the "days until" banner.
//!
//! The browser side samples `Date.now()` once per second and asks this module
//! for the text to show. Local-time calendar math stays in JavaScript's
//! `Date`; everything here works on millisecond instants.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use std::fmt;

use serde::Deserialize;

const MS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Calendar day the countdown runs toward, repeating every year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AnnualDate {
    /// 1-based month.
    pub month: u32,
    pub day: u32,
}

impl AnnualDate {
    pub const CHRISTMAS: Self = Self { month: 12, day: 25 };

    /// Zero-based month index as `Date` expects it.
    #[must_use]
    pub fn month_index(self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// Whether the date exists in every year. February 29 is rejected: `Date`
    /// would roll it over to March 1 in common years.
    #[must_use]
    pub fn is_valid(self) -> bool {
        let max_day = match self.month {
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            1..=12 => 31,
            _ => return false,
        };
        (1..=max_day).contains(&self.day)
    }
}

impl Default for AnnualDate {
    fn default() -> Self {
        Self::CHRISTMAS
    }
}

/// Which year's occurrence to count toward.
///
/// `this_year_ms` is local midnight of the target day in `year`. Once that
/// instant has been reached the countdown rolls over to the next year.
#[must_use]
pub fn target_year(year: u32, now_ms: f64, this_year_ms: f64) -> u32 {
    if now_ms >= this_year_ms { year + 1 } else { year }
}

/// Whole time units left until a target instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a millisecond span into units. Negative spans clamp to zero and
    /// partial seconds are dropped.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        let total = ms.max(0) / MS_PER_SECOND;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn between(now_ms: f64, target_ms: f64) -> Self {
        Self::from_millis((target_ms - now_ms).floor() as i64)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

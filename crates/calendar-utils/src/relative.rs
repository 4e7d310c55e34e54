//! Coarse "time ago" labels.
//!
//! The elapsed time `now - past` is split into whole days plus the seconds
//! left over within the partial day, then sorted into the first matching
//! bucket: years, months, days, hours, minutes, or "just now". Years and
//! months use fixed 365- and 30-day divisors, not calendar lengths.
//!
//! The reference "now" is always an explicit argument, except in
//! [`format_relative_time_since_now`], which reads the local clock once.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// The bucket an elapsed duration falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "count", rename_all = "snake_case")]
pub enum RelativeTime {
    Years(i64),
    Months(i64),
    Days(i64),
    Hours(i64),
    Minutes(i64),
    JustNow,
}

impl RelativeTime {
    /// Classify the time elapsed from `past` to `now`.
    ///
    /// A `past` that lies after `now` has no positive day or second
    /// component and is reported as [`RelativeTime::JustNow`].
    pub fn between(past: NaiveDateTime, now: NaiveDateTime) -> Self {
        let total_seconds = (now - past).num_seconds();
        let days = total_seconds / SECONDS_PER_DAY;
        let seconds = total_seconds % SECONDS_PER_DAY;

        if days > DAYS_PER_YEAR {
            RelativeTime::Years(days / DAYS_PER_YEAR)
        } else if days > DAYS_PER_MONTH {
            RelativeTime::Months(days / DAYS_PER_MONTH)
        } else if days > 0 {
            RelativeTime::Days(days)
        } else if seconds > SECONDS_PER_HOUR {
            RelativeTime::Hours(seconds / SECONDS_PER_HOUR)
        } else if seconds > SECONDS_PER_MINUTE {
            RelativeTime::Minutes(seconds / SECONDS_PER_MINUTE)
        } else {
            RelativeTime::JustNow
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::Years(n) => write!(f, "{n} years ago"),
            RelativeTime::Months(n) => write!(f, "{n} months ago"),
            RelativeTime::Days(n) => write!(f, "{n} days ago"),
            RelativeTime::Hours(n) => write!(f, "{n} hours ago"),
            RelativeTime::Minutes(n) => write!(f, "{n} minutes ago"),
            RelativeTime::JustNow => f.write_str("just now"),
        }
    }
}

/// Render the time elapsed from `past` to `now` as a human-readable label.
///
/// # Examples
///
/// ```
/// use calendar_utils::format_relative_time;
/// use chrono::{Duration, NaiveDate};
///
/// let now = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(format_relative_time(now - Duration::days(45), now), "1 months ago");
/// assert_eq!(format_relative_time(now - Duration::hours(5), now), "5 hours ago");
/// ```
pub fn format_relative_time(past: NaiveDateTime, now: NaiveDateTime) -> String {
    RelativeTime::between(past, now).to_string()
}

/// Like [`format_relative_time`], anchored on the local wall clock.
pub fn format_relative_time_since_now(past: NaiveDateTime) -> String {
    let now = Local::now().naive_local();
    format_relative_time(past, now)
}

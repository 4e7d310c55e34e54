//! Weekday-only day counting. Holidays are not considered.

use chrono::{Datelike, Duration, NaiveDateTime};

/// Whether `ts` falls on Monday through Friday.
pub fn is_business_day(ts: NaiveDateTime) -> bool {
    ts.weekday().num_days_from_monday() < 5
}

/// Count business days in the inclusive range `[start, end]`.
///
/// Walks forward one calendar day at a time from `start` while the cursor is
/// not after `end`, so the time of day on both ends takes part in the
/// comparison. A `start` after `end` counts zero days. The walk stops at the
/// last representable day.
///
/// # Examples
///
/// ```
/// use calendar_utils::count_business_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(count_business_days(start, end), 23);
/// ```
pub fn count_business_days(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let mut days = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            days += 1;
        }
        match current.checked_add_signed(Duration::days(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

//! Multi-format date parsing with first-match-wins fallback.
//!
//! A date string is tried against an ordered list of [`DateFormatPattern`]s.
//! Each attempt is a strict, whole-string parse: the string must consist of
//! exactly three numeric fields separated by the pattern's separator, with a
//! four-digit year and one- or two-digit month and day. The first pattern
//! that yields a valid calendar date wins; later patterns are never tried.
//!
//! Ambiguous inputs such as `01-02-2024` are resolved purely by pattern
//! priority. No attempt is made to detect which field "looks like" a month.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{DateError, Result};

// ── DateFormatPattern ───────────────────────────────────────────────────────

/// A fixed token layout for interpreting a textual date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormatPattern {
    /// `2024-12-25`
    YearMonthDay,
    /// `12/25/2024`
    MonthDayYear,
    /// `25-12-2024`
    DayMonthYear,
    /// `2024/12/25`
    YearMonthDaySlash,
}

impl DateFormatPattern {
    /// Every pattern, in the default priority order.
    pub const ALL: [DateFormatPattern; 4] = [
        DateFormatPattern::YearMonthDay,
        DateFormatPattern::MonthDayYear,
        DateFormatPattern::DayMonthYear,
        DateFormatPattern::YearMonthDaySlash,
    ];

    /// The chrono format string for this layout.
    pub fn format_str(self) -> &'static str {
        match self {
            DateFormatPattern::YearMonthDay => "%Y-%m-%d",
            DateFormatPattern::MonthDayYear => "%m/%d/%Y",
            DateFormatPattern::DayMonthYear => "%d-%m-%Y",
            DateFormatPattern::YearMonthDaySlash => "%Y/%m/%d",
        }
    }

    /// Render `date` in this layout (zero-padded month and day).
    pub fn format(self, date: &NaiveDate) -> String {
        date.format(self.format_str()).to_string()
    }

    fn separator(self) -> char {
        match self {
            DateFormatPattern::YearMonthDay | DateFormatPattern::DayMonthYear => '-',
            DateFormatPattern::MonthDayYear | DateFormatPattern::YearMonthDaySlash => '/',
        }
    }

    /// Index of the year among the three fields.
    fn year_field(self) -> usize {
        match self {
            DateFormatPattern::YearMonthDay | DateFormatPattern::YearMonthDaySlash => 0,
            DateFormatPattern::MonthDayYear | DateFormatPattern::DayMonthYear => 2,
        }
    }

    /// Whether `text` has the token shape of this layout. chrono alone would
    /// also accept signed or space-padded fields.
    fn matches_shape(self, text: &str) -> bool {
        let fields: Vec<&str> = text.split(self.separator()).collect();
        if fields.len() != 3 {
            return false;
        }
        let year_field = self.year_field();
        fields.iter().enumerate().all(|(i, field)| {
            let width_ok = if i == year_field {
                field.len() == 4
            } else {
                (1..=2).contains(&field.len())
            };
            width_ok && field.bytes().all(|b| b.is_ascii_digit())
        })
    }
}

impl fmt::Display for DateFormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_str())
    }
}

// ── parse_with_pattern ──────────────────────────────────────────────────────

/// Strictly parse `text` with a single pattern.
///
/// The result is midnight of the parsed date.
///
/// # Errors
///
/// Returns [`DateError::Malformed`] if `text` does not have the pattern's
/// token shape (wrong separator, extra characters, wrong field widths), or
/// [`DateError::Unparseable`] if the fields do not form a valid calendar date,
/// or [`DateError::YearOutOfRange`] for year zero.
///
/// # Examples
///
/// ```
/// use calendar_utils::parse::{parse_with_pattern, DateFormatPattern};
///
/// let ts = parse_with_pattern("25-12-2024", DateFormatPattern::DayMonthYear).unwrap();
/// assert_eq!(ts.to_string(), "2024-12-25 00:00:00");
/// assert!(parse_with_pattern("2024-02-30", DateFormatPattern::YearMonthDay).is_err());
/// ```
pub fn parse_with_pattern(text: &str, pattern: DateFormatPattern) -> Result<NaiveDateTime> {
    if !pattern.matches_shape(text) {
        return Err(DateError::Malformed {
            input: text.to_string(),
            pattern,
        });
    }

    let date = NaiveDate::parse_from_str(text, pattern.format_str()).map_err(|source| {
        DateError::Unparseable {
            input: text.to_string(),
            pattern,
            source,
        }
    })?;
    if date.year() < 1 {
        return Err(DateError::YearOutOfRange {
            input: text.to_string(),
            pattern,
        });
    }
    Ok(date.and_time(NaiveTime::MIN))
}

// ── FlexibleDateParser ──────────────────────────────────────────────────────

/// An ordered list of candidate patterns; the first one that parses wins.
///
/// The default order is `[year-month-day, month/day/year, day-month-year,
/// year/month/day]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibleDateParser {
    patterns: Vec<DateFormatPattern>,
}

impl Default for FlexibleDateParser {
    fn default() -> Self {
        Self {
            patterns: DateFormatPattern::ALL.to_vec(),
        }
    }
}

impl FlexibleDateParser {
    /// A parser that tries `patterns` in the given order.
    pub fn with_patterns(patterns: impl IntoIterator<Item = DateFormatPattern>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    pub fn patterns(&self) -> &[DateFormatPattern] {
        &self.patterns
    }

    /// Parse `text` with the first pattern that accepts it, or `None`.
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        self.patterns
            .iter()
            .find_map(|&pattern| match parse_with_pattern(text, pattern) {
                Ok(ts) => Some(ts),
                Err(err) => {
                    trace!(%err, "date pattern rejected input");
                    None
                }
            })
    }
}

/// Parse a free-form date using the default pattern order.
///
/// Returns `None` when no pattern matches; this is never an error.
///
/// # Examples
///
/// ```
/// use calendar_utils::parse_flexible_date;
///
/// let christmas = parse_flexible_date("2024/12/25").unwrap();
/// assert_eq!(christmas.to_string(), "2024-12-25 00:00:00");
/// assert!(parse_flexible_date("not-a-date").is_none());
/// ```
pub fn parse_flexible_date(text: &str) -> Option<NaiveDateTime> {
    FlexibleDateParser::default().parse(text)
}

// ── Tests ───────────────────────────────────────────────────────────────────

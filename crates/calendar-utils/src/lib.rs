//! # calendar-utils
//!
//! Small, deterministic date helpers.
//!
//! Every function is a pure value-in/value-out operation over
//! `chrono::NaiveDateTime`. Nothing reads the system clock except
//! [`format_relative_time_since_now`], which samples it once per call.
//!
//! ## Modules
//!
//! - [`parse`] — free-form date text → timestamp, first matching pattern wins
//! - [`relative`] — elapsed time → "3 days ago" style labels
//! - [`business_days`] — weekday test and inclusive business-day counting
//! - [`error`] — Error types

pub mod business_days;
pub mod error;
pub mod parse;
pub mod relative;

pub use business_days::{count_business_days, is_business_day};
pub use error::DateError;
pub use parse::{parse_flexible_date, parse_with_pattern, DateFormatPattern, FlexibleDateParser};
pub use relative::{format_relative_time, format_relative_time_since_now, RelativeTime};

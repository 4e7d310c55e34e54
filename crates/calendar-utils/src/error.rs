//! Error types for calendar-utils operations.

use thiserror::Error;

use crate::parse::DateFormatPattern;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("'{input}' is not shaped like {pattern}")]
    Malformed {
        input: String,
        pattern: DateFormatPattern,
    },

    #[error("'{input}' has a year before 1, which {pattern} does not accept")]
    YearOutOfRange {
        input: String,
        pattern: DateFormatPattern,
    },

    #[error("'{input}' does not match {pattern}: {source}")]
    Unparseable {
        input: String,
        pattern: DateFormatPattern,
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, DateError>;

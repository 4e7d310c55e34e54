//! Error types for business-records operations.

use calendar_utils::DateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;

//! Error types for calendar boundary parsing.
//!
//! The layout computations themselves never fail; these errors come from
//! turning host-supplied strings and config into typed values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid view mode: {0} (expected \"week\" or \"day\")")]
    InvalidViewMode(String),

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid grid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

// File: crates/chart-helpers/src/error.rs
// Summary: Error type for the fallible entry points (record loading, timestamp conversion).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartHelpersError {
    /// Input was not a JSON array of flat objects with number/string/null values.
    #[error("invalid record data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timestamp {0}ms is outside the representable date range")]
    TimestampOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, ChartHelpersError>;

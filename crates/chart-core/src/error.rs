// File: crates/chart-core/src/error.rs
// Summary: Error type for caller contract violations.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Label sampling divides by `count - 1`, so at least two labels are required.
    #[error("label count must be at least 2, got {0}")]
    InvalidLabelCount(usize),

    #[error("malformed candle at {time}: {reason}")]
    MalformedCandle { time: String, reason: &'static str },

    #[error("unknown timeframe '{0}' (expected one of 5m, 15m, 1h, 4h, 1d)")]
    UnknownTimeframe(String),
}

//! Error types for statistics queries.

use crate::store::StoreError;

/// Result type for statistics queries
pub type StatsResult<T> = Result<T, StatsError>;

/// Error type for statistics queries
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// An unrecognized period tag was supplied. Only reachable through the
    /// string entry points; the [`Period`](crate::time::Period) enum makes
    /// this impossible in typed code.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// The underlying record store failed. The whole query fails; no
    /// partially-populated result is ever returned.
    #[error("Attendance data unavailable: {0}")]
    DataUnavailable(#[from] StoreError),
}

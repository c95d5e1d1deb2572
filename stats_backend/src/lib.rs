//! Curtaincall statistics backend - attendance history analytics.
//!
//! Converts a user's live-performance attendance records into
//! comparison-aware summaries: current vs previous period, fixed-length
//! trend series, and categorical breakdowns by genre, companion, and
//! area.
//!
//! The single entry point is [`stats::fetch_statistics`], which reads
//! records once through a [`store::RecordStore`] and computes the rest
//! synchronously.

pub mod models;
pub mod stats;
pub mod store;
pub mod time;

pub use models::AttendanceRecord;
pub use stats::{
    fetch_statistics, fetch_statistics_blocking, fetch_statistics_with_highlight, StatsError,
    StatsResult, StatisticsResult, StatisticsSummary,
};
pub use store::{LocalRecordStore, RecordStore};
pub use time::{DateWindow, Period};

//! Statistics engine: aggregation, trends, and comparison summaries.
//!
//! This module turns a flat list of attendance records into the numbers a
//! statistics screen displays. The layers, leaves first:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Facade (facade.rs) - one query, one store read         │
//! └───────────────┬─────────────────────────────────────────┘
//!                 │
//! ┌───────────────▼─────────────────────────────────────────┐
//! │  Summary (summary.rs) - current vs previous comparison  │
//! └───────────────┬─────────────────────────────────────────┘
//!                 │
//! ┌───────────────▼──────────────┐  ┌──────────────────────┐
//! │  Aggregate (aggregate.rs)    │  │  Trend (trend.rs)    │
//! │  counts, rating, tallies     │  │  fixed-length series │
//! └──────────────────────────────┘  └──────────────────────┘
//! ```
//!
//! Apart from the facade's single store read, every function here is pure:
//! no shared state, no caching, identical inputs give identical results.

pub mod aggregate;
pub mod error;
pub mod facade;
pub mod summary;
pub mod trend;

pub use aggregate::{
    aggregate, tally, Aggregation, CategoricalTally, GroupField, TallyEntry, UNKNOWN_LABEL,
};
pub use error::{StatsError, StatsResult};
pub use facade::{
    fetch_statistics, fetch_statistics_blocking, fetch_statistics_with_highlight, StatisticsResult,
};
pub use summary::{compose, StatisticsSummary, NO_HIGHLIGHT};
pub use trend::{build_trend, TrendPoint};

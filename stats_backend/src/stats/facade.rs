//! Statistics query entry point.
//!
//! The facade orchestrates one query end to end: resolve the window pair,
//! read the record store once over the union of both windows, then compute
//! everything else synchronously from that snapshot. Results are rebuilt
//! on every call; any caching belongs to the caller, layered over this
//! function.

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use super::aggregate::{aggregate, tally, CategoricalTally, GroupField};
use super::error::StatsResult;
use super::summary::{compose, StatisticsSummary};
use super::trend::{build_trend, TrendPoint};
use crate::store::RecordStore;
use crate::time::{resolve_windows, Period};

/// Everything the presentation layer needs for one statistics screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub period: Period,
    pub summary: StatisticsSummary,
    /// Ordered, fixed-length series for the current window.
    pub trend: Vec<TrendPoint>,
    pub by_genre: CategoricalTally,
    pub by_companion: CategoricalTally,
    pub by_area: CategoricalTally,
}

/// Fetch attendance statistics for `period` around `anchor`, highlighting
/// the most frequent genre.
///
/// # Arguments
/// * `store` - Record store implementation
/// * `period` - Query granularity
/// * `anchor` - Instant the current window must contain
///
/// # Returns
/// * `Ok(StatisticsResult)` with summary, trend, and tallies
/// * `Err(StatsError::DataUnavailable)` if the store read fails
pub async fn fetch_statistics<R>(
    store: &R,
    period: Period,
    anchor: DateTime<Utc>,
) -> StatsResult<StatisticsResult>
where
    R: RecordStore + ?Sized,
{
    fetch_statistics_with_highlight(store, period, anchor, GroupField::Genre).await
}

/// Fetch attendance statistics with a caller-designated highlight dimension.
///
/// This is the single suspension point of a query: one `fetch_records`
/// call over the union of the current and previous windows, partitioned in
/// memory afterwards. A store failure fails the whole query; no partial
/// result is returned.
pub async fn fetch_statistics_with_highlight<R>(
    store: &R,
    period: Period,
    anchor: DateTime<Utc>,
    highlight: GroupField,
) -> StatsResult<StatisticsResult>
where
    R: RecordStore + ?Sized,
{
    let (current, previous) = resolve_windows(period, anchor);
    info!(
        "Statistics query: period={}, current={}, previous={}",
        period, current, previous
    );

    let union = previous.union(&current);
    let records = store.fetch_records(&union).await?;
    info!(
        "Statistics query: {} records in union window {}",
        records.len(),
        union
    );

    let current_agg = aggregate(&records, &current);
    let previous_agg = aggregate(&records, &previous);
    let trend = build_trend(&records, &current, period);

    let summary = match highlight {
        GroupField::Genre => compose(&current_agg, &previous_agg, &current_agg.by_genre),
        GroupField::Companion => compose(&current_agg, &previous_agg, &current_agg.by_companion),
        GroupField::Area => compose(&current_agg, &previous_agg, &current_agg.by_area),
        GroupField::Weekday => {
            let by_weekday = tally(&records, &current, GroupField::Weekday);
            compose(&current_agg, &previous_agg, &by_weekday)
        }
    };

    Ok(StatisticsResult {
        period,
        summary,
        trend,
        by_genre: current_agg.by_genre,
        by_companion: current_agg.by_companion,
        by_area: current_agg.by_area,
    })
}

/// Blocking wrapper for synchronous callers.
///
/// Creates a throwaway runtime and blocks on [`fetch_statistics`]. Not for
/// use inside an async context.
pub fn fetch_statistics_blocking<R>(
    store: &R,
    period: Period,
    anchor: DateTime<Utc>,
) -> anyhow::Result<StatisticsResult>
where
    R: RecordStore + ?Sized,
{
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    Ok(runtime.block_on(fetch_statistics(store, period, anchor))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use crate::stats::error::StatsError;
    use crate::stats::summary::NO_HIGHLIGHT;
    use crate::store::{LocalRecordStore, StoreError};
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn record(
        viewed_at: DateTime<Utc>,
        rating: i32,
        genre: &str,
        companion: &str,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            performance_id: "PF001".to_string(),
            title: "Test".to_string(),
            poster_url: None,
            area: Some("Seoul".to_string()),
            venue: None,
            genre: Some(genre.to_string()),
            viewed_at,
            rating,
            seat: String::new(),
            companion: companion.to_string(),
            cast: String::new(),
            memo: String::new(),
            created_at: viewed_at,
            updated_at: viewed_at,
        }
    }

    #[tokio::test]
    async fn test_weekly_statistics_end_to_end() {
        let store = LocalRecordStore::new();
        store.insert_record(record(utc(2025, 3, 10, 19), 5, "Musical", "solo"));
        store.insert_record(record(utc(2025, 3, 12, 20), 3, "Play", "friends"));

        let result = fetch_statistics(&store, Period::Weekly, utc(2025, 3, 12, 22))
            .await
            .unwrap();

        assert_eq!(result.period, Period::Weekly);
        assert_eq!(result.summary.current_count, 2);
        assert_eq!(result.summary.average_rating, 4.0);
        assert_eq!(result.summary.special_info, "Musical");

        assert_eq!(result.trend.len(), 7);
        assert_eq!(result.trend[0].count, 1); // Monday
        assert_eq!(result.trend[2].count, 1); // Wednesday
        assert_eq!(result.trend.iter().map(|p| p.count).sum::<usize>(), 2);

        assert_eq!(result.by_genre.count_for("Musical"), 1);
        assert_eq!(result.by_genre.count_for("Play"), 1);
        assert_eq!(result.by_companion.count_for("solo"), 1);
        assert_eq!(result.by_area.count_for("Seoul"), 2);
    }

    #[tokio::test]
    async fn test_empty_store_yields_zeroed_result() {
        let store = LocalRecordStore::new();
        let result = fetch_statistics(&store, Period::Monthly, utc(2025, 3, 12, 0))
            .await
            .unwrap();

        assert_eq!(result.summary.current_count, 0);
        assert_eq!(result.summary.change_count, 0);
        assert_eq!(result.summary.change_percentage, 0.0);
        assert_eq!(result.summary.average_rating, 0.0);
        assert_eq!(result.summary.special_info, NO_HIGHLIGHT);
        assert!(result.trend.iter().all(|p| p.count == 0));
        assert!(result.by_genre.is_empty());
    }

    #[tokio::test]
    async fn test_previous_window_drives_change() {
        let store = LocalRecordStore::new();
        // Two visits in February, three in March.
        store.insert_record(record(utc(2025, 2, 5, 19), 4, "Play", "solo"));
        store.insert_record(record(utc(2025, 2, 20, 19), 4, "Play", "solo"));
        for day in [3, 14, 25] {
            store.insert_record(record(utc(2025, 3, day, 19), 5, "Musical", "family"));
        }

        let result = fetch_statistics(&store, Period::Monthly, utc(2025, 3, 15, 0))
            .await
            .unwrap();

        assert_eq!(result.summary.current_count, 3);
        assert_eq!(result.summary.change_count, 1);
        assert_eq!(result.summary.change_percentage, 50.0);
        assert!(result.summary.is_increase);
        // February's records stay out of the current tallies.
        assert_eq!(result.by_genre.count_for("Play"), 0);
    }

    #[tokio::test]
    async fn test_weekday_highlight_dimension() {
        let store = LocalRecordStore::new();
        store.insert_record(record(utc(2025, 3, 8, 19), 5, "Musical", "solo")); // Saturday
        store.insert_record(record(utc(2025, 3, 15, 19), 4, "Play", "solo")); // Saturday
        store.insert_record(record(utc(2025, 3, 12, 19), 3, "Play", "solo")); // Wednesday

        let result = fetch_statistics_with_highlight(
            &store,
            Period::Monthly,
            utc(2025, 3, 15, 0),
            GroupField::Weekday,
        )
        .await
        .unwrap();

        assert_eq!(result.summary.special_info, "Sat");
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = LocalRecordStore::new();
        store.insert_record(record(utc(2025, 3, 10, 19), 5, "Musical", "solo"));
        store.set_healthy(false);

        let result = fetch_statistics(&store, Period::Weekly, utc(2025, 3, 12, 0)).await;
        assert!(matches!(
            result,
            Err(StatsError::DataUnavailable(StoreError::ConnectionError(_)))
        ));
    }

    #[tokio::test]
    async fn test_repeated_queries_are_identical() {
        let store = LocalRecordStore::new();
        store.insert_record(record(utc(2025, 3, 10, 19), 5, "Musical", "solo"));
        store.insert_record(record(utc(2025, 3, 12, 20), 3, "Play", "friends"));

        let anchor = utc(2025, 3, 12, 22);
        let first = fetch_statistics(&store, Period::Weekly, anchor).await.unwrap();
        let second = fetch_statistics(&store, Period::Weekly, anchor).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_blocking_wrapper() {
        let store = LocalRecordStore::new();
        store.insert_record(record(utc(2025, 3, 10, 19), 5, "Musical", "solo"));

        let result =
            fetch_statistics_blocking(&store, Period::Weekly, utc(2025, 3, 12, 0)).unwrap();
        assert_eq!(result.summary.current_count, 1);
    }
}

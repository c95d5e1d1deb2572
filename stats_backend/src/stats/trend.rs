//! Fixed-length trend series for charting.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;
use crate::time::{week_start, weekday_index, DateWindow, Period, MONTH_LABELS, WEEKDAY_LABELS};

/// One bucket of an ordered trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Sort key within the series (0 = Monday / week 1 / January).
    pub index: usize,
    pub label: String,
    pub count: usize,
}

/// Build the per-bucket attendance counts for one window.
///
/// The series length is fixed by the period: 7 weekday points, one point
/// per Monday-aligned week intersecting the month (4-6), or 12 month
/// points. Buckets with no records are present with count 0, so sparse
/// data never shortens the series.
pub fn build_trend(
    records: &[AttendanceRecord],
    window: &DateWindow,
    period: Period,
) -> Vec<TrendPoint> {
    let buckets = period.bucket_count(window);
    let mut counts = vec![0usize; buckets];

    for record in records.iter().filter(|r| window.contains(r.viewed_at)) {
        let index = bucket_index(record, window, period);
        if index < buckets {
            counts[index] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| TrendPoint {
            index,
            label: bucket_label(index, period),
            count,
        })
        .collect()
}

fn bucket_index(record: &AttendanceRecord, window: &DateWindow, period: Period) -> usize {
    match period {
        Period::Weekly => weekday_index(record.viewed_at),
        Period::Monthly => {
            // Weeks are Monday-aligned relative to the week containing the
            // window's first day, so week 1 may begin in the prior month.
            let anchor = week_start(window.start.date_naive());
            let days = (record.viewed_at.date_naive() - anchor).num_days();
            (days / 7) as usize
        }
        Period::Yearly => record.viewed_at.date_naive().month0() as usize,
    }
}

fn bucket_label(index: usize, period: Period) -> String {
    match period {
        Period::Weekly => WEEKDAY_LABELS[index].to_string(),
        Period::Monthly => format!("Week {}", index + 1),
        Period::Yearly => MONTH_LABELS[index].to_string(),
    }
}

//! Period and date-window resolution.
//!
//! A statistics query always works on two windows: the current one
//! containing the anchor instant and the immediately preceding window of
//! the same calendar shape. Weeks start on Monday; months and years use
//! calendar-aware arithmetic, so the window before March is the full
//! month of February regardless of its length.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::StatsError;

/// Short weekday names, Monday first. Index matches [`weekday_index`].
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Short month names, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Granularity of a statistics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    /// Number of trend buckets for this period within `window`.
    ///
    /// Weekly and yearly are fixed (7 days, 12 months); monthly depends on
    /// how many Monday-aligned weeks intersect the window (4-6).
    pub fn bucket_count(&self, window: &DateWindow) -> usize {
        match self {
            Period::Weekly => 7,
            Period::Monthly => {
                let anchor = week_start(window.start.date_naive());
                let last = window.end.date_naive() - Duration::days(1);
                ((last - anchor).num_days() / 7) as usize + 1
            }
            Period::Yearly => 12,
        }
    }
}

impl FromStr for Period {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            other => Err(StatsError::InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `instant` falls inside the window. The end bound is exclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Window length in whole days.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Smallest window covering both `self` and `other`.
    pub fn union(&self, other: &DateWindow) -> DateWindow {
        DateWindow {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Resolve the `(current, previous)` window pair for a period and anchor.
///
/// - weekly: the Monday-aligned 7-day window containing `anchor`, and the
///   7 days before it
/// - monthly: the anchor's calendar month, and the full previous month
/// - yearly: the anchor's calendar year, and the full previous year
///
/// The two windows never overlap and `previous.end == current.start`.
pub fn resolve_windows(period: Period, anchor: DateTime<Utc>) -> (DateWindow, DateWindow) {
    let date = anchor.date_naive();

    match period {
        Period::Weekly => {
            let start = week_start(date);
            let current = window_between(start, start + Duration::days(7));
            let previous = window_between(start - Duration::days(7), start);
            (current, previous)
        }
        Period::Monthly => {
            let first = first_of_month(date.year(), date.month());
            let next_first = next_month(date.year(), date.month());
            let prev_first = previous_month(date.year(), date.month());
            let current = window_between(first, next_first);
            let previous = window_between(prev_first, first);
            (current, previous)
        }
        Period::Yearly => {
            let first = first_of_month(date.year(), 1);
            let current = window_between(first, first_of_month(date.year() + 1, 1));
            let previous = window_between(first_of_month(date.year() - 1, 1), first);
            (current, previous)
        }
    }
}

/// Monday-first weekday index (Mon=0 .. Sun=6).
pub fn weekday_index(instant: DateTime<Utc>) -> usize {
    instant.date_naive().weekday().num_days_from_monday() as usize
}

/// Short weekday name for an instant (see [`WEEKDAY_LABELS`]).
pub fn weekday_label(instant: DateTime<Utc>) -> &'static str {
    WEEKDAY_LABELS[weekday_index(instant)]
}

/// Monday of the week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn window_between(start: NaiveDate, end: NaiveDate) -> DateWindow {
    DateWindow::new(midnight(start), midnight(end))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month")
}

fn next_month(year: i32, month: u32) -> NaiveDate {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}

fn previous_month(year: i32, month: u32) -> NaiveDate {
    if month == 1 {
        first_of_month(year - 1, 12)
    } else {
        first_of_month(year, month - 1)
    }
}

//! Window aggregation and categorical tallying.
//!
//! Everything here is a pure function of the record slice and the window;
//! nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;
use crate::time::{weekday_label, DateWindow};

/// Bucket label for records whose category value is missing or blank.
/// Such records are counted like any other, never dropped.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Categorical dimension a tally groups by.
///
/// Grouping is driven by this tag rather than by field-name dispatch, so
/// every dimension shares one tallying path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupField {
    Genre,
    Companion,
    Area,
    Weekday,
}

impl GroupField {
    /// Bucket label for one record. Missing or blank values map to
    /// [`UNKNOWN_LABEL`]; the weekday dimension is always present.
    fn label_for(&self, record: &AttendanceRecord) -> String {
        match self {
            GroupField::Genre => non_blank(record.genre.as_deref()),
            GroupField::Companion => non_blank(Some(record.companion.as_str())),
            GroupField::Area => non_blank(record.area.as_deref()),
            GroupField::Weekday => weekday_label(record.viewed_at).to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

/// One bucket of a categorical tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub label: String,
    pub count: usize,
    /// Share of the window total, as a percentage. 0 when the total is 0.
    pub percentage: f64,
}

/// Counts per category label, in first-seen order.
///
/// Insertion order is part of the contract: when two labels tie on count,
/// [`CategoricalTally::top`] returns whichever was encountered first, so
/// the highlight label is deterministic for a given record ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoricalTally {
    entries: Vec<TallyEntry>,
}

impl CategoricalTally {
    /// Build a tally from pre-filtered records.
    fn from_records<'a, I>(records: I, field: GroupField) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut tally = CategoricalTally::default();
        for record in records {
            tally.bump(field.label_for(record));
        }
        tally.finalize();
        tally
    }

    fn bump(&mut self, label: String) {
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(TallyEntry {
                label,
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    fn finalize(&mut self) {
        let total = self.total();
        for entry in &mut self.entries {
            entry.percentage = if total == 0 {
                0.0
            } else {
                entry.count as f64 / total as f64 * 100.0
            };
        }
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all bucket counts; equals the number of tallied records.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn count_for(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Entry with the highest count. Ties resolve to the first-seen label.
    pub fn top(&self) -> Option<&TallyEntry> {
        let mut best: Option<&TallyEntry> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best
    }
}

/// Counts, rating average, and per-dimension tallies for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub count: usize,
    /// Arithmetic mean rating of the window's records; 0.0 when empty.
    pub average_rating: f64,
    pub by_genre: CategoricalTally,
    pub by_companion: CategoricalTally,
    pub by_area: CategoricalTally,
}

/// Aggregate the records whose viewing instant falls within `window`.
pub fn aggregate(records: &[AttendanceRecord], window: &DateWindow) -> Aggregation {
    let in_window: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| window.contains(r.viewed_at))
        .collect();

    let count = in_window.len();
    let average_rating = if count == 0 {
        0.0
    } else {
        in_window.iter().map(|r| r.rating as f64).sum::<f64>() / count as f64
    };

    Aggregation {
        count,
        average_rating,
        by_genre: CategoricalTally::from_records(in_window.iter().copied(), GroupField::Genre),
        by_companion: CategoricalTally::from_records(
            in_window.iter().copied(),
            GroupField::Companion,
        ),
        by_area: CategoricalTally::from_records(in_window.iter().copied(), GroupField::Area),
    }
}

/// Tally one categorical dimension over the records within `window`.
pub fn tally(
    records: &[AttendanceRecord],
    window: &DateWindow,
    field: GroupField,
) -> CategoricalTally {
    CategoricalTally::from_records(
        records.iter().filter(|r| window.contains(r.viewed_at)),
        field,
    )
}

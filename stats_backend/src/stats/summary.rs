//! Comparison summary between the current and previous windows.

use serde::{Deserialize, Serialize};

use super::aggregate::{Aggregation, CategoricalTally};

/// Highlight label reported when the current window has no records.
pub const NO_HIGHLIGHT: &str = "none";

/// Headline numbers comparing the current window against the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub current_count: usize,
    /// `current - previous`; negative when attendance dropped.
    pub change_count: i64,
    /// Change relative to the previous window, in percent. Defined as 0
    /// when the previous count is 0: a jump from nothing is reported as
    /// no baseline rather than infinite growth.
    pub change_percentage: f64,
    /// Mean rating over the current window; 0.0 when empty.
    pub average_rating: f64,
    /// Most frequent label of the designated highlight dimension,
    /// [`NO_HIGHLIGHT`] when the window is empty.
    pub special_info: String,
    /// True only for a strictly positive change.
    pub is_increase: bool,
}

/// Compose the summary from both window aggregates and the tally chosen
/// as the highlight dimension (genre unless the caller picked another).
pub fn compose(
    current: &Aggregation,
    previous: &Aggregation,
    highlight: &CategoricalTally,
) -> StatisticsSummary {
    let change_count = current.count as i64 - previous.count as i64;
    let change_percentage = if previous.count == 0 {
        0.0
    } else {
        change_count as f64 / previous.count as f64 * 100.0
    };

    StatisticsSummary {
        current_count: current.count,
        change_count,
        change_percentage,
        average_rating: current.average_rating,
        special_info: highlight
            .top()
            .map(|entry| entry.label.clone())
            .unwrap_or_else(|| NO_HIGHLIGHT.to_string()),
        is_increase: change_count > 0,
    }
}

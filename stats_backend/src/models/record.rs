use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single attendance entry: one performance the user went to see.
///
/// Records are owned by the record store; the statistics engine only
/// reads them. Optional fields (`area`, `venue`, `genre`, `poster_url`)
/// may be absent depending on what the catalog provided at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: i64,
    /// Catalog identifier of the performance.
    pub performance_id: String,
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    /// Instant the performance was seen, not just the calendar day.
    pub viewed_at: DateTime<Utc>,
    /// Star rating, 1-5 by convention. Out-of-range values are tolerated
    /// and averaged as-is rather than rejected.
    pub rating: i32,
    #[serde(default)]
    pub seat: String,
    /// Free-form companion text ("solo", "friends", ...). Empty means unknown.
    #[serde(default)]
    pub companion: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub memo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

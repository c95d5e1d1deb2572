//! Calendar period handling.
//!
//! All instants in this crate are `chrono::DateTime<Utc>`; windows are
//! half-open `[start, end)` ranges derived from a statistics period and
//! an anchor instant.

pub mod window;

pub use window::{
    resolve_windows, weekday_index, weekday_label, DateWindow, Period, MONTH_LABELS,
    WEEKDAY_LABELS,
};

pub(crate) use window::week_start;

//! Domain models shared across the statistics engine.

pub mod record;

pub use record::AttendanceRecord;

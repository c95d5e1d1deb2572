//! Record store abstraction.
//!
//! The statistics engine never persists anything itself; it reads
//! attendance records through the [`RecordStore`] trait and treats any
//! store failure as fatal for the current query. Retry policy belongs to
//! the store implementation, not to this crate.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for store operations
//! - [`local`]: In-memory implementation for unit testing and local development
//! - [`config`]: TOML configuration for selecting and seeding a backend

pub mod config;
pub mod error;
pub mod local;

pub use config::{StoreBackend, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use local::LocalRecordStore;

use async_trait::async_trait;

use crate::models::AttendanceRecord;
use crate::time::DateWindow;

/// Read-only provider of attendance records for a date range.
///
/// Implementations may be backed by a local database, a sync service, or
/// the in-memory [`LocalRecordStore`]. A statistics query performs exactly
/// one `fetch_records` call and computes everything else from the
/// returned snapshot.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Check whether the underlying storage is reachable.
    async fn health_check(&self) -> StoreResult<bool>;

    /// Fetch all records whose viewing instant lies in `range`
    /// (half-open, end exclusive), ordered by viewing instant.
    async fn fetch_records(&self, range: &DateWindow) -> StoreResult<Vec<AttendanceRecord>>;
}

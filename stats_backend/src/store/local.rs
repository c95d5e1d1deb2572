//! In-memory local record store implementation.
//!
//! This module provides a local implementation of [`RecordStore`] suitable
//! for unit testing and local development. All records live in memory,
//! giving fast, deterministic, and isolated execution. Records can also be
//! seeded from a JSON file exported by the persistence layer.

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::models::AttendanceRecord;
use crate::store::config::StoreConfig;
use crate::store::{RecordStore, StoreError, StoreResult};
use crate::time::DateWindow;

/// In-memory local record store.
///
/// # Example
/// ```
/// use curtaincall_stats::store::{LocalRecordStore, RecordStore};
///
/// # async fn example() {
/// let store = LocalRecordStore::new();
/// assert!(store.health_check().await.unwrap());
/// # }
/// ```
#[derive(Clone, Default)]
pub struct LocalRecordStore {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    records: Vec<AttendanceRecord>,

    // ID counter
    next_record_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_record_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRecordStore {
    /// Create a new empty local store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a configuration file's records path.
    /// An empty or missing path yields an empty store.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        config.backend()?;

        if config.local.records_path.is_empty() {
            return Ok(Self::new());
        }
        Self::from_json_file(&config.local.records_path)
    }

    /// Load a store from a JSON file containing an array of records.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::ConfigurationError(format!("Failed to read records file: {}", e))
        })?;

        let store = Self::new();
        store.load_json_str(&content)?;
        Ok(store)
    }

    /// Insert records parsed from a JSON array string.
    ///
    /// # Returns
    /// The number of records inserted.
    pub fn load_json_str(&self, json: &str) -> StoreResult<usize> {
        let records: Vec<AttendanceRecord> = serde_json::from_str(json).map_err(|e| {
            StoreError::ValidationError(format!("Failed to parse records JSON: {}", e))
        })?;

        let count = records.len();
        for record in records {
            self.insert_record(record);
        }
        Ok(count)
    }

    /// Add a record to the store.
    ///
    /// This is a helper method for setting up data; the record's `id` is
    /// overwritten with a store-assigned one.
    ///
    /// # Returns
    /// The ID assigned to the record
    pub fn insert_record(&self, mut record: AttendanceRecord) -> i64 {
        let mut data = self.data.write().unwrap();
        let record_id = data.next_record_id;
        data.next_record_id += 1;

        record.id = record_id;
        data.records.push(record);
        record_id
    }

    /// Look up a single record by its store-assigned ID.
    pub fn get_record(&self, record_id: i64) -> StoreResult<AttendanceRecord> {
        let data = self.data.read().unwrap();
        data.records
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Record {} not found", record_id)))
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all records from the store.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of records stored.
    pub fn record_count(&self) -> usize {
        self.data.read().unwrap().records.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> StoreResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(StoreError::ConnectionError(
                "Record store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for LocalRecordStore {
    async fn health_check(&self) -> StoreResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn fetch_records(&self, range: &DateWindow) -> StoreResult<Vec<AttendanceRecord>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut records: Vec<AttendanceRecord> = data
            .records
            .iter()
            .filter(|r| range.contains(r.viewed_at))
            .cloned()
            .collect();

        // Stable order by viewing instant, then insertion id.
        records.sort_by_key(|r| (r.viewed_at, r.id));
        Ok(records)
    }
}

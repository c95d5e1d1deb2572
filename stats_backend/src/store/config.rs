//! Record store configuration file support.
//!
//! This module provides utilities for reading store configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;

/// Record store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub local: LocalSettings,
}

/// Store backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

/// Local backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSettings {
    /// Path to a JSON array of attendance records used to seed the store.
    /// Empty means start empty.
    #[serde(default)]
    pub records_path: String,
}

/// Record store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory store, optionally seeded from JSON
    Local,
}

impl StoreBackend {
    /// Parse a backend tag from its configuration string.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if successful
    /// * `Err(StoreError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load store configuration from the default location.
    ///
    /// Searches for `attendance.toml` in:
    /// 1. Current directory
    /// 2. `stats_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if found and parsed successfully
    /// * `Err(StoreError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = vec![
            PathBuf::from("attendance.toml"),
            PathBuf::from("stats_backend/attendance.toml"),
            PathBuf::from("../attendance.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::ConfigurationError(
            "No attendance.toml found in standard locations".to_string(),
        ))
    }

    /// Get the configured backend.
    pub fn backend(&self) -> Result<StoreBackend, StoreError> {
        StoreBackend::parse(&self.store.store_type)
            .map_err(|e| StoreError::ConfigurationError(format!("Invalid store type: {}", e)))
    }
}

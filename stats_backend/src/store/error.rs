//! Error types for record store operations.

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for record store operations.
///
/// Every variant here is something a store backend can actually report:
/// an unreachable backend, a missing record, malformed seed data, or a
/// bad configuration. Statistics queries wrap any of these unmodified as
/// `DataUnavailable`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

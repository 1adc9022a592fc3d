//! Error types for session storage.

use thiserror::Error;

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while opening or persisting a session store.
///
/// Reads through [`crate::SessionRepository`] never fail; these errors only
/// surface when opening a durable store or are logged by write-through
/// persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored state could not be serialized or deserialized.
    #[error("storage serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

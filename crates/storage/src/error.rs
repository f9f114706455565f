//! Storage error model.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of the underlying slot.
///
/// Consumers that hold session state (cart, login flag) absorb these and
/// degrade to their empty default rather than surfacing them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

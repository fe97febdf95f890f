//! Typed error enum for the service layer.
//!
//! Catalog failures never reach callers (they degrade to empty listings), so
//! only storage and input failures are represented here.

use bookstall_core::CoreError;
use bookstall_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and validation failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank id or user id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Domain value rejected (e.g. a misconfigured price range).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether the persistence layer itself failed.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unavailable())
    }

    /// Whether the caller sent something unusable.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Core(CoreError::InvalidInput(_)))
    }
}

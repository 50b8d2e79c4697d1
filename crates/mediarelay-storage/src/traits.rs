//! Storage abstraction trait
//!
//! This module defines the `ObjectSource` trait that all storage backends implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Read access to objects in any bucket.
///
/// Constructed once at startup and shared by every invocation; implementations
/// hold no per-object state.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    /// Fetch the full body of `key` in `bucket`.
    ///
    /// Returns `StorageError::NotFound` when the object does not exist.
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes>;


    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

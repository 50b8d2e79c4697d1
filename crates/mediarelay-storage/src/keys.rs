//! Key validation for filesystem-backed storage.

use crate::traits::{StorageError, StorageResult};

/// Reject keys that could escape a bucket's directory.
///
/// Keys must be non-empty, must not start with `/` and must not contain `..`.
/// Bucket names follow the same rule and must not contain `/`.
pub fn validate_object_path(bucket: &str, key: &str) -> StorageResult<()> {
    if bucket.is_empty() || bucket.contains('/') || bucket.contains("..") {
        return Err(StorageError::InvalidKey(format!(
            "Invalid bucket name: {:?}",
            bucket
        )));
    }

    if key.is_empty() || key.starts_with('/') || key.contains("..") {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }

    Ok(())
}

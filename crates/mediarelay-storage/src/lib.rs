//! Mediarelay Storage Library
//!
//! This crate provides the read side of object storage for mediarelay: the
//! `ObjectSource` trait and its S3, local filesystem and in-memory backends.
//!
//! # Object addressing
//!
//! Objects are addressed by `(bucket, key)`, exactly as storage notifications
//! name them. Keys must not contain `..` or a leading `/`; validation is
//! centralized in the `keys` module so all backends reject the same keys.

pub mod factory;
#[cfg(feature = "storage-local")]
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-memory")]
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use mediarelay_core::StorageBackend;
#[cfg(feature = "storage-memory")]
pub use memory::MemoryStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{ObjectSource, StorageError, StorageResult};

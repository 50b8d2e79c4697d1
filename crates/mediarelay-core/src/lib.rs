//! Mediarelay Core Library
//!
//! This crate provides the domain model, error taxonomy, configuration and the
//! job-settings specialization logic shared by all mediarelay components. It
//! performs no I/O: fetching templates and submitting jobs live in the storage,
//! transcoder and worker crates.

pub mod config;
pub mod error;
pub mod models;
pub mod output_group;
pub mod source;
pub mod specialize;
pub mod storage_types;

// Re-export commonly used types
pub use config::{validate_env, Config, LogFormat};
pub use error::{DispatchError, ErrorMetadata, ErrorScope, LogLevel};
pub use models::{JobMetadata, JobTemplate, NotificationEnvelope, StorageObjectRef};
pub use output_group::{resolve_settings_key, OutputGroupType};
pub use source::SourceObject;
pub use specialize::{output_base, specialize};
pub use storage_types::StorageBackend;

//! Domain models
//!
//! Typed views of the three documents the dispatcher handles: the queue
//! notification envelope, the per-tenant job template and the metadata tagged
//! onto every submitted job.

pub mod metadata;
pub mod notification;
pub mod template;

pub use metadata::JobMetadata;
pub use notification::{NotificationEnvelope, StorageEventRecord, StorageObjectRef};
pub use template::{DestinationSettings, JobInput, JobTemplate, OutputGroup, OutputGroupSettings};

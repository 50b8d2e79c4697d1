//! Mediarelay Worker Library
//!
//! Turns batches of queue-delivered storage notifications into transcoding
//! jobs: the template loader fetches a tenant's job template, the dispatcher
//! specializes and submits it, one record at a time.

pub mod dispatch;
pub mod loader;
pub mod report;

pub use dispatch::{Dispatcher, DispatcherConfig, QueueMessage};
pub use loader::TemplateLoader;
pub use report::{BatchReport, RecordOutcome, RecordStage, StatusResult};

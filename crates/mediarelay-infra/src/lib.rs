//! Mediarelay Infrastructure Library
//!
//! Shared process-level plumbing for mediarelay binaries:
//! - Telemetry initialization (tracing subscriber)

pub mod telemetry;

pub use telemetry::{init_telemetry, shutdown_telemetry};

//! Telemetry initialization
//!
//! Installs the global `tracing` subscriber once per process.

mod init_basic;

pub use init_basic::{init_telemetry, shutdown_telemetry};

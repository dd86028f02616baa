// Sensorwatch Library - Public API

// Re-export error types
pub mod error;
pub use error::{MonitorError, Result};

// Module declarations
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::config::MonitorConfig;
pub use crate::core::state_monitor::{Sample, StateMonitor};

// Initialize logging (RUST_LOG overrides the default level)
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

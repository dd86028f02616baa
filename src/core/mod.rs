// Core business logic module

pub mod config;
pub mod dispatch;
pub mod state_monitor;
pub mod status;

// Re-export commonly used items
pub use config::MonitorConfig;
pub use dispatch::{DeliveryMethod, DispatchOutcome, Dispatcher};
pub use state_monitor::{Sample, StateMonitor};

//! Stateful alerting over per-cycle sensor samples.
//!
//! The scheduler hands each new [`Sample`] to [`StateMonitor::execute`]. The
//! monitor compares it with the previous one, formats any alert and passes it
//! to the configured dispatcher.

pub mod checks;
mod formatter;
mod runner;
pub mod sample;
mod shared;
mod window;

pub use checks::{run_check, CheckKind, CheckStates, ConnectivityState};
pub use formatter::MessageFormatter;
pub use runner::{CheckFailure, CycleReport, FiredAlert, StateMonitor};
pub use sample::{keys, Reading, Sample, Value};
pub use shared::SharedMonitor;
pub use window::SampleWindow;

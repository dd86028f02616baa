//! Check registry.
//!
//! Each check compares the current sample against the previous one and
//! returns an alert message when its condition has just been entered.
//! Checks that need memory across cycles get an explicit state record.

mod battery;
mod connectivity;
mod device_fault;
mod power;
mod storage;

use std::fmt;

use crate::core::config::Thresholds;
use crate::core::state_monitor::sample::Sample;
use crate::error::Result;

pub use battery::{check_battery, BATTERY_SAFETY_MARGIN};
pub use connectivity::{check_connectivity, ConnectivityState};
pub use device_fault::{check_device_fault, CRITICAL_LED_STATE};
pub use power::{check_power, load_power};
pub use storage::check_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Power,
    Connectivity,
    Storage,
    Battery,
    DeviceFault,
}

impl CheckKind {
    /// Every check, in evaluation order
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Power,
        CheckKind::Connectivity,
        CheckKind::Storage,
        CheckKind::Battery,
        CheckKind::DeviceFault,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Power => "power",
            CheckKind::Connectivity => "connectivity",
            CheckKind::Storage => "storage",
            CheckKind::Battery => "battery",
            CheckKind::DeviceFault => "device_fault",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-check state carried across cycles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckStates {
    pub connectivity: ConnectivityState,
}

/// Run a single check
pub fn run_check(
    kind: CheckKind,
    current: &Sample,
    previous: &Sample,
    thresholds: &Thresholds,
    states: &mut CheckStates,
) -> Result<Option<String>> {
    match kind {
        CheckKind::Power => check_power(current, previous, thresholds),
        CheckKind::Connectivity => {
            check_connectivity(current, thresholds, &mut states.connectivity)
        }
        CheckKind::Storage => check_storage(current, previous, thresholds),
        CheckKind::Battery => check_battery(current, previous),
        CheckKind::DeviceFault => check_device_fault(current, previous),
    }
}

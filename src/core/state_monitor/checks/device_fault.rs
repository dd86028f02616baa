//! Charge controller fault detection from its LED state.

use crate::core::state_monitor::sample::{keys, Sample};
use crate::error::Result;

/// LED states at or above this value indicate a critical fault
pub const CRITICAL_LED_STATE: f64 = 12.0;

/// Fires whenever the LED state changes to a value at or above the floor
pub fn check_device_fault(current: &Sample, previous: &Sample) -> Result<Option<String>> {
    let state_now = current.number(keys::LED_STATE)?;
    let state_pre = previous.number(keys::LED_STATE)?;

    if state_now >= CRITICAL_LED_STATE && state_now != state_pre {
        return Ok(Some(format!(
            "Critical failure with charge controller. LED state: {}.",
            state_now
        )));
    }
    Ok(None)
}

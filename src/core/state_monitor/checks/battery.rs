//! Battery voltage approaching the low voltage disconnect.

use crate::core::state_monitor::sample::{keys, Sample};
use crate::error::Result;

/// Volts above the disconnect setting at which the battery is critical
pub const BATTERY_SAFETY_MARGIN: f64 = 0.5;

/// Fires once when the battery falls to within the safety margin of the
/// disconnect voltage. The disconnect setting is read from the current sample.
pub fn check_battery(current: &Sample, previous: &Sample) -> Result<Option<String>> {
    let critical = current.number(keys::LOW_VOLTAGE_DISCONNECT)? + BATTERY_SAFETY_MARGIN;
    let batt_now = current.number(keys::BATTERY_VOLTAGE)?;
    let batt_pre = previous.number(keys::BATTERY_VOLTAGE)?;

    if batt_now <= critical && batt_pre > critical {
        return Ok(Some(format!(
            "Battery voltage critically low {:.3} (critical {:.3})",
            batt_now, critical
        )));
    }
    Ok(None)
}

//! Load power drop detection.

use crate::core::config::Thresholds;
use crate::core::state_monitor::sample::{keys, Sample};
use crate::error::Result;

/// Power drawn by the load (V x A)
pub fn load_power(sample: &Sample) -> Result<f64> {
    let voltage = sample.number(keys::LOAD_VOLTAGE)?;
    let current = sample.number(keys::LOAD_CURRENT)?;
    Ok(voltage * current)
}

/// Fires once when power crosses downward through `power_delim`
pub fn check_power(
    current: &Sample,
    previous: &Sample,
    thresholds: &Thresholds,
) -> Result<Option<String>> {
    let power_now = load_power(current)?;
    let power_pre = load_power(previous)?;

    if power_now < thresholds.power_delim && power_pre > thresholds.power_delim {
        return Ok(Some(format!(
            "Power has dropped from {:.2} to {:.2}.",
            power_pre, power_now
        )));
    }
    Ok(None)
}

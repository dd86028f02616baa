//! Remaining storage headroom.

use crate::core::config::Thresholds;
use crate::core::state_monitor::sample::{keys, Sample};
use crate::error::Result;

/// Fires once when remaining space crosses downward through `low_space`
pub fn check_storage(
    current: &Sample,
    previous: &Sample,
    thresholds: &Thresholds,
) -> Result<Option<String>> {
    let unit = thresholds.space_unit;
    let space_now = unit.of_bytes(current.number(keys::BYTES_REMAINING)?);
    let space_pre = unit.of_bytes(previous.number(keys::BYTES_REMAINING)?);

    if space_now < thresholds.low_space && space_pre > thresholds.low_space {
        return Ok(Some(format!(
            "Remaining {} on drive is {:.1}",
            unit.label(),
            space_now
        )));
    }
    Ok(None)
}

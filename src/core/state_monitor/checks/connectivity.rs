//! Debounced sensor reachability.

use crate::core::config::Thresholds;
use crate::core::state_monitor::sample::{keys, Sample};
use crate::error::Result;

/// Consecutive ping failures seen by the connectivity check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectivityState {
    failures: u32,
}

impl ConnectivityState {
    pub fn failures(&self) -> u32 {
        self.failures
    }
}

/// Count consecutive failed pings and alert once when the count reaches
/// `ping_max`. Any successful ping resets the count.
///
/// An unavailable ping reading is neither a failure nor a success: the
/// count is left as it is.
pub fn check_connectivity(
    current: &Sample,
    thresholds: &Thresholds,
    state: &mut ConnectivityState,
) -> Result<Option<String>> {
    let ping = current.number(keys::PING)?;
    if ping.is_nan() {
        log::debug!(
            "Ping reading unavailable, keeping failure count at {}",
            state.failures
        );
        return Ok(None);
    }

    if ping == 0.0 {
        if state.failures > 0 {
            log::info!(
                "Sensor reachable again after {} failed ping(s)",
                state.failures
            );
        }
        state.failures = 0;
        return Ok(None);
    }

    state.failures = state.failures.saturating_add(1);

    if state.failures == 1 {
        log::warn!("Unable to reach sensor (ping returned {})", ping);
    }

    if state.failures == thresholds.ping_max {
        return Ok(Some(format!(
            "No communication with sensor! {} consecutive pings failed.",
            state.failures
        )));
    }
    Ok(None)
}

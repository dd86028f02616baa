//! Ad-hoc status messages sent outside the monitoring cycle.

use crate::core::state_monitor::MessageFormatter;

const OFFLINE_BANNER: &str = "************* OFFLINE *************";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusMessage {
    pub status: Option<String>,
    pub battery: Option<String>,
    pub offline: bool,
}

impl StatusMessage {
    pub fn hello() -> Self {
        Self {
            status: Some("Hello World".to_string()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.battery.is_none() && !self.offline
    }

    /// Body lines below the sensor header
    pub fn body(&self) -> String {
        let mut lines = Vec::new();
        if self.offline {
            lines.push(OFFLINE_BANNER.to_string());
        }
        if let Some(status) = &self.status {
            lines.push(format!("Status: {}", status));
        }
        if let Some(battery) = &self.battery {
            lines.push(format!("Battery Voltage: {}", battery));
        }
        lines.join("\n")
    }

    pub fn render(&self, formatter: &MessageFormatter) -> String {
        formatter.format(&self.body())
    }
}

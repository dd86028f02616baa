//! Message header with the sensor's identity.

use crate::core::config::Identity;

#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    identity: Identity,
}

impl MessageFormatter {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Sensor name with its two-digit unit number, e.g. `ttbd07`
    pub fn sensor_name(&self) -> Option<String> {
        match (&self.identity.name, self.identity.number) {
            (Some(name), Some(number)) => Some(format!("{}{:02}", name, number)),
            (Some(name), None) => Some(name.clone()),
            (None, Some(number)) => Some(format!("{:02}", number)),
            (None, None) => None,
        }
    }

    /// Header line, empty when no identity is configured
    pub fn header(&self) -> String {
        let site = self
            .identity
            .site_description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        match (self.sensor_name(), site) {
            (Some(name), Some(site)) => format!("Message from sensor {} at {}", name, site),
            (Some(name), None) => format!("Message from sensor {}", name),
            (None, Some(site)) => format!("Message from sensor at {}", site),
            (None, None) => String::new(),
        }
    }

    /// Prefix a raw check message with the header line
    pub fn format(&self, message: &str) -> String {
        let header = self.header();
        if header.is_empty() {
            message.to_string()
        } else {
            format!("{}\n{}", header, message)
        }
    }
}

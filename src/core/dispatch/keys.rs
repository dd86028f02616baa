//! Credential file mapping channel names to webhook paths.
//!
//! One table per delivery method:
//!
//! ```toml
//! [slack]
//! testing = "T000/B000/XXXX"
//!
//! [googlechat]
//! alerts = "AAAA/messages?key=K&token=T"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::DeliveryMethod;
use crate::error::{MonitorError, Result};

#[derive(Debug, Clone, Default)]
pub struct KeyFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl KeyFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a key file. Entries that are not channel strings are skipped
    /// with a warning, so unrelated tables can live in the same file.
    pub fn parse(text: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        let mut sections = HashMap::new();

        for (name, value) in table {
            let entries = match value {
                toml::Value::Table(entries) => entries,
                other => {
                    log::warn!(
                        "Ignoring top-level key '{}' in key file ({} is not a table)",
                        name,
                        other.type_str()
                    );
                    continue;
                }
            };

            let mut channels = HashMap::new();
            for (channel, path) in entries {
                match path {
                    toml::Value::String(path) => {
                        channels.insert(channel, path);
                    }
                    other => log::warn!(
                        "Ignoring key '{}.{}' in key file ({} is not a string)",
                        name,
                        channel,
                        other.type_str()
                    ),
                }
            }
            sections.insert(name, channels);
        }

        Ok(Self { sections })
    }

    /// Webhook path for `channel` in the section of `method`
    pub fn lookup(&self, method: DeliveryMethod, channel: &str) -> Option<&str> {
        method
            .section_names()
            .iter()
            .filter_map(|section| self.sections.get(*section))
            .find_map(|channels| channels.get(channel))
            .map(String::as_str)
    }

    /// All channels configured for `method`
    pub fn channels(&self, method: DeliveryMethod) -> HashMap<String, String> {
        let mut channels = HashMap::new();
        for section in method.section_names() {
            if let Some(entries) = self.sections.get(*section) {
                for (name, path) in entries {
                    channels.entry(name.clone()).or_insert_with(|| path.clone());
                }
            }
        }
        channels
    }

    /// Like [`KeyFile::channels`], but an empty section is an init error
    pub fn require_channels(&self, method: DeliveryMethod) -> Result<HashMap<String, String>> {
        let channels = self.channels(method);
        if channels.is_empty() {
            return Err(MonitorError::backend_init(
                method.name(),
                format!("key file has no [{}] section", method.name()),
            ));
        }
        Ok(channels)
    }
}

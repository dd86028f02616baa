use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::dispatch::DeliveryMethod;
use crate::error::{MonitorError, Result};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    #[serde(default, rename = "monitor")]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub sender: SenderConfig,
    #[serde(default)]
    pub identity: Identity,
}

/// Thresholds used by the checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Power (W) below which the load is considered dropped
    pub power_delim: f64,
    /// Remaining storage, in `space_unit`, below which space is low
    pub low_space: f64,
    pub space_unit: SpaceUnit,
    /// Consecutive ping failures before alerting
    pub ping_max: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            power_delim: 1.0,
            low_space: 100.0,
            space_unit: SpaceUnit::GB,
            ping_max: 3,
        }
    }
}

/// Decimal storage units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceUnit {
    B,
    KB,
    MB,
    #[default]
    GB,
    TB,
}

impl SpaceUnit {
    pub fn bytes(&self) -> f64 {
        match self {
            SpaceUnit::B => 1.0,
            SpaceUnit::KB => 1e3,
            SpaceUnit::MB => 1e6,
            SpaceUnit::GB => 1e9,
            SpaceUnit::TB => 1e12,
        }
    }

    pub fn of_bytes(&self, bytes: f64) -> f64 {
        bytes / self.bytes()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpaceUnit::B => "B",
            SpaceUnit::KB => "KB",
            SpaceUnit::MB => "MB",
            SpaceUnit::GB => "GB",
            SpaceUnit::TB => "TB",
        }
    }
}

/// Delivery backend selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SenderConfig {
    /// `none`, `slack` or `googlechat`; unset means log only
    pub method: Option<String>,
    pub channel: Option<String>,
    pub key_file: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            method: None,
            channel: None,
            key_file: None,
            timeout_secs: 10,
        }
    }
}

impl SenderConfig {
    /// Parsed delivery method, `None` when alerts are only logged
    pub fn delivery_method(&self) -> Result<Option<DeliveryMethod>> {
        match self.method.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(m) if m.eq_ignore_ascii_case("none") => Ok(None),
            Some(m) => m.parse().map(Some),
        }
    }

    /// Key file path with a leading `~/` expanded
    pub fn resolved_key_file(&self) -> Option<PathBuf> {
        self.key_file.as_deref().map(expand_home)
    }
}

/// Static sensor identity used in message headers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Identity {
    pub name: Option<String>,
    pub number: Option<u32>,
    pub site_description: Option<String>,
}

impl MonitorConfig {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: MonitorConfig =
            toml::from_str(text).map_err(|e| MonitorError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sensorwatch").join("config.toml"))
    }

    /// Reject settings the monitor cannot run with
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !t.power_delim.is_finite() || t.power_delim < 0.0 {
            return Err(MonitorError::config(format!(
                "power_delim must be a non-negative number, got {}",
                t.power_delim
            )));
        }
        if !t.low_space.is_finite() || t.low_space < 0.0 {
            return Err(MonitorError::config(format!(
                "low_space must be a non-negative number, got {}",
                t.low_space
            )));
        }
        // The first cycle has no prior sample, so a single failed ping must
        // not be enough to alert.
        if t.ping_max < 2 {
            return Err(MonitorError::config(format!(
                "ping_max must be at least 2, got {}",
                t.ping_max
            )));
        }
        if self.sender.timeout_secs == 0 {
            return Err(MonitorError::config("timeout_secs must be at least 1"));
        }
        self.sender.delivery_method()?;
        Ok(())
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

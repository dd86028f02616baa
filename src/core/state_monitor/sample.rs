//! Per-cycle sample of named readings handed over by the acquisition stage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{MonitorError, Result};

/// Payload that marks a reading as unavailable
pub const UNAVAILABLE: &str = "NA";

/// Stable reading names produced by the acquisition stage
pub mod keys {
    /// Load voltage (V)
    pub const LOAD_VOLTAGE: &str = "adc_vl_f";
    /// Load current (A)
    pub const LOAD_CURRENT: &str = "adc_il_f";
    /// Nonzero when the sensor could not be pinged
    pub const PING: &str = "ping";
    /// Remaining storage (bytes)
    pub const BYTES_REMAINING: &str = "bytes_remaining";
    /// Low voltage disconnect setting (V)
    pub const LOW_VOLTAGE_DISCONNECT: &str = "v_lvd";
    /// Battery voltage (V)
    pub const BATTERY_VOLTAGE: &str = "adc_vb_f";
    /// Charge controller LED state / fault code
    pub const LED_STATE: &str = "led_state";
}

/// A single reading as decoded by the acquisition stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Reading {
    Number(f64),
    Text(String),
    Unavailable,
}

/// Reading value after the unavailable marker has been normalized away
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<i32> for Reading {
    fn from(value: i32) -> Self {
        Reading::Number(value as f64)
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Reading::Number(value as f64)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        if value == UNAVAILABLE {
            Reading::Unavailable
        } else {
            Reading::Text(value.to_string())
        }
    }
}

impl TryFrom<serde_json::Value> for Reading {
    type Error = String;

    fn try_from(value: serde_json::Value) -> std::result::Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Reading::Unavailable),
            serde_json::Value::Bool(b) => Ok(Reading::Number(if b { 1.0 } else { 0.0 })),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Reading::Number)
                .ok_or_else(|| format!("unrepresentable number: {}", n)),
            serde_json::Value::String(s) => Ok(Reading::from(s.as_str())),
            other => Err(format!("unsupported reading payload: {}", other)),
        }
    }
}

impl From<Reading> for serde_json::Value {
    fn from(reading: Reading) -> Self {
        match reading {
            Reading::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(UNAVAILABLE.to_string())),
            Reading::Text(s) => serde_json::Value::String(s),
            Reading::Unavailable => serde_json::Value::String(UNAVAILABLE.to_string()),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{}", n),
            Reading::Text(s) => write!(f, "{}", s),
            Reading::Unavailable => write!(f, "{}", UNAVAILABLE),
        }
    }
}

/// One cycle's set of named readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    readings: BTreeMap<String, Reading>,
}

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a sample from a JSON object
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builder-style insert, mostly for constructing samples by hand
    pub fn with<K: Into<String>, R: Into<Reading>>(mut self, key: K, reading: R) -> Self {
        self.insert(key, reading);
        self
    }

    pub fn insert<K: Into<String>, R: Into<Reading>>(&mut self, key: K, reading: R) {
        self.readings.insert(key.into(), reading.into());
    }

    pub fn get(&self, key: &str) -> Option<&Reading> {
        self.readings.get(key)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Extract a named value.
    ///
    /// An unavailable reading comes back as `NaN`, so ordering comparisons
    /// against it are simply false. A key absent from the sample is an error.
    pub fn value(&self, key: &str) -> Result<Value> {
        match self.readings.get(key) {
            Some(Reading::Number(n)) => Ok(Value::Number(*n)),
            Some(Reading::Text(s)) => Ok(Value::Text(s.clone())),
            Some(Reading::Unavailable) => Ok(Value::Number(f64::NAN)),
            None => Err(MonitorError::missing_reading(key)),
        }
    }

    /// Extract a named numeric value, see [`Sample::value`]
    pub fn number(&self, key: &str) -> Result<f64> {
        match self.value(key)? {
            Value::Number(n) => Ok(n),
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| MonitorError::NonNumericReading {
                    key: key.to_string(),
                    value: s,
                }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Reading)> for Sample {
    fn from_iter<I: IntoIterator<Item = (K, Reading)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }
}

/// Compact `{key: value, ...}` snapshot used in diagnostic log lines
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, reading)) in self.readings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, reading)?;
        }
        write!(f, "}}")
    }
}

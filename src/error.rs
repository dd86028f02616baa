use std::io;
use thiserror::Error;

/// Error type for the state monitor
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to initialize {method} sender: {reason}")]
    BackendInit { method: String, reason: String },

    #[error("Missing reading: {0}")]
    MissingReading(String),

    #[error("Reading {key} is not numeric: {value}")]
    NonNumericReading { key: String, value: String },

    #[error("Delivery via {backend} failed: {reason}")]
    Delivery { backend: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for the state monitor
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MonitorError::Config(msg.into())
    }

    /// Create a backend initialization error
    pub fn backend_init<M: Into<String>, S: Into<String>>(method: M, reason: S) -> Self {
        MonitorError::BackendInit {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Create a delivery error
    pub fn delivery<B: Into<String>, S: Into<String>>(backend: B, reason: S) -> Self {
        MonitorError::Delivery {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_reading<S: Into<String>>(key: S) -> Self {
        MonitorError::MissingReading(key.into())
    }

    /// Short, stable name of the error class, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            MonitorError::Config(_) => "ConfigurationError",
            MonitorError::BackendInit { .. } => "BackendInitError",
            MonitorError::MissingReading(_) | MonitorError::NonNumericReading { .. } => {
                "ReadingError"
            }
            MonitorError::Delivery { .. } | MonitorError::Http(_) => "DeliveryError",
            MonitorError::Io(_) => "IoError",
            MonitorError::Json(_) => "JsonError",
            MonitorError::Toml(_) => "TomlError",
        }
    }

    /// Whether this error comes from a missing or unusable reading
    pub fn is_reading_error(&self) -> bool {
        self.kind() == "ReadingError"
    }
}

//! Outbound alert delivery.
//!
//! A [`Dispatcher`] owns at most one [`AlertSender`]. Senders are selected by
//! [`DeliveryMethod`] when the dispatcher is built; if the sender cannot be
//! built the dispatcher degrades to log-only instead of failing startup.

pub mod google_chat;
pub mod keys;
pub mod slack;
mod webhook;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::core::config::SenderConfig;
use crate::error::{MonitorError, Result};

pub use google_chat::GoogleChatSender;
pub use keys::KeyFile;
pub use slack::SlackSender;
pub use webhook::join_url;

/// Supported delivery backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    Slack,
    GoogleChat,
}

impl DeliveryMethod {
    pub fn name(&self) -> &'static str {
        match self {
            DeliveryMethod::Slack => "slack",
            DeliveryMethod::GoogleChat => "googlechat",
        }
    }

    /// Key file sections accepted for this method, in lookup order
    pub fn section_names(&self) -> &'static [&'static str] {
        match self {
            DeliveryMethod::Slack => &["slack", "channel"],
            DeliveryMethod::GoogleChat => &["googlechat", "gchat"],
        }
    }
}

impl FromStr for DeliveryMethod {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slack" => Ok(DeliveryMethod::Slack),
            "googlechat" | "google_chat" | "gchat" => Ok(DeliveryMethod::GoogleChat),
            other => Err(MonitorError::config(format!(
                "unknown delivery method '{}' (expected none, slack or googlechat)",
                other
            ))),
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A delivery backend: send one formatted message to one channel
pub trait AlertSender: Send {
    fn name(&self) -> &'static str;

    /// Whether the backend knows how to reach `channel`
    fn has_channel(&self, channel: &str) -> bool;

    fn send(&self, channel: &str, text: &str) -> Result<()>;
}

/// What happened to a dispatched message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    /// No backend configured; the message was only logged
    LogOnly,
    Failed,
}

pub struct Dispatcher {
    sender: Option<Box<dyn AlertSender>>,
    channel: String,
}

impl Dispatcher {
    pub fn log_only() -> Self {
        Self {
            sender: None,
            channel: String::new(),
        }
    }

    pub fn with_sender<S: Into<String>>(sender: Box<dyn AlertSender>, channel: S) -> Self {
        Self {
            sender: Some(sender),
            channel: channel.into(),
        }
    }

    /// Build the dispatcher described by `config`.
    ///
    /// Only an unknown method is an error. Any failure to build the backend
    /// itself is logged once and yields a log-only dispatcher.
    pub fn from_config(config: &SenderConfig) -> Result<Self> {
        let method = match config.delivery_method()? {
            Some(method) => method,
            None => {
                log::info!("No delivery method configured, alerts will only be logged");
                return Ok(Self::log_only());
            }
        };

        match build_sender(method, config) {
            Ok((sender, channel)) => {
                log::info!("Alerts will be sent via {} to channel '{}'", method, channel);
                Ok(Self::with_sender(sender, channel))
            }
            Err(e) => {
                log::error!(
                    "backend={} kind={} error=\"{}\" alerts will only be logged; is the key file in the right place?",
                    method,
                    e.kind(),
                    e
                );
                Ok(Self::log_only())
            }
        }
    }

    pub fn backend_name(&self) -> Option<&'static str> {
        self.sender.as_ref().map(|s| s.name())
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Deliver a message, propagating any failure
    pub fn deliver(&self, message: &str) -> Result<()> {
        match &self.sender {
            Some(sender) => sender.send(&self.channel, message),
            None => Err(MonitorError::backend_init(
                "none",
                "no delivery backend configured",
            )),
        }
    }

    /// Deliver a message; failures are logged and never propagated
    pub fn dispatch(&self, message: &str) -> DispatchOutcome {
        let sender = match &self.sender {
            Some(sender) => sender,
            None => return DispatchOutcome::LogOnly,
        };

        match sender.send(&self.channel, message) {
            Ok(()) => DispatchOutcome::Delivered,
            Err(e) => {
                log::error!(
                    "backend={} kind={} error=\"{}\" undelivered message: {:?}",
                    sender.name(),
                    e.kind(),
                    e,
                    message
                );
                DispatchOutcome::Failed
            }
        }
    }
}

fn build_sender(
    method: DeliveryMethod,
    config: &SenderConfig,
) -> Result<(Box<dyn AlertSender>, String)> {
    let key_file = config
        .resolved_key_file()
        .ok_or_else(|| MonitorError::backend_init(method.name(), "no key_file configured"))?;
    let channel = config
        .channel
        .clone()
        .ok_or_else(|| MonitorError::backend_init(method.name(), "no channel configured"))?;

    let keys = KeyFile::load(&key_file).map_err(|e| {
        MonitorError::backend_init(method.name(), format!("{:?}: {}", key_file, e))
    })?;

    let timeout = Duration::from_secs(config.timeout_secs);
    let sender: Box<dyn AlertSender> = match method {
        DeliveryMethod::Slack => Box::new(SlackSender::from_keys(&keys, timeout)?),
        DeliveryMethod::GoogleChat => Box::new(GoogleChatSender::from_keys(&keys, timeout)?),
    };

    if !sender.has_channel(&channel) {
        return Err(MonitorError::backend_init(
            method.name(),
            format!("channel '{}' not found in {:?}", channel, key_file),
        ));
    }

    Ok((sender, channel))
}

//! Blocking JSON webhook client shared by the chat senders.

use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{MonitorError, Result};

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

/// Posts `{"text": ...}` to a webhook resolved from a channel name
pub struct WebhookClient {
    backend: &'static str,
    base_url: &'static str,
    channels: HashMap<String, String>,
    client: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new(
        backend: &'static str,
        base_url: &'static str,
        channels: HashMap<String, String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("sensorwatch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::backend_init(backend, e.to_string()))?;

        Ok(Self {
            backend,
            base_url,
            channels,
            client,
        })
    }

    pub fn has_channel(&self, channel: &str) -> bool {
        self.channels.contains_key(channel)
    }

    /// Full webhook URL for a channel
    pub fn url_for(&self, channel: &str) -> Result<String> {
        let path = self.channels.get(channel).ok_or_else(|| {
            MonitorError::delivery(self.backend, format!("unknown channel '{}'", channel))
        })?;
        Ok(join_url(self.base_url, path))
    }

    /// Deliver one message; only an HTTP 200 counts as success
    pub fn post(&self, channel: &str, text: &str) -> Result<()> {
        let url = self.url_for(channel)?;

        log::debug!("backend={} channel={} posting message", self.backend, channel);

        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/json; charset=UTF-8",
            )
            .json(&TextPayload { text })
            .send()
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("request timed out: {}", e)
                } else {
                    e.to_string()
                };
                MonitorError::delivery(self.backend, reason)
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(MonitorError::delivery(
                self.backend,
                format!(
                    "webhook returned status {}: {}",
                    status,
                    response.text().unwrap_or_default()
                ),
            ));
        }

        Ok(())
    }
}

/// Join a webhook path to its base URL; absolute URLs are kept as-is
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

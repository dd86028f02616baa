//! Slack incoming-webhook sender.

use std::path::Path;
use std::time::Duration;

use super::keys::KeyFile;
use super::webhook::WebhookClient;
use super::{AlertSender, DeliveryMethod};
use crate::error::Result;

const SLACK_BASE_URL: &str = "https://hooks.slack.com/services/";

pub struct SlackSender {
    webhook: WebhookClient,
}

impl SlackSender {
    /// Create a sender from the `[slack]` section of a key file
    pub fn from_key_file(key_file: &Path, timeout: Duration) -> Result<Self> {
        let keys = KeyFile::load(key_file)?;
        Self::from_keys(&keys, timeout)
    }

    pub fn from_keys(keys: &KeyFile, timeout: Duration) -> Result<Self> {
        let channels = keys.require_channels(DeliveryMethod::Slack)?;
        Ok(Self {
            webhook: WebhookClient::new("slack", SLACK_BASE_URL, channels, timeout)?,
        })
    }
}

impl AlertSender for SlackSender {
    fn name(&self) -> &'static str {
        "slack"
    }

    fn has_channel(&self, channel: &str) -> bool {
        self.webhook.has_channel(channel)
    }

    fn send(&self, channel: &str, text: &str) -> Result<()> {
        self.webhook.post(channel, text)
    }
}

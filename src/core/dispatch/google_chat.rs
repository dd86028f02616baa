//! Google Chat space webhook sender.

use std::path::Path;
use std::time::Duration;

use super::keys::KeyFile;
use super::webhook::WebhookClient;
use super::{AlertSender, DeliveryMethod};
use crate::error::Result;

const GOOGLE_CHAT_BASE_URL: &str = "https://chat.googleapis.com/v1/spaces/";

pub struct GoogleChatSender {
    webhook: WebhookClient,
}

impl GoogleChatSender {
    /// Create a sender from the `[googlechat]` (or `[gchat]`) section of a key file
    pub fn from_key_file(key_file: &Path, timeout: Duration) -> Result<Self> {
        let keys = KeyFile::load(key_file)?;
        Self::from_keys(&keys, timeout)
    }

    pub fn from_keys(keys: &KeyFile, timeout: Duration) -> Result<Self> {
        let channels = keys.require_channels(DeliveryMethod::GoogleChat)?;
        Ok(Self {
            webhook: WebhookClient::new("googlechat", GOOGLE_CHAT_BASE_URL, channels, timeout)?,
        })
    }
}

impl AlertSender for GoogleChatSender {
    fn name(&self) -> &'static str {
        "googlechat"
    }

    fn has_channel(&self, channel: &str) -> bool {
        self.webhook.has_channel(channel)
    }

    fn send(&self, channel: &str, text: &str) -> Result<()> {
        self.webhook.post(channel, text)
    }
}

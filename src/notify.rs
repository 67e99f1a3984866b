use crate::prelude::*;

use serde::Serialize;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Posts status messages to the configured webhook.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: config.webhook_url().to_string(),
        }
    }

    /// Best-effort delivery: failures are logged and swallowed so a dead
    /// webhook can never abort a discharge run.
    pub async fn send(&self, message: &str) {
        let result = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { content: message })
            .send()
            .await;

        match result {
            Ok(_) => debug!("webhook message sent"),
            Err(err) => warn!("failed to send webhook message: {}", err),
        }
    }
}

use crate::prelude::*;

pub static DEFAULT_API_URL: &str = "https://www.soliscloud.com:13333";

/// Process-wide configuration, built once at startup and passed into each
/// component. Nothing reads the environment after this.
#[derive(Clone, Debug)]
pub struct Config {
    api_url: String,
    api_key: String,
    api_secret: String,
    inverter_sn: String,
    webhook_url: String,
}

impl Config {
    pub fn new(
        api_url: String,
        api_key: String,
        api_secret: String,
        inverter_sn: String,
        webhook_url: String,
    ) -> Self {
        Self {
            api_url,
            api_key,
            api_secret,
            inverter_sn,
            webhook_url,
        }
    }

    /// Reads credentials from the environment, failing fast when any is
    /// missing. An absent `SOLIS_API_URL` falls back to the production host.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            std::env::var("SOLIS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            require("API_KEY")?,
            require("API_SECRET")?,
            require("INVERTER_SN")?,
            require("DISCORD_WEBHOOK_URL")?,
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn inverter_sn(&self) -> &str {
        &self.inverter_sn
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

fn require(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(anyhow!("required environment variable {} is not set", name)),
    }
}

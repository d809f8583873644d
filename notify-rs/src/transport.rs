//! Outbound email transport

use crate::config::EmailConfig;
use crate::error::{NotifyError, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

/// One rendered email ready for submission.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Port for submitting rendered emails. The dispatcher only depends on
/// "accepts an HTML body and a recipient, returns ok/not-ok".
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}

/// Production transport: JSON POST to the provider endpoint with a bearer
/// API key.
pub struct HttpEmailTransport {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpEmailTransport {
    /// Fails fast when no API key is configured; a dispatch run without one
    /// would only discover the problem per recipient.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NotifyError::Config(
                "email API key is not configured".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl EmailTransport for HttpEmailTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Transport(format!(
                "email API returned {}: {}",
                status, body
            )));
        }

        debug!("Delivered email to {}", email.to);
        Ok(())
    }
}

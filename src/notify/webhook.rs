// src/notify/webhook.rs
use super::event::NotificationEvent;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to send webhook notification: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Webhook returned status {status}: {body}")]
    Status { status: u16, body: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Posts `{"text": ...}` to a single webhook. No timeout and no retries.
pub struct WebhookNotifier {
    webhook_url: Url,
    client: Client,
}

impl WebhookNotifier {
    pub fn new(webhook_url: Url) -> Self {
        Self {
            webhook_url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(&WebhookPayload { text: &event.text })
            .send()
            .await?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read webhook response body: {}", e);
                String::new()
            }
        };
        info!("Webhook notification {:?}: {} {}", event.kind, status.as_u16(), body);

        if !status.is_success() {
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

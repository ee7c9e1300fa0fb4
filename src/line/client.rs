//! Reply delivery through the LINE Messaging API

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

/// Reply tokens are short-lived
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reply delivery failure
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("messaging API rejected reply ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Outbound channel for bot replies
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Deliver `text` as the answer to the event identified by `reply_token`
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), DeliveryError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: [TextMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    message_type: &'static str,
    text: &'a str,
}

/// Reply API client authenticated with the channel access token
pub struct LineMessagingClient {
    client: Client,
    access_token: String,
    endpoint: String,
}

impl LineMessagingClient {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(access_token: String, endpoint: String) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            access_token,
            endpoint,
        })
    }
}

#[async_trait]
impl ReplySender for LineMessagingClient {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), DeliveryError> {
        let request = ReplyRequest {
            reply_token,
            messages: [TextMessage {
                message_type: "text",
                text,
            }],
        };

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            duration_ms = %start.elapsed().as_millis(),
            "Reply delivered"
        );
        Ok(())
    }
}

//! Webhook payload types

use serde::Deserialize;

/// Body of a webhook delivery
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    /// Bot user id the delivery is addressed to
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One webhook event. Only the fields the bot needs are modelled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// A text message that the dialogue engine should answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundText {
    pub user_id: String,
    pub text: String,
    pub reply_token: String,
}

impl WebhookEvent {
    /// Extract a text message with a user and a reply token, if this is one
    pub fn text_message(&self) -> Option<InboundText> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }
        Some(InboundText {
            user_id: self.source.as_ref()?.user_id.clone()?,
            text: message.text.clone()?,
            reply_token: self.reply_token.clone()?,
        })
    }
}

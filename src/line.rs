//! LINE Messaging API integration
//!
//! Webhook signature verification, webhook payload types, and the reply
//! client used to deliver bot answers.

mod client;
mod signature;
mod types;

#[allow(unused_imports)] // DeliveryError is named by test doubles
pub use client::{DeliveryError, LineMessagingClient, ReplySender, DEFAULT_REPLY_ENDPOINT};
pub use signature::SignatureVerifier;
pub use types::WebhookPayload;

/// Header carrying the webhook body signature
pub const SIGNATURE_HEADER: &str = "x-line-signature";

//! Webhook signature verification
//!
//! LINE signs each webhook body with HMAC-SHA256 keyed by the channel secret
//! and sends the base64 digest in the `X-Line-Signature` header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ring::hmac;
use subtle::ConstantTimeEq;

/// Webhook signature validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureValidation {
    Valid,
    Invalid,
    /// Signature header is missing
    Missing,
}

impl SignatureValidation {
    pub fn is_valid(self) -> bool {
        self == SignatureValidation::Valid
    }
}

/// Validates webhook signatures against the channel secret
pub struct SignatureVerifier {
    key: hmac::Key,
}

impl SignatureVerifier {
    pub fn new(channel_secret: &str) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, channel_secret.as_bytes()),
        }
    }

    /// Base64 signature LINE would send for `body`
    pub fn sign(&self, body: &[u8]) -> String {
        STANDARD.encode(hmac::sign(&self.key, body).as_ref())
    }

    /// Validate the signature header against the raw request body
    pub fn verify(&self, signature_header: Option<&str>, body: &[u8]) -> SignatureValidation {
        let Some(signature) = signature_header else {
            return SignatureValidation::Missing;
        };

        let expected = self.sign(body);

        // Constant-time comparison to prevent timing attacks
        if signature.trim().as_bytes().ct_eq(expected.as_bytes()).into() {
            SignatureValidation::Valid
        } else {
            SignatureValidation::Invalid
        }
    }
}

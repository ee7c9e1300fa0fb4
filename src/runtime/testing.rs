//! Mock implementations for testing
//!
//! These mocks enable integration testing without real I/O.

use super::traits::*;
use crate::line::{DeliveryError, ReplySender};
use crate::state_machine::DialogueState;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// ============================================================================
// Failing Session Store
// ============================================================================

/// In-memory store that can be switched into a failing mode
pub struct FailingSessionStore {
    inner: InMemorySessionStore,
    failing: AtomicBool,
}

impl FailingSessionStore {
    /// Starts out failing every call
    pub fn new() -> Self {
        Self {
            inner: InMemorySessionStore::new(),
            failing: AtomicBool::new(true),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn load(&self, user_id: &str) -> Result<Option<DialogueState>, StoreError> {
        self.check()?;
        self.inner.load(user_id).await
    }

    async fn save(&self, user_id: &str, state: &DialogueState) -> Result<(), StoreError> {
        self.check()?;
        self.inner.save(user_id, state).await
    }
}

// ============================================================================
// Recording Reply Sender
// ============================================================================

/// Reply sender that records every delivery instead of calling LINE
#[derive(Default)]
pub struct RecordingReplySender {
    sent: Mutex<Vec<(String, String)>>,
    reject: AtomicBool,
}

impl RecordingReplySender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every delivery with a 400 from the messaging API
    pub fn rejecting() -> Self {
        let sender = Self::default();
        sender.reject.store(true, Ordering::SeqCst);
        sender
    }

    /// `(reply_token, text)` pairs in delivery order
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingReplySender {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), DeliveryError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected {
                status: 400,
                body: "Invalid reply token".to_string(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((reply_token.to_string(), text.to_string()));
        Ok(())
    }
}

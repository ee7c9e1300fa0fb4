//! Per-user session runtime
//!
//! One task per user drains that user's inbox, so messages from the same user
//! are applied strictly one after another in arrival order.

use super::traits::{SessionStore, StoreError};
use crate::state_machine::{transition, DialogueState, Effect, Event};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// A message waiting to be processed, with the channel for its reply
#[derive(Debug)]
pub struct Inbound {
    pub text: String,
    pub reply_tx: oneshot::Sender<Result<String, StoreError>>,
}

/// Runtime owning one user's dialogue
pub struct SessionRuntime<S>
where
    S: SessionStore + ?Sized + 'static,
{
    user_id: String,
    store: Arc<S>,
    inbox: mpsc::Receiver<Inbound>,
}

impl<S> SessionRuntime<S>
where
    S: SessionStore + ?Sized + 'static,
{
    pub fn new(user_id: String, store: Arc<S>, inbox: mpsc::Receiver<Inbound>) -> Self {
        Self {
            user_id,
            store,
            inbox,
        }
    }

    pub async fn run(mut self) {
        tracing::debug!(user_id = %self.user_id, "Starting session runtime");

        while let Some(Inbound { text, reply_tx }) = self.inbox.recv().await {
            let outcome = self.process_message(&text).await;
            if let Err(e) = &outcome {
                tracing::error!(user_id = %self.user_id, error = %e, "Failed to process message");
            }
            // Receiver gone means the caller stopped waiting; nothing to deliver
            let _ = reply_tx.send(outcome);
        }

        tracing::debug!(user_id = %self.user_id, "Session runtime stopped");
    }

    async fn process_message(&self, text: &str) -> Result<String, StoreError> {
        let state = match self.store.load(&self.user_id).await? {
            Some(state) => state,
            None => {
                // First contact: the session exists from now on
                let state = DialogueState::default();
                self.persist(&state).await?;
                state
            }
        };
        let event = Event::from_message(text);
        if let Event::Command(command) = &event {
            tracing::debug!(user_id = %self.user_id, ?command, "Global command");
        }

        // Pure state transition
        let result = transition(&state, event);
        tracing::debug!(
            user_id = %self.user_id,
            mode = result.new_state.mode.name(),
            step = ?result.new_state.step(),
            persist = result.persists(),
            "Transition computed"
        );

        if result.new_state.mode != state.mode {
            tracing::info!(
                user_id = %self.user_id,
                from = state.mode.name(),
                to = result.new_state.mode.name(),
                "Dialogue mode changed"
            );
        }

        let mut reply = None;
        for effect in result.effects {
            match effect {
                Effect::PersistState => self.persist(&result.new_state).await?,
                Effect::Reply { text } => reply = Some(text),
            }
        }

        Ok(reply.unwrap_or_default())
    }

    async fn persist(&self, state: &DialogueState) -> Result<(), StoreError> {
        self.store.save(&self.user_id, state).await
    }
}

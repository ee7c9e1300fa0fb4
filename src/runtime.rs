//! Dialogue engine
//!
//! Routes each inbound message to its user's [`SessionRuntime`] task and
//! returns the reply. Users are independent; messages for one user are
//! serialized through that user's inbox.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::SessionRuntime;
pub use traits::*;

use crate::catalog;
use executor::Inbound;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, RwLock};

/// Per-user inbox capacity. Runtimes and their inboxes live until the process
/// exits; only a runtime that has stopped is dropped from the map.
const INBOX_CAPACITY: usize = 32;

/// Errors surfaced by the engine before they are turned into a fallback reply
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("session runtime for {0} is unavailable")]
    SessionUnavailable(String),
}

/// Reply that has been queued but not produced yet
pub struct PendingReply {
    user_id: String,
    rx: oneshot::Receiver<Result<String, StoreError>>,
}

impl PendingReply {
    /// Wait for the session runtime to answer
    pub async fn recv(self) -> Result<String, RuntimeError> {
        match self.rx.await {
            Ok(result) => Ok(result?),
            Err(_) => Err(RuntimeError::SessionUnavailable(self.user_id)),
        }
    }
}

/// Entry point of the dialogue core. Owns the session store.
pub struct DialogueEngine<S>
where
    S: SessionStore + ?Sized + 'static,
{
    store: Arc<S>,
    inboxes: RwLock<HashMap<String, mpsc::Sender<Inbound>>>,
}

impl<S> DialogueEngine<S>
where
    S: SessionStore + ?Sized + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            inboxes: RwLock::new(HashMap::new()),
        }
    }

    /// Handle one message and return exactly one reply.
    ///
    /// Never fails: internal errors are logged and answered with the generic
    /// fallback text.
    pub async fn handle(&self, user_id: &str, text: &str) -> String {
        let outcome = match self.submit(user_id, text).await {
            Ok(pending) => pending.recv().await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Falling back to default reply");
                if matches!(e, RuntimeError::SessionUnavailable(_)) {
                    self.discard(user_id).await;
                }
                catalog::unrecognized_command()
            }
        }
    }

    /// Queue a message behind any earlier ones from the same user.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::SessionUnavailable`] if the user's runtime has
    /// stopped.
    pub async fn submit(&self, user_id: &str, text: &str) -> Result<PendingReply, RuntimeError> {
        let inbox = self.get_or_spawn(user_id).await;
        let (reply_tx, rx) = oneshot::channel();

        inbox
            .send(Inbound {
                text: text.to_string(),
                reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::SessionUnavailable(user_id.to_string()))?;

        Ok(PendingReply {
            user_id: user_id.to_string(),
            rx,
        })
    }

    /// Number of users with a running session runtime
    #[allow(dead_code)] // Used by tests
    pub async fn active_sessions(&self) -> usize {
        self.inboxes.read().await.len()
    }

    async fn get_or_spawn(&self, user_id: &str) -> mpsc::Sender<Inbound> {
        // Check if already running
        {
            let inboxes = self.inboxes.read().await;
            if let Some(tx) = inboxes.get(user_id).filter(|tx| !tx.is_closed()) {
                return tx.clone();
            }
        }

        let mut inboxes = self.inboxes.write().await;
        // Another caller may have spawned it while we waited for the lock
        if let Some(tx) = inboxes.get(user_id).filter(|tx| !tx.is_closed()) {
            return tx.clone();
        }

        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
        let runtime = SessionRuntime::new(user_id.to_string(), Arc::clone(&self.store), rx);
        tokio::spawn(runtime.run());
        inboxes.insert(user_id.to_string(), tx.clone());

        tracing::info!(user_id = %user_id, "Spawned session runtime");
        tx
    }

    /// Drop a broken runtime so the next message starts a fresh one
    async fn discard(&self, user_id: &str) {
        let mut inboxes = self.inboxes.write().await;
        if inboxes.get(user_id).is_some_and(mpsc::Sender::is_closed) {
            inboxes.remove(user_id);
        }
    }
}

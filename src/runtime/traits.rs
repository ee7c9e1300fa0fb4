//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the engine with mock implementations.

use crate::state_machine::DialogueState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Session store failure
#[derive(Debug, Clone, Error)]
#[error("session store error: {0}")]
pub struct StoreError(pub String);

/// Storage for per-user dialogue state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the state for a user, `None` if the user has never written one
    async fn load(&self, user_id: &str) -> Result<Option<DialogueState>, StoreError>;

    /// Replace the state for a user
    async fn save(&self, user_id: &str, state: &DialogueState) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn load(&self, user_id: &str) -> Result<Option<DialogueState>, StoreError> {
        (**self).load(user_id).await
    }

    async fn save(&self, user_id: &str, state: &DialogueState) -> Result<(), StoreError> {
        (**self).save(user_id, state).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Process-lifetime session store. Entries are never evicted.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, DialogueState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored state
    #[allow(dead_code)] // Useful for tests
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, user_id: &str) -> Result<Option<DialogueState>, StoreError> {
        Ok(self.sessions.read().await.get(user_id).copied())
    }

    async fn save(&self, user_id: &str, state: &DialogueState) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(user_id.to_string(), *state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::Mode;

    #[tokio::test]
    async fn test_in_memory_store_round_trip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load("u1").await.unwrap(), None);

        let state = DialogueState {
            mode: Mode::ExerciseMenu,
            health_data: None,
        };
        store.save("u1", &state).await.unwrap();
        assert_eq!(store.load("u1").await.unwrap(), Some(state));
        assert_eq!(store.load("u2").await.unwrap(), None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_state() {
        let store = InMemorySessionStore::new();
        store
            .save("u1", &DialogueState { mode: Mode::ExerciseMenu, health_data: None })
            .await
            .unwrap();
        store.save("u1", &DialogueState::default()).await.unwrap();
        assert_eq!(store.load("u1").await.unwrap(), Some(DialogueState::default()));
        assert_eq!(store.len().await, 1);
    }
}

//! Effects produced by state transitions

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the new state to the session store
    PersistState,

    /// Send a text reply to the user
    Reply { text: String },
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply { text: text.into() }
    }
}

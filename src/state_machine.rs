//! Per-user dialogue state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions: the
//! runtime feeds an [`Event`] and the current [`DialogueState`] into
//! [`transition`] and executes the returned [`Effect`]s.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{DialogueState, HealthData, IntakeStep, Mode};
pub use transition::transition;

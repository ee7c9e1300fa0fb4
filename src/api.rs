//! HTTP API
//!
//! `POST /webhook` receives LINE deliveries; `GET /version` reports the build.

mod handlers;
mod types;

pub use handlers::create_router;

use crate::line::{ReplySender, SignatureVerifier};
use crate::runtime::{DialogueEngine, SessionStore};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DialogueEngine<dyn SessionStore>>,
    pub verifier: Arc<SignatureVerifier>,
    pub replier: Arc<dyn ReplySender>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SessionStore>,
        verifier: SignatureVerifier,
        replier: Arc<dyn ReplySender>,
    ) -> Self {
        Self {
            engine: Arc::new(DialogueEngine::new(store)),
            verifier: Arc::new(verifier),
            replier,
        }
    }
}

//! Health Butler - LINE health data assistant
//!
//! A Rust backend running a per-user dialogue state machine that collects
//! body metrics, computes BMI/BMR and answers with diet and exercise plans.

mod api;
mod catalog;
mod config;
mod line;
mod metrics;
mod runtime;
mod state_machine;

use api::{create_router, AppState};
use config::Config;
use line::{LineMessagingClient, SignatureVerifier};
use runtime::InMemorySessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_butler=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env()?;
    tracing::info!(config = ?config, "Configuration loaded");

    let replier = LineMessagingClient::new(
        config.channel_access_token.clone(),
        config.reply_endpoint.clone(),
    )?;

    // Create application state
    let state = AppState::new(
        Arc::new(InMemorySessionStore::new()),
        SignatureVerifier::new(&config.channel_secret),
        Arc::new(replier),
    );

    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Health Butler listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP request handlers

use super::types::{ErrorResponse, VersionResponse};
use super::AppState;
use crate::line::{WebhookPayload, SIGNATURE_HEADER};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // LINE webhook
        .route("/webhook", post(webhook))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Webhook
// ============================================================

/// Verify, parse and answer a webhook delivery.
///
/// Events are handled one after another so replies go out in event order.
async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    let validation = state.verifier.verify(signature, &body);
    if !validation.is_valid() {
        tracing::warn!(?validation, "Rejected webhook delivery");
        return Err(AppError::BadRequest("Invalid signature".to_string()));
    }

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid payload: {e}")))?;

    tracing::debug!(
        destination = ?payload.destination,
        events = payload.events.len(),
        "Webhook received"
    );

    for event in &payload.events {
        let Some(inbound) = event.text_message() else {
            tracing::debug!(
                event_type = %event.event_type,
                source = ?event.source.as_ref().map(|s| s.source_type.as_str()),
                "Skipping non-text event"
            );
            continue;
        };

        let reply = state.engine.handle(&inbound.user_id, &inbound.text).await;

        if let Err(e) = state.replier.reply(&inbound.reply_token, &reply).await {
            tracing::error!(user_id = %inbound.user_id, error = %e, "Failed to deliver reply");
        }
    }

    Ok("OK")
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

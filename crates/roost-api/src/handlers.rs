//! Route handler functions.
//!
//! Each handler extracts its request body via axum extractors, calls into
//! the assistant core, and returns JSON responses.

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use roost_assist::ResponseEnvelope;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

/// Request body for POST /api/bot/chat.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The raw user utterance.
    pub message: String,
    /// Acting user, if the frontend has one in session.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// POST /api/bot/chat - classify one message and dispatch its intent.
///
/// Every handled outcome (including classification failures and reminder
/// write failures, which degrade to conversational replies) is HTTP 200;
/// only a listing store that cannot be read surfaces as 500.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    info!(user_id = ?body.user_id, "Chat message received");

    // The clock is taken per request so relative time expressions resolve
    // against the moment of the message.
    let envelope = state
        .assistant
        .handle_message(&body.message, body.user_id.as_deref(), Local::now())
        .await?;

    Ok(Json(envelope))
}

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

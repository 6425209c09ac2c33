//! Route handler functions for the conversation API.
//!
//! Request and response bodies use camelCase keys (`sessionId`,
//! `customTopic`) to match the browser front end. Handlers are pure glue:
//! extract JSON, call the engine, map errors.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

// ─────────────────────────────────────────────
// Request types
// ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRequest {
    pub session_id: String,
    pub difficulty: Option<String>,
    pub custom_topic: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndRequest {
    pub session_id: String,
}

// ─────────────────────────────────────────────
// Response types
// ─────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicResponse {
    pub response: String,
}

/// `correction` is serialized as an explicit `null` when the message was
/// perfect — the front end checks the field, not its presence.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub correction: Option<String>,
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions: usize,
}

// ─────────────────────────────────────────────
// Handler functions
// ─────────────────────────────────────────────

/// POST /api/conversation/start - create a fresh session.
pub async fn start(State(state): State<AppState>) -> Json<StartResponse> {
    let session_id = state.engine.start_session();
    Json(StartResponse {
        session_id,
        message: "Session started".to_string(),
    })
}

/// POST /api/conversation/topic - open a conversation topic.
pub async fn topic(
    State(state): State<AppState>,
    Json(req): Json<TopicRequest>,
) -> Result<Json<TopicResponse>, ApiError> {
    let response = state
        .engine
        .start_topic(
            &req.session_id,
            req.difficulty.as_deref(),
            req.custom_topic.as_deref(),
        )
        .await?;

    Ok(Json(TopicResponse { response }))
}

/// POST /api/conversation/message - grammar check + contextual reply.
pub async fn message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let reply = state
        .engine
        .handle_message(&req.session_id, &req.message)
        .await?;

    Ok(Json(MessageResponse {
        correction: reply.correction,
        response: reply.response,
    }))
}

/// POST /api/conversation/end - end a session. Idempotent.
pub async fn end(
    State(state): State<AppState>,
    Json(req): Json<EndRequest>,
) -> Json<EndResponse> {
    state.engine.end_session(&req.session_id);
    Json(EndResponse {
        message: "Session ended".to_string(),
    })
}

/// GET /health - liveness and session count.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions: state.engine.session_count(),
    })
}

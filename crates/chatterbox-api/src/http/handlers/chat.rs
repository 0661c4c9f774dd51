//! Chat endpoint handlers: resolve, teach, delete.
//!
//! Bodies are taken as `Result<Json<_>, JsonRejection>` so that a missing
//! field, a wrong type or a non-JSON body becomes a 400 instead of axum's
//! plain-text rejection.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use chatterbox_types::chat::remove_all_message;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub input: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Request body for `POST /tech`.
#[derive(Debug, Deserialize)]
pub struct TeachRequest {
    pub input: String,
    pub response: String,
    /// Accepted for symmetry with `/chat`; replies are always stored in English.
    #[serde(default)]
    pub lang: Option<String>,
}

/// Request body for `DELETE /delete`.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub input: String,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct MessageReply {
    pub message: String,
}

/// POST /chat - Resolve a reply for the input.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7();
    let Json(body) = payload?;

    let lang = body.lang.as_deref().unwrap_or(state.default_lang());
    let response = state.chat_service.respond(&body.input, lang).await?;

    info!(
        %request_id,
        lang,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chat request handled"
    );
    Ok(Json(ChatReply { response }))
}

/// POST /tech - Teach a reply for the input.
pub async fn teach(
    State(state): State<AppState>,
    payload: Result<Json<TeachRequest>, JsonRejection>,
) -> Result<Json<MessageReply>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let Json(body) = payload?;
    debug!(%request_id, lang = ?body.lang, "Teach request received");

    let outcome = state
        .chat_service
        .teach(&body.input, &body.response)
        .await?;

    Ok(Json(MessageReply {
        message: outcome.message(&body.response),
    }))
}

/// DELETE /delete - Forget one reply, or the whole entry when `response` is absent or blank.
pub async fn delete(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<MessageReply>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let Json(body) = payload?;
    // A blank reply means "forget everything", same as omitting it.
    let response = body.response.as_deref().filter(|r| !r.trim().is_empty());
    debug!(%request_id, one = response.is_some(), "Delete request received");

    let message = match response {
        Some(response) => state
            .chat_service
            .forget_response(&body.input, response)
            .await?
            .message(&body.input, response),
        None => {
            let found = state.chat_service.forget_input(&body.input).await?;
            remove_all_message(&body.input, found)
        }
    };

    Ok(Json(MessageReply { message }))
}

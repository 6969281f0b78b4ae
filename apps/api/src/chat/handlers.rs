//! Axum route handler for the chat endpoint.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::chat::orchestrator::ChatReply;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/chat
///
/// Interprets the message, searches when it asks for jobs, and always answers
/// with a conversational reply. Vendor failures never surface as HTTP errors.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = state.chat.handle(&request.message).await;
    Ok(Json(reply))
}

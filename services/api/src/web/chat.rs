//! services/api/src/web/chat.rs
//!
//! HTTP handlers for the portfolio chatbot.

use crate::error::{ApiError, ErrorResponse};
use crate::web::{chat_task::chat_exchange, state::AppState, validation::require_text};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use portfolio_core::domain::ChatMessage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatMessageResponse {
    pub id: i32,
    /// `user` or `assistant`.
    pub role: String,
    /// May contain Markdown.
    pub content: String,
    pub timestamp: String,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id,
            role: m.role.to_string(),
            content: m.content,
            timestamp: m.timestamp,
        }
    }
}

/// Ask the portfolio chatbot a question.
///
/// Both the question and the answer are appended to the global chat log.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "The stored assistant reply", body = ChatMessageResponse),
        (status = 400, description = "Blank or malformed message", body = ErrorResponse),
        (status = 500, description = "Storage or completion provider failure", body = ErrorResponse)
    )
)]
pub async fn send_chat_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatMessageResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    require_text("message", &request.message, "Message is required")?;

    let reply = chat_exchange(&app_state, &request.message).await?;
    Ok(Json(reply.into()))
}

/// The full chat log in insertion order.
#[utoipa::path(
    get,
    path = "/api/chat/history",
    responses(
        (status = 200, description = "Every stored chat message", body = [ChatMessageResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn chat_history_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChatMessageResponse>>, ApiError> {
    let messages = app_state.chat_log.list_messages().await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

//! services/api/src/web/chat_task.rs
//!
//! The worker for a single chatbot exchange: log the question, assemble the
//! portfolio context, ask the completion provider, log the answer.

use crate::web::state::AppState;
use chrono::{SecondsFormat, Utc};
use portfolio_core::{
    build_instructions,
    domain::{ChatMessage, ChatRole, NewChatMessage},
    ports::PortResult,
    PortfolioContext,
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Request-time timestamp in the `2024-05-01T12:00:00.000Z` shape browsers produce.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Runs one exchange and returns the stored assistant message.
///
/// The user message is appended before anything else and stays in the log if a
/// later step fails. The provider is called at most once.
pub async fn chat_exchange(app_state: &AppState, message: &str) -> PortResult<ChatMessage> {
    let start_time = Instant::now();

    let question = app_state
        .chat_log
        .append_message(NewChatMessage {
            role: ChatRole::User,
            content: message.to_string(),
            timestamp: now_timestamp(),
        })
        .await?;
    info!(message_id = question.id, chars = message.chars().count(), "Chat question stored");

    let context = PortfolioContext::load(app_state.portfolio.as_ref()).await?;
    if context.is_empty() {
        warn!(message_id = question.id, "Portfolio is empty; answering without context");
    }
    let instructions = build_instructions(&context);

    let llm_start = Instant::now();
    let answer = app_state
        .completion
        .complete(&instructions, message)
        .await
        .map_err(|e| {
            error!(message_id = question.id, "Chat completion failed: {}", e);
            e
        })?;
    info!(
        elapsed = ?llm_start.elapsed(),
        instruction_chars = instructions.len(),
        "Chat completion received"
    );

    let reply = app_state
        .chat_log
        .append_message(NewChatMessage {
            role: ChatRole::Assistant,
            content: answer,
            timestamp: now_timestamp(),
        })
        .await?;
    info!(
        message_id = reply.id,
        elapsed = ?start_time.elapsed(),
        "Chat exchange complete"
    );

    Ok(reply)
}

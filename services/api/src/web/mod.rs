pub mod chat;
pub mod chat_task;
pub mod contact;
pub mod health;
pub mod rest;
pub mod state;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub use chat::{chat_history_handler, send_chat_handler};
pub use contact::submit_contact_handler;
pub use rest::{
    get_profile_handler, list_education_handler, list_experience_handler, list_projects_handler,
    list_skills_handler,
};
pub use state::AppState;

/// Builds the API router. Cross-cutting layers (CORS, tracing, docs) are added
/// by the binary.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio collections
        .route("/api/profile", get(get_profile_handler))
        .route("/api/skills", get(list_skills_handler))
        .route("/api/experience", get(list_experience_handler))
        .route("/api/projects", get(list_projects_handler))
        .route("/api/education", get(list_education_handler))
        // Chatbot
        .route("/api/chat", post(send_chat_handler))
        .route("/api/chat/history", get(chat_history_handler))
        // Contact form
        .route("/api/contact", post(submit_contact_handler))
        .with_state(app_state)
}

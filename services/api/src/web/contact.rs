//! services/api/src/web/contact.rs
//!
//! The contact-form endpoint. Delivery is delegated to the `ContactNotifier`.

use crate::error::{ApiError, ErrorResponse};
use crate::web::{
    state::AppState,
    validation::{require_email, require_text},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use portfolio_core::domain::ContactSubmission;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    fn validate(self) -> Result<ContactSubmission, ApiError> {
        require_text("name", &self.name, "Name is required")?;
        require_email("email", &self.email)?;
        require_text("message", &self.message, "Message is required")?;

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Submit the contact form.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission accepted", body = ContactResponse),
        (status = 400, description = "A field failed validation", body = ErrorResponse),
        (status = 500, description = "Delivery failed", body = ErrorResponse)
    )
)]
pub async fn submit_contact_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let submission = request.validate()?;

    app_state.contact.notify(&submission).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message received!".to_string(),
    }))
}

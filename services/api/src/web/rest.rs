//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the portfolio read endpoints, their response
//! payloads, and the master definition for the OpenAPI specification.

use crate::error::{ApiError, ErrorResponse};
use crate::web::chat::{ChatMessageResponse, ChatRequest};
use crate::web::contact::{ContactRequest, ContactResponse};
use crate::web::state::AppState;
use axum::{extract::State, response::Json};
use portfolio_core::domain::{Education, Experience, Profile, Project, Skill};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        get_profile_handler,
        list_skills_handler,
        list_experience_handler,
        list_projects_handler,
        list_education_handler,
        crate::web::chat::send_chat_handler,
        crate::web::chat::chat_history_handler,
        crate::web::contact::submit_contact_handler,
    ),
    components(
        schemas(
            ProfileResponse,
            SkillResponse,
            ExperienceResponse,
            ProjectResponse,
            EducationResponse,
            ChatRequest,
            ChatMessageResponse,
            ContactRequest,
            ContactResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Portfolio API", description = "Portfolio records, chatbot and contact form.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_links: BTreeMap<String, String>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            title: p.title,
            bio: p.bio,
            email: p.email,
            phone: p.phone,
            location: p.location,
            social_links: p.social_links,
        }
    }
}

/// `GET /api/profile` body: the profile, or `{}` when none is stored.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileBody {
    Found(ProfileResponse),
    Empty(EmptyObject),
}

#[derive(Debug, Serialize)]
pub struct EmptyObject {}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillResponse {
    pub id: i32,
    pub category: String,
    pub items: Vec<String>,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        Self {
            id: s.id,
            category: s.category,
            items: s.items,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id,
            title: e.title,
            company: e.company,
            duration: e.duration,
            description: e.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            tech_stack: p.tech_stack,
            link: p.link,
            github_link: p.github_link,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    pub id: i32,
    pub degree: String,
    pub school: String,
    pub year: String,
    pub gpa: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(e: Education) -> Self {
        Self {
            id: e.id,
            degree: e.degree,
            school: e.school,
            year: e.year,
            gpa: e.gpa,
        }
    }
}

fn into_responses<T, R: From<T>>(rows: Vec<T>) -> Json<Vec<R>> {
    Json(rows.into_iter().map(R::from).collect())
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Get the portfolio owner's profile.
///
/// Returns the first stored profile, or an empty object when none exists.
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "The profile, or `{}` when absent", body = ProfileResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profile_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<ProfileBody>, ApiError> {
    let body = match app_state.portfolio.get_profile().await? {
        Some(profile) => ProfileBody::Found(profile.into()),
        None => ProfileBody::Empty(EmptyObject {}),
    };
    Ok(Json(body))
}

/// List skill categories in insertion order.
#[utoipa::path(
    get,
    path = "/api/skills",
    responses(
        (status = 200, description = "All skill categories", body = [SkillResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_skills_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<SkillResponse>>, ApiError> {
    Ok(into_responses(app_state.portfolio.list_skills().await?))
}

/// List experience entries in insertion order.
#[utoipa::path(
    get,
    path = "/api/experience",
    responses(
        (status = 200, description = "All experience entries", body = [ExperienceResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_experience_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ExperienceResponse>>, ApiError> {
    Ok(into_responses(app_state.portfolio.list_experience().await?))
}

/// List projects in insertion order.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_projects_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    Ok(into_responses(app_state.portfolio.list_projects().await?))
}

/// List education entries in insertion order.
#[utoipa::path(
    get,
    path = "/api/education",
    responses(
        (status = 200, description = "All education entries", body = [EducationResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_education_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<EducationResponse>>, ApiError> {
    Ok(into_responses(app_state.portfolio.list_education().await?))
}

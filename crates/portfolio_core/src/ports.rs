//! crates/portfolio_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, keeping the core
//! independent of the concrete database, LLM provider and notification channel.

use async_trait::async_trait;

use crate::domain::{
    ChatMessage, ContactSubmission, Education, Experience, NewChatMessage, NewEducation,
    NewExperience, NewProfile, NewProject, NewSkill, Profile, Project, Skill,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Completion provider error: {0}")]
    Completion(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Read-mostly storage for the five portfolio entity collections.
///
/// Every `list_*` returns rows in insertion order. `create_*` returns the stored
/// record with its server-assigned id.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    // --- Profile ---
    /// Returns the first stored profile, or `None` when the table is empty.
    async fn get_profile(&self) -> PortResult<Option<Profile>>;

    async fn create_profile(&self, profile: NewProfile) -> PortResult<Profile>;

    // --- Skills ---
    async fn list_skills(&self) -> PortResult<Vec<Skill>>;

    async fn create_skill(&self, skill: NewSkill) -> PortResult<Skill>;

    /// Deletes every skill row. Irreversible.
    async fn clear_skills(&self) -> PortResult<()>;

    // --- Experience ---
    async fn list_experience(&self) -> PortResult<Vec<Experience>>;

    async fn create_experience(&self, experience: NewExperience) -> PortResult<Experience>;

    // --- Projects ---
    async fn list_projects(&self) -> PortResult<Vec<Project>>;

    async fn create_project(&self, project: NewProject) -> PortResult<Project>;

    // --- Education ---
    async fn list_education(&self) -> PortResult<Vec<Education>>;

    async fn create_education(&self, education: NewEducation) -> PortResult<Education>;
}

/// The global chat log. Append-only; there is no update or delete.
#[async_trait]
pub trait ChatLogStore: Send + Sync {
    async fn list_messages(&self) -> PortResult<Vec<ChatMessage>>;

    async fn append_message(&self, message: NewChatMessage) -> PortResult<ChatMessage>;
}

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Requests a single completion for `message` under the given system `instructions`.
    async fn complete(&self, instructions: &str, message: &str) -> PortResult<String>;
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Hands a contact-form submission to whatever delivers it (log, email, ...).
    async fn notify(&self, submission: &ContactSubmission) -> PortResult<()>;
}

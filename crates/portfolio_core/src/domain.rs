//! crates/portfolio_core/src/domain.rs
//!
//! Defines the pure, core data structures for the portfolio.
//! These structs are independent of any database or serialization format.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The portfolio owner's profile. Only the first stored row is ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Platform name (e.g. "github") to profile URL.
    pub social_links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_links: BTreeMap<String, String>,
}

/// A named bucket of skill labels, e.g. "Databases" -> ["PostgreSQL", "SQLite"].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub category: String,
    pub items: Vec<String>,
}

/// A work-history entry. `duration` is free text, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    /// Live deployment URL, if any.
    pub link: Option<String>,
    /// Source repository URL, if any.
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub id: i32,
    pub degree: String,
    pub school: String,
    pub year: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEducation {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub gpa: Option<String>,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown chat role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for ChatRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// One entry of the global, append-only chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: i32,
    pub role: ChatRole,
    pub content: String,
    /// Display-only timestamp, stored as the string the server generated.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: String,
}

/// A visitor's contact-form submission, already validated by the web layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, the concrete implementation of the
//! `PortfolioStore` and `ChatLogStore` ports from the `core` crate. It handles all
//! interactions with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use portfolio_core::domain::{
    ChatMessage, ChatRole, Education, Experience, NewChatMessage, NewEducation, NewExperience,
    NewProfile, NewProject, NewSkill, Profile, Project, Skill,
};
use portfolio_core::ports::{ChatLogStore, PortError, PortResult, PortfolioStore};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::BTreeMap;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the storage ports over a Postgres pool.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn storage_error(e: sqlx::Error) -> PortError {
    PortError::Storage(e.to_string())
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct ProfileRecord {
    id: i32,
    name: String,
    title: String,
    bio: String,
    email: String,
    phone: String,
    location: String,
    social_links: Json<BTreeMap<String, String>>,
}
impl ProfileRecord {
    fn to_domain(self) -> Profile {
        Profile {
            id: self.id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            location: self.location,
            social_links: self.social_links.0,
        }
    }
}

#[derive(FromRow)]
struct SkillRecord {
    id: i32,
    category: String,
    items: Vec<String>,
}
impl SkillRecord {
    fn to_domain(self) -> Skill {
        Skill {
            id: self.id,
            category: self.category,
            items: self.items,
        }
    }
}

#[derive(FromRow)]
struct ExperienceRecord {
    id: i32,
    title: String,
    company: String,
    duration: String,
    description: String,
}
impl ExperienceRecord {
    fn to_domain(self) -> Experience {
        Experience {
            id: self.id,
            title: self.title,
            company: self.company,
            duration: self.duration,
            description: self.description,
        }
    }
}

#[derive(FromRow)]
struct ProjectRecord {
    id: i32,
    title: String,
    description: String,
    tech_stack: Vec<String>,
    link: Option<String>,
    github_link: Option<String>,
}
impl ProjectRecord {
    fn to_domain(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack,
            link: self.link,
            github_link: self.github_link,
        }
    }
}

#[derive(FromRow)]
struct EducationRecord {
    id: i32,
    degree: String,
    school: String,
    year: String,
    gpa: Option<String>,
}
impl EducationRecord {
    fn to_domain(self) -> Education {
        Education {
            id: self.id,
            degree: self.degree,
            school: self.school,
            year: self.year,
            gpa: self.gpa,
        }
    }
}

#[derive(FromRow)]
struct ChatMessageRecord {
    id: i32,
    role: String,
    content: String,
    timestamp: String,
}
impl ChatMessageRecord {
    fn to_domain(self) -> PortResult<ChatMessage> {
        let role = self
            .role
            .parse::<ChatRole>()
            .map_err(|e| PortError::Storage(format!("chat_messages row {}: {}", self.id, e)))?;
        Ok(ChatMessage {
            id: self.id,
            role,
            content: self.content,
            timestamp: self.timestamp,
        })
    }
}

//=========================================================================================
// `PortfolioStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl PortfolioStore for DbAdapter {
    async fn get_profile(&self) -> PortResult<Option<Profile>> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            "SELECT id, name, title, bio, email, phone, location, social_links FROM personal_info ORDER BY id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.map(ProfileRecord::to_domain))
    }

    async fn create_profile(&self, profile: NewProfile) -> PortResult<Profile> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            "INSERT INTO personal_info (name, title, bio, email, phone, location, social_links) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id, name, title, bio, email, phone, location, social_links",
        )
        .bind(profile.name)
        .bind(profile.title)
        .bind(profile.bio)
        .bind(profile.email)
        .bind(profile.phone)
        .bind(profile.location)
        .bind(Json(profile.social_links))
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.to_domain())
    }

    async fn list_skills(&self) -> PortResult<Vec<Skill>> {
        let records = sqlx::query_as::<_, SkillRecord>(
            "SELECT id, category, items FROM skills ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(records.into_iter().map(SkillRecord::to_domain).collect())
    }

    async fn create_skill(&self, skill: NewSkill) -> PortResult<Skill> {
        let record = sqlx::query_as::<_, SkillRecord>(
            "INSERT INTO skills (category, items) VALUES ($1, $2) RETURNING id, category, items",
        )
        .bind(skill.category)
        .bind(skill.items)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.to_domain())
    }

    async fn clear_skills(&self) -> PortResult<()> {
        sqlx::query("DELETE FROM skills")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn list_experience(&self) -> PortResult<Vec<Experience>> {
        let records = sqlx::query_as::<_, ExperienceRecord>(
            "SELECT id, title, company, duration, description FROM experience ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(records.into_iter().map(ExperienceRecord::to_domain).collect())
    }

    async fn create_experience(&self, experience: NewExperience) -> PortResult<Experience> {
        let record = sqlx::query_as::<_, ExperienceRecord>(
            "INSERT INTO experience (title, company, duration, description) VALUES ($1, $2, $3, $4) RETURNING id, title, company, duration, description",
        )
        .bind(experience.title)
        .bind(experience.company)
        .bind(experience.duration)
        .bind(experience.description)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.to_domain())
    }

    async fn list_projects(&self) -> PortResult<Vec<Project>> {
        let records = sqlx::query_as::<_, ProjectRecord>(
            "SELECT id, title, description, tech_stack, link, github_link FROM projects ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(records.into_iter().map(ProjectRecord::to_domain).collect())
    }

    async fn create_project(&self, project: NewProject) -> PortResult<Project> {
        let record = sqlx::query_as::<_, ProjectRecord>(
            "INSERT INTO projects (title, description, tech_stack, link, github_link) VALUES ($1, $2, $3, $4, $5) RETURNING id, title, description, tech_stack, link, github_link",
        )
        .bind(project.title)
        .bind(project.description)
        .bind(project.tech_stack)
        .bind(project.link)
        .bind(project.github_link)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.to_domain())
    }

    async fn list_education(&self) -> PortResult<Vec<Education>> {
        let records = sqlx::query_as::<_, EducationRecord>(
            "SELECT id, degree, school, year, gpa FROM education ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(records.into_iter().map(EducationRecord::to_domain).collect())
    }

    async fn create_education(&self, education: NewEducation) -> PortResult<Education> {
        let record = sqlx::query_as::<_, EducationRecord>(
            "INSERT INTO education (degree, school, year, gpa) VALUES ($1, $2, $3, $4) RETURNING id, degree, school, year, gpa",
        )
        .bind(education.degree)
        .bind(education.school)
        .bind(education.year)
        .bind(education.gpa)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.to_domain())
    }
}

//=========================================================================================
// `ChatLogStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl ChatLogStore for DbAdapter {
    async fn list_messages(&self) -> PortResult<Vec<ChatMessage>> {
        let records = sqlx::query_as::<_, ChatMessageRecord>(
            "SELECT id, role, content, timestamp FROM chat_messages ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        records.into_iter().map(ChatMessageRecord::to_domain).collect()
    }

    async fn append_message(&self, message: NewChatMessage) -> PortResult<ChatMessage> {
        let record = sqlx::query_as::<_, ChatMessageRecord>(
            "INSERT INTO chat_messages (role, content, timestamp) VALUES ($1, $2, $3) RETURNING id, role, content, timestamp",
        )
        .bind(message.role.as_str())
        .bind(message.content)
        .bind(message.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        record.to_domain()
    }
}

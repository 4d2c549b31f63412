//! services/api/src/adapters/memory.rs
//!
//! A process-local implementation of the storage ports. Used for local runs
//! without Postgres and as the store behind the web tests. Data is lost on restart.

use async_trait::async_trait;
use portfolio_core::domain::{
    ChatMessage, Education, Experience, NewChatMessage, NewEducation, NewExperience, NewProfile,
    NewProject, NewSkill, Profile, Project, Skill,
};
use portfolio_core::ports::{ChatLogStore, PortResult, PortfolioStore};
use tokio::sync::RwLock;

/// One table: rows in insertion order plus the last id handed out.
/// Ids keep increasing after deletes, like a Postgres `SERIAL`.
struct Table<T> {
    rows: Vec<T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.push(row.clone());
        row
    }
}

#[derive(Default)]
struct Tables {
    profiles: Table<Profile>,
    skills: Table<Skill>,
    experience: Table<Experience>,
    projects: Table<Project>,
    education: Table<Education>,
    chat_messages: Table<ChatMessage>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn get_profile(&self) -> PortResult<Option<Profile>> {
        Ok(self.tables.read().await.profiles.rows.first().cloned())
    }

    async fn create_profile(&self, profile: NewProfile) -> PortResult<Profile> {
        let mut tables = self.tables.write().await;
        Ok(tables.profiles.insert_with(|id| Profile {
            id,
            name: profile.name,
            title: profile.title,
            bio: profile.bio,
            email: profile.email,
            phone: profile.phone,
            location: profile.location,
            social_links: profile.social_links,
        }))
    }

    async fn list_skills(&self) -> PortResult<Vec<Skill>> {
        Ok(self.tables.read().await.skills.rows.clone())
    }

    async fn create_skill(&self, skill: NewSkill) -> PortResult<Skill> {
        let mut tables = self.tables.write().await;
        Ok(tables.skills.insert_with(|id| Skill {
            id,
            category: skill.category,
            items: skill.items,
        }))
    }

    async fn clear_skills(&self) -> PortResult<()> {
        self.tables.write().await.skills.rows.clear();
        Ok(())
    }

    async fn list_experience(&self) -> PortResult<Vec<Experience>> {
        Ok(self.tables.read().await.experience.rows.clone())
    }

    async fn create_experience(&self, experience: NewExperience) -> PortResult<Experience> {
        let mut tables = self.tables.write().await;
        Ok(tables.experience.insert_with(|id| Experience {
            id,
            title: experience.title,
            company: experience.company,
            duration: experience.duration,
            description: experience.description,
        }))
    }

    async fn list_projects(&self) -> PortResult<Vec<Project>> {
        Ok(self.tables.read().await.projects.rows.clone())
    }

    async fn create_project(&self, project: NewProject) -> PortResult<Project> {
        let mut tables = self.tables.write().await;
        Ok(tables.projects.insert_with(|id| Project {
            id,
            title: project.title,
            description: project.description,
            tech_stack: project.tech_stack,
            link: project.link,
            github_link: project.github_link,
        }))
    }

    async fn list_education(&self) -> PortResult<Vec<Education>> {
        Ok(self.tables.read().await.education.rows.clone())
    }

    async fn create_education(&self, education: NewEducation) -> PortResult<Education> {
        let mut tables = self.tables.write().await;
        Ok(tables.education.insert_with(|id| Education {
            id,
            degree: education.degree,
            school: education.school,
            year: education.year,
            gpa: education.gpa,
        }))
    }
}

#[async_trait]
impl ChatLogStore for MemoryStore {
    async fn list_messages(&self) -> PortResult<Vec<ChatMessage>> {
        Ok(self.tables.read().await.chat_messages.rows.clone())
    }

    async fn append_message(&self, message: NewChatMessage) -> PortResult<ChatMessage> {
        let mut tables = self.tables.write().await;
        Ok(tables.chat_messages.insert_with(|id| ChatMessage {
            id,
            role: message.role,
            content: message.content,
            timestamp: message.timestamp,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::domain::ChatRole;
    use std::collections::BTreeMap;

    fn new_profile(name: &str) -> NewProfile {
        NewProfile {
            name: name.to_string(),
            title: "Engineer".to_string(),
            bio: "Builds things.".to_string(),
            email: "me@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Remote".to_string(),
            social_links: BTreeMap::new(),
        }
    }

    fn new_skill(category: &str) -> NewSkill {
        NewSkill {
            category: category.to_string(),
            items: vec!["one".to_string(), "two".to_string()],
        }
    }

    #[tokio::test]
    async fn profile_is_absent_until_created() {
        let store = MemoryStore::new();
        assert_eq!(store.get_profile().await.unwrap(), None);

        let created = store.create_profile(new_profile("First")).await.unwrap();
        assert_eq!(store.get_profile().await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn first_profile_wins() {
        let store = MemoryStore::new();
        store.create_profile(new_profile("First")).await.unwrap();
        store.create_profile(new_profile("Second")).await.unwrap();

        let profile = store.get_profile().await.unwrap().unwrap();
        assert_eq!(profile.name, "First");
        assert_eq!(profile.id, 1);
    }

    #[tokio::test]
    async fn lists_keep_insertion_order() {
        let store = MemoryStore::new();
        for category in ["Languages", "Databases", "Cloud"] {
            store.create_skill(new_skill(category)).await.unwrap();
        }

        let categories: Vec<String> = store
            .list_skills()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(categories, ["Languages", "Databases", "Cloud"]);
    }

    #[tokio::test]
    async fn clear_skills_then_create_shows_only_the_new_record() {
        let store = MemoryStore::new();
        store.create_skill(new_skill("Old A")).await.unwrap();
        store.create_skill(new_skill("Old B")).await.unwrap();

        store.clear_skills().await.unwrap();
        assert!(store.list_skills().await.unwrap().is_empty());

        let fresh = store.create_skill(new_skill("Fresh")).await.unwrap();
        assert_eq!(fresh.id, 3, "ids are not reused after a clear");
        assert_eq!(store.list_skills().await.unwrap(), vec![fresh]);
    }

    #[tokio::test]
    async fn optional_fields_survive_storage() {
        let store = MemoryStore::new();
        let project = store
            .create_project(NewProject {
                title: "CLI".to_string(),
                description: "A tool".to_string(),
                tech_stack: vec!["Rust".to_string()],
                link: None,
                github_link: Some("https://github.com/me/cli".to_string()),
            })
            .await
            .unwrap();
        let education = store
            .create_education(NewEducation {
                degree: "BSc".to_string(),
                school: "Uni".to_string(),
                year: "2020".to_string(),
                gpa: None,
            })
            .await
            .unwrap();

        assert_eq!(store.list_projects().await.unwrap(), vec![project]);
        assert_eq!(store.list_education().await.unwrap(), vec![education]);
    }

    #[tokio::test]
    async fn chat_log_appends_in_order() {
        let store = MemoryStore::new();
        for (role, content) in [(ChatRole::User, "hi"), (ChatRole::Assistant, "hello")] {
            store
                .append_message(NewChatMessage {
                    role,
                    content: content.to_string(),
                    timestamp: "2024-01-01T00:00:00.000Z".to_string(),
                })
                .await
                .unwrap();
        }

        let log = store.list_messages().await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!((log[0].id, log[0].role), (1, ChatRole::User));
        assert_eq!((log[1].id, log[1].role), (2, ChatRole::Assistant));
    }
}

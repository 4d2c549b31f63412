//! crates/portfolio_core/src/context.rs
//!
//! Gathers the full portfolio corpus that backs every chat answer.

use futures::try_join;

use crate::domain::{Education, Experience, Profile, Project, Skill};
use crate::ports::{PortResult, PortfolioStore};

/// Every entity collection, loaded in full. No filtering or ranking is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioContext {
    pub profile: Option<Profile>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

impl PortfolioContext {
    /// Reads all five collections from the store concurrently.
    /// The first storage failure aborts the whole load.
    pub async fn load(store: &dyn PortfolioStore) -> PortResult<Self> {
        let (profile, skills, projects, experience, education) = try_join!(
            store.get_profile(),
            store.list_skills(),
            store.list_projects(),
            store.list_experience(),
            store.list_education(),
        )?;

        Ok(Self {
            profile,
            skills,
            projects,
            experience,
            education,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewEducation, NewExperience, NewProfile, NewProject, NewSkill};
    use crate::ports::PortError;
    use async_trait::async_trait;

    /// Serves fixed collections; `fail_projects` simulates a dropped connection.
    #[derive(Default)]
    struct FixedStore {
        skills: Vec<Skill>,
        fail_projects: bool,
    }

    #[async_trait]
    impl PortfolioStore for FixedStore {
        async fn get_profile(&self) -> PortResult<Option<Profile>> {
            Ok(None)
        }
        async fn create_profile(&self, _profile: NewProfile) -> PortResult<Profile> {
            unimplemented!()
        }
        async fn list_skills(&self) -> PortResult<Vec<Skill>> {
            Ok(self.skills.clone())
        }
        async fn create_skill(&self, _skill: NewSkill) -> PortResult<Skill> {
            unimplemented!()
        }
        async fn clear_skills(&self) -> PortResult<()> {
            unimplemented!()
        }
        async fn list_experience(&self) -> PortResult<Vec<Experience>> {
            Ok(Vec::new())
        }
        async fn create_experience(&self, _e: NewExperience) -> PortResult<Experience> {
            unimplemented!()
        }
        async fn list_projects(&self) -> PortResult<Vec<Project>> {
            if self.fail_projects {
                return Err(PortError::Storage("connection reset".to_string()));
            }
            Ok(Vec::new())
        }
        async fn create_project(&self, _p: NewProject) -> PortResult<Project> {
            unimplemented!()
        }
        async fn list_education(&self) -> PortResult<Vec<Education>> {
            Ok(Vec::new())
        }
        async fn create_education(&self, _e: NewEducation) -> PortResult<Education> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn load_collects_every_collection() {
        let store = FixedStore {
            skills: vec![Skill {
                id: 1,
                category: "Languages".to_string(),
                items: vec!["Rust".to_string()],
            }],
            ..Default::default()
        };

        let context = PortfolioContext::load(&store).await.unwrap();
        assert_eq!(context.skills, store.skills);
        assert!(context.profile.is_none());
        assert!(!context.is_empty());
    }

    #[tokio::test]
    async fn empty_store_yields_an_empty_context() {
        let context = PortfolioContext::load(&FixedStore::default()).await.unwrap();
        assert!(context.is_empty());
        assert_eq!(context, PortfolioContext::default());
    }

    #[tokio::test]
    async fn load_propagates_storage_failures() {
        let store = FixedStore {
            fail_projects: true,
            ..Default::default()
        };

        let err = PortfolioContext::load(&store).await.unwrap_err();
        assert!(matches!(err, PortError::Storage(_)));
    }
}

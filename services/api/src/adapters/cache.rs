//! services/api/src/adapters/cache.rs
//!
//! A `PortfolioStore` decorator that keeps each entity collection in memory
//! after its first read. Every write through the decorator drops the cached
//! copy of the collection it touched, so the next read goes back to the store.

use async_trait::async_trait;
use portfolio_core::domain::{
    Education, Experience, NewEducation, NewExperience, NewProfile, NewProject, NewSkill, Profile,
    Project, Skill,
};
use portfolio_core::ports::{PortResult, PortfolioStore};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// One cached collection. `None` means "not loaded".
type Slot<T> = RwLock<Option<T>>;

pub struct CachedPortfolioStore {
    inner: Arc<dyn PortfolioStore>,
    profile: Slot<Option<Profile>>,
    skills: Slot<Vec<Skill>>,
    experience: Slot<Vec<Experience>>,
    projects: Slot<Vec<Project>>,
    education: Slot<Vec<Education>>,
}

impl CachedPortfolioStore {
    pub fn new(inner: Arc<dyn PortfolioStore>) -> Self {
        Self {
            inner,
            profile: RwLock::new(None),
            skills: RwLock::new(None),
            experience: RwLock::new(None),
            projects: RwLock::new(None),
            education: RwLock::new(None),
        }
    }
}

/// Returns the cached value, or runs `load` and caches its result.
/// The write lock is held across the load so a concurrent invalidation
/// always lands after any value stored here.
async fn read_through<T, F>(slot: &Slot<T>, entity: &'static str, load: F) -> PortResult<T>
where
    T: Clone,
    F: Future<Output = PortResult<T>>,
{
    if let Some(hit) = slot.read().await.as_ref() {
        return Ok(hit.clone());
    }

    let mut guard = slot.write().await;
    if let Some(hit) = guard.as_ref() {
        return Ok(hit.clone());
    }
    debug!(entity, "Context cache miss, reading from store");
    let fresh = load.await?;
    *guard = Some(fresh.clone());
    Ok(fresh)
}

/// Runs a write and then forgets the cached collection, even if the write failed.
async fn write_through<T, R, F>(slot: &Slot<T>, entity: &'static str, write: F) -> PortResult<R>
where
    F: Future<Output = PortResult<R>>,
{
    let result = write.await;
    *slot.write().await = None;
    debug!(entity, "Context cache invalidated");
    result
}

#[async_trait]
impl PortfolioStore for CachedPortfolioStore {
    async fn get_profile(&self) -> PortResult<Option<Profile>> {
        read_through(&self.profile, "profile", self.inner.get_profile()).await
    }

    async fn create_profile(&self, profile: NewProfile) -> PortResult<Profile> {
        write_through(&self.profile, "profile", self.inner.create_profile(profile)).await
    }

    async fn list_skills(&self) -> PortResult<Vec<Skill>> {
        read_through(&self.skills, "skills", self.inner.list_skills()).await
    }

    async fn create_skill(&self, skill: NewSkill) -> PortResult<Skill> {
        write_through(&self.skills, "skills", self.inner.create_skill(skill)).await
    }

    async fn clear_skills(&self) -> PortResult<()> {
        write_through(&self.skills, "skills", self.inner.clear_skills()).await
    }

    async fn list_experience(&self) -> PortResult<Vec<Experience>> {
        read_through(&self.experience, "experience", self.inner.list_experience()).await
    }

    async fn create_experience(&self, experience: NewExperience) -> PortResult<Experience> {
        write_through(
            &self.experience,
            "experience",
            self.inner.create_experience(experience),
        )
        .await
    }

    async fn list_projects(&self) -> PortResult<Vec<Project>> {
        read_through(&self.projects, "projects", self.inner.list_projects()).await
    }

    async fn create_project(&self, project: NewProject) -> PortResult<Project> {
        write_through(&self.projects, "projects", self.inner.create_project(project)).await
    }

    async fn list_education(&self) -> PortResult<Vec<Education>> {
        read_through(&self.education, "education", self.inner.list_education()).await
    }

    async fn create_education(&self, education: NewEducation) -> PortResult<Education> {
        write_through(
            &self.education,
            "education",
            self.inner.create_education(education),
        )
        .await
    }
}

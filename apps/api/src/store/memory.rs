//! In-memory `PortfolioStore` used by the service and router tests.
//! Mirrors `PgStore` semantics: id ordering, byte-wise level ordering,
//! case-insensitive literal substring matching, all-or-nothing seeding.

use std::collections::HashSet;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileInput};
use crate::models::project::{Project, ProjectRow};
use crate::models::skill::Skill;
use crate::portfolio::query::ProjectQuery;
use crate::seed::{SeedData, SeedOutcome};
use crate::store::PortfolioStore;

#[derive(Debug, Clone, Default)]
struct Tables {
    profile: Option<Profile>,
    next_profile_id: i64,
    skills: Vec<Skill>,
    projects: Vec<ProjectRow>,
    /// (project_id, skill_id)
    links: Vec<(i64, i64)>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn to_profile(id: i64, input: ProfileInput) -> Profile {
    Profile {
        id,
        name: input.name,
        email: input.email,
        education: input.education,
        bio: input.bio,
        github: input.github,
        linkedin: input.linkedin,
        portfolio: input.portfolio,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Tables {
    fn skills_of(&self, project_id: i64) -> Vec<Skill> {
        let ids: HashSet<i64> = self
            .links
            .iter()
            .filter(|(p, _)| *p == project_id)
            .map(|(_, s)| *s)
            .collect();
        self.skills
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect()
    }

    fn insert_profile(&mut self, input: ProfileInput) -> Profile {
        self.next_profile_id += 1;
        let profile = to_profile(self.next_profile_id, input);
        self.profile = Some(profile.clone());
        profile
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded with the fixed dataset.
    pub async fn seeded() -> Self {
        let store = Self::new();
        store
            .seed(&SeedData::fixed())
            .await
            .expect("fixed seed data is valid");
        store
    }

    /// Row counts as (profiles, skills, projects).
    pub async fn counts(&self) -> (usize, usize, usize) {
        let t = self.tables.lock().await;
        (
            usize::from(t.profile.is_some()),
            t.skills.len(),
            t.projects.len(),
        )
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn get_profile(&self) -> Result<Option<Profile>, AppError> {
        Ok(self.tables.lock().await.profile.clone())
    }

    async fn upsert_profile(&self, input: ProfileInput) -> Result<Profile, AppError> {
        let mut t = self.tables.lock().await;
        match t.profile.as_ref().map(|p| p.id) {
            Some(id) => {
                let profile = to_profile(id, input);
                t.profile = Some(profile.clone());
                Ok(profile)
            }
            None => Ok(t.insert_profile(input)),
        }
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.tables.lock().await.skills.clone())
    }

    async fn top_skills(&self, limit: i64) -> Result<Vec<Skill>, AppError> {
        let mut skills = self.tables.lock().await.skills.clone();
        // Stable sort keeps id order within equal levels.
        skills.sort_by(|a, b| b.level.as_bytes().cmp(a.level.as_bytes()));
        skills.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(skills)
    }

    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, AppError> {
        let t = self.tables.lock().await;
        let offset = usize::try_from(query.page.offset).unwrap_or(0);
        let limit = usize::try_from(query.page.limit).unwrap_or(0);

        Ok(t.projects
            .iter()
            .map(|row| (row, t.skills_of(row.id)))
            .filter(|(_, skills)| match &query.skill {
                Some(filter) => skills.iter().any(|s| contains_ci(&s.name, filter)),
                None => true,
            })
            .skip(offset)
            .take(limit)
            .map(|(row, skills)| Project::from_row(row.clone(), skills))
            .collect())
    }

    async fn search_projects(&self, term: &str) -> Result<Vec<ProjectRow>, AppError> {
        let t = self.tables.lock().await;
        Ok(t.projects
            .iter()
            .filter(|p| contains_ci(&p.title, term) || contains_ci(&p.description, term))
            .cloned()
            .collect())
    }

    async fn search_skills(&self, term: &str) -> Result<Vec<Skill>, AppError> {
        let t = self.tables.lock().await;
        Ok(t.skills
            .iter()
            .filter(|s| contains_ci(&s.name, term))
            .cloned()
            .collect())
    }

    async fn seed(&self, data: &SeedData) -> Result<SeedOutcome, AppError> {
        let mut guard = self.tables.lock().await;
        if guard.profile.is_some() {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        // Work on a copy so a failure leaves the tables untouched.
        let mut t = guard.clone();
        for skill in &data.skills {
            if t.skills.iter().any(|s| s.name == skill.name) {
                return Err(AppError::Internal(anyhow!(
                    "duplicate skill name '{}'",
                    skill.name
                )));
            }
            let id = t.skills.len() as i64 + 1;
            t.skills.push(Skill {
                id,
                name: skill.name.clone(),
                level: skill.level.clone(),
            });
        }

        for project in &data.projects {
            let project_id = t.projects.len() as i64 + 1;
            t.projects.push(ProjectRow {
                id: project_id,
                title: project.title.clone(),
                description: project.description.clone(),
                github_url: project.github_url.clone(),
                live_url: project.live_url.clone(),
            });
            for name in &project.skill_names {
                let skill_id = t
                    .skills
                    .iter()
                    .find(|s| &s.name == name)
                    .map(|s| s.id)
                    .ok_or_else(|| {
                        AppError::Internal(anyhow!(
                            "Seed project '{}' references unknown skill '{name}'",
                            project.title
                        ))
                    })?;
                t.links.push((project_id, skill_id));
            }
        }

        t.insert_profile(data.profile.clone());
        *guard = t;

        Ok(SeedOutcome::Seeded {
            skills: data.skills.len(),
            projects: data.projects.len(),
        })
    }
}

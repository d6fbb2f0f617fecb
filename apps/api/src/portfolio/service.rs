//! Read/write operations behind the HTTP handlers. Every call re-queries
//! the store; nothing is cached.

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileInput};
use crate::models::project::{Project, SearchResult};
use crate::models::skill::Skill;
use crate::portfolio::query::{search_term, ProjectParams, ProjectQuery, SearchParams};
use crate::store::PortfolioStore;

pub async fn get_profile(store: &dyn PortfolioStore) -> Result<Profile, AppError> {
    store
        .get_profile()
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

/// Full replace: optionals absent from `input` are cleared.
/// The caller has already checked the API key.
pub async fn upsert_profile(
    store: &dyn PortfolioStore,
    input: ProfileInput,
) -> Result<Profile, AppError> {
    input.validate()?;
    store.upsert_profile(input).await
}

pub async fn list_skills(store: &dyn PortfolioStore) -> Result<Vec<Skill>, AppError> {
    store.list_skills().await
}

/// Orders by the raw `level` string, descending. "Intermediate" ranks above
/// "Expert" this way; levels are free text, not a proficiency scale.
pub async fn top_skills(store: &dyn PortfolioStore, n: i64) -> Result<Vec<Skill>, AppError> {
    store.top_skills(n.max(0)).await
}

pub async fn list_projects(
    store: &dyn PortfolioStore,
    params: ProjectParams,
) -> Result<Vec<Project>, AppError> {
    let query = ProjectQuery::from_params(params)?;
    store.list_projects(&query).await
}

/// Matching projects first, then matching skills, each in storage order.
pub async fn search(
    store: &dyn PortfolioStore,
    params: SearchParams,
) -> Result<Vec<SearchResult>, AppError> {
    let term = search_term(params)?;

    let projects = store.search_projects(&term).await?;
    let skills = store.search_skills(&term).await?;

    Ok(projects
        .into_iter()
        .map(SearchResult::from)
        .chain(skills.into_iter().map(SearchResult::from))
        .collect())
}

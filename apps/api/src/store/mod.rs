//! Storage seam for the portfolio data.
//!
//! Production runs on `PgStore` (PostgreSQL via sqlx). `AppState` carries an
//! `Arc<dyn PortfolioStore>` so handlers and the seed loader never name a
//! concrete backend.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileInput};
use crate::models::project::{Project, ProjectRow};
use crate::models::skill::Skill;
use crate::portfolio::query::ProjectQuery;
use crate::seed::{SeedData, SeedOutcome};

pub use postgres::PgStore;

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// The profile row, if one has been created.
    async fn get_profile(&self) -> Result<Option<Profile>, AppError>;

    /// Creates the profile if none exists, otherwise overwrites every field
    /// of the existing row. Atomic.
    async fn upsert_profile(&self, input: ProfileInput) -> Result<Profile, AppError>;

    /// All skills in id order.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    /// Up to `limit` skills ordered by `level` descending under byte-wise
    /// string comparison, ties broken by id.
    async fn top_skills(&self, limit: i64) -> Result<Vec<Skill>, AppError>;

    /// One page of projects (id order) with nested skills. When the query
    /// carries a skill filter, only projects linked to a skill whose name
    /// contains it (case-insensitive) are returned.
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, AppError>;

    /// Projects whose title or description contains `term`, case-insensitive.
    async fn search_projects(&self, term: &str) -> Result<Vec<ProjectRow>, AppError>;

    /// Skills whose name contains `term`, case-insensitive.
    async fn search_skills(&self, term: &str) -> Result<Vec<Skill>, AppError>;

    /// Loads `data` in one transaction unless a profile already exists.
    async fn seed(&self, data: &SeedData) -> Result<SeedOutcome, AppError>;
}

use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::debug;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileInput};
use crate::models::project::{Project, ProjectRow};
use crate::models::skill::Skill;
use crate::portfolio::query::{like_pattern, ProjectQuery};
use crate::seed::{SeedData, SeedOutcome};
use crate::store::PortfolioStore;

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct ProjectSkillRow {
    project_id: i64,
    id: i64,
    name: String,
    level: String,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Serializes profile creation against concurrent seeders and writers.
    /// Held until the transaction ends.
    async fn lock_profiles(tx: &mut Transaction<'_, Postgres>) -> Result<(), AppError> {
        sqlx::query("LOCK TABLE profiles IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    async fn skills_for_projects(
        &self,
        project_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Skill>>, AppError> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<ProjectSkillRow> = sqlx::query_as(
            r#"
            SELECT ps.project_id, s.id, s.name, s.level
            FROM project_skills ps
            JOIN skills s ON s.id = ps.skill_id
            WHERE ps.project_id = ANY($1)
            ORDER BY ps.project_id, s.id
            "#,
        )
        .bind(project_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_project: HashMap<i64, Vec<Skill>> = HashMap::new();
        for row in rows {
            by_project.entry(row.project_id).or_default().push(Skill {
                id: row.id,
                name: row.name,
                level: row.level,
            });
        }
        Ok(by_project)
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn get_profile(&self) -> Result<Option<Profile>, AppError> {
        Ok(
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY id LIMIT 1")
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn upsert_profile(&self, input: ProfileInput) -> Result<Profile, AppError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_profiles(&mut tx).await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM profiles ORDER BY id LIMIT 1")
                .fetch_optional(&mut *tx)
                .await?;

        let profile = match existing {
            Some(id) => {
                sqlx::query_as::<_, Profile>(
                    r#"
                    UPDATE profiles SET
                        name = $1,
                        email = $2,
                        education = $3,
                        bio = $4,
                        github = $5,
                        linkedin = $6,
                        portfolio = $7
                    WHERE id = $8
                    RETURNING *
                    "#,
                )
                .bind(&input.name)
                .bind(&input.email)
                .bind(&input.education)
                .bind(&input.bio)
                .bind(&input.github)
                .bind(&input.linkedin)
                .bind(&input.portfolio)
                .bind(id)
                .fetch_one(&mut *tx)
                .await?
            }
            None => insert_profile(&mut tx, &input).await?,
        };

        tx.commit().await?;
        debug!("Profile {} written", profile.id);
        Ok(profile)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(
            sqlx::query_as::<_, Skill>("SELECT id, name, level FROM skills ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn top_skills(&self, limit: i64) -> Result<Vec<Skill>, AppError> {
        // COLLATE "C" keeps the ordering byte-wise regardless of database locale.
        Ok(sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, name, level
            FROM skills
            ORDER BY level COLLATE "C" DESC, id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, AppError> {
        let skill_pattern = query.skill.as_deref().map(like_pattern);

        let rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.title, p.description, p.github_url, p.live_url
            FROM projects p
            WHERE $1::text IS NULL OR EXISTS (
                SELECT 1
                FROM project_skills ps
                JOIN skills s ON s.id = ps.skill_id
                WHERE ps.project_id = p.id AND s.name ILIKE $1
            )
            ORDER BY p.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(skill_pattern)
        .bind(query.page.limit)
        .bind(query.page.offset)
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut skills = self.skills_for_projects(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let linked = skills.remove(&row.id).unwrap_or_default();
                Project::from_row(row, linked)
            })
            .collect())
    }

    async fn search_projects(&self, term: &str) -> Result<Vec<ProjectRow>, AppError> {
        Ok(sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, github_url, live_url
            FROM projects
            WHERE title ILIKE $1 OR description ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn search_skills(&self, term: &str) -> Result<Vec<Skill>, AppError> {
        Ok(sqlx::query_as::<_, Skill>(
            "SELECT id, name, level FROM skills WHERE name ILIKE $1 ORDER BY id",
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn seed(&self, data: &SeedData) -> Result<SeedOutcome, AppError> {
        // Dropping `tx` on any early return rolls the whole batch back.
        let mut tx = self.pool.begin().await?;
        Self::lock_profiles(&mut tx).await?;

        let seeded: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM profiles)")
            .fetch_one(&mut *tx)
            .await?;
        if seeded {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut skill_ids: HashMap<&str, i64> = HashMap::with_capacity(data.skills.len());
        for skill in &data.skills {
            let id: i64 =
                sqlx::query_scalar("INSERT INTO skills (name, level) VALUES ($1, $2) RETURNING id")
                    .bind(&skill.name)
                    .bind(&skill.level)
                    .fetch_one(&mut *tx)
                    .await?;
            skill_ids.insert(skill.name.as_str(), id);
        }

        for project in &data.projects {
            let project_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO projects (title, description, github_url, live_url)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(&project.title)
            .bind(&project.description)
            .bind(&project.github_url)
            .bind(&project.live_url)
            .fetch_one(&mut *tx)
            .await?;

            for name in &project.skill_names {
                let skill_id = skill_ids.get(name.as_str()).copied().ok_or_else(|| {
                    AppError::Internal(anyhow!(
                        "Seed project '{}' references unknown skill '{name}'",
                        project.title
                    ))
                })?;
                sqlx::query("INSERT INTO project_skills (project_id, skill_id) VALUES ($1, $2)")
                    .bind(project_id)
                    .bind(skill_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        insert_profile(&mut tx, &data.profile).await?;
        tx.commit().await?;

        Ok(SeedOutcome::Seeded {
            skills: data.skills.len(),
            projects: data.projects.len(),
        })
    }
}

async fn insert_profile(
    tx: &mut Transaction<'_, Postgres>,
    input: &ProfileInput,
) -> Result<Profile, AppError> {
    Ok(sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (name, email, education, bio, github, linkedin, portfolio)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.education)
    .bind(&input.bio)
    .bind(&input.github)
    .bind(&input.linkedin)
    .bind(&input.portfolio)
    .fetch_one(&mut **tx)
    .await?)
}

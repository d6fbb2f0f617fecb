use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::skill::Skill;

/// A `projects` row without its skill links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// A project as returned by the API, with its linked skills nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub skills: Vec<Skill>,
}

impl Project {
    pub fn from_row(row: ProjectRow, skills: Vec<Skill>) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            github_url: row.github_url,
            live_url: row.live_url,
            skills,
        }
    }
}

/// One hit from `GET /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Project,
    Skill,
}

impl From<ProjectRow> for SearchResult {
    fn from(row: ProjectRow) -> Self {
        SearchResult {
            kind: SearchKind::Project,
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

impl From<Skill> for SearchResult {
    fn from(skill: Skill) -> Self {
        SearchResult {
            kind: SearchKind::Skill,
            id: skill.id,
            title: skill.name,
            description: format!("Skill level: {}", skill.level),
        }
    }
}

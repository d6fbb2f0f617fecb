use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named competency. `level` is free text (Beginner, Intermediate,
/// Advanced, Expert by convention) and is compared as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub level: String,
}

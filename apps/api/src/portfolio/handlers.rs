use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::profile::{Profile, ProfileInput};
use crate::models::project::{Project, SearchResult};
use crate::models::skill::Skill;
use crate::portfolio::auth::RequireApiKey;
use crate::portfolio::query::{ProjectParams, SearchParams, DEFAULT_TOP_SKILLS};
use crate::portfolio::service;
use crate::state::AppState;

/// GET /profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(service::get_profile(state.store.as_ref()).await?))
}

/// PUT /profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    _auth: RequireApiKey,
    AppJson(input): AppJson<ProfileInput>,
) -> Result<Json<Profile>, AppError> {
    let profile = service::upsert_profile(state.store.as_ref(), input).await?;
    tracing::info!("Profile {} updated", profile.id);
    Ok(Json(profile))
}

/// GET /skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(service::list_skills(state.store.as_ref()).await?))
}

/// GET /skills/top
pub async fn handle_top_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(
        service::top_skills(state.store.as_ref(), DEFAULT_TOP_SKILLS).await?,
    ))
}

/// GET /projects?skill=&limit=&offset=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectParams>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(
        service::list_projects(state.store.as_ref(), params).await?,
    ))
}

/// GET /search?q=
pub async fn handle_search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    Ok(Json(service::search(state.store.as_ref(), params).await?))
}

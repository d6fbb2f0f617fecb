pub mod health;

use axum::{routing::get, Router};

use crate::portfolio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/profile",
            get(handlers::handle_get_profile).put(handlers::handle_put_profile),
        )
        .route("/skills", get(handlers::handle_list_skills))
        .route("/skills/top", get(handlers::handle_top_skills))
        .route("/projects", get(handlers::handle_list_projects))
        .route("/search", get(handlers::handle_search))
        .with_state(state)
}

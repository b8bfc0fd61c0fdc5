pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::shell::handlers as shell;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(shell::handle_index).post(shell::handle_submit))
        // Recommendation API
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .route(
            "/api/v1/recommendations/:session_id/export",
            get(handlers::handle_export),
        )
        // Reference data
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/career-paths", get(handlers::handle_career_paths))
        .with_state(state)
}

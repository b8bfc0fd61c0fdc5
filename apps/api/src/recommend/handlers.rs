//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::career_paths::{
    CareerTrack, CAREER_TRACKS, HIGH_DEMAND_SKILLS, JOB_SEARCH_TIPS,
};
use crate::errors::AppError;
use crate::recommend::exporter::{export_csv, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
use crate::recommend::{run_recommendation, RenderedCard};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: String,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub session_id: Uuid,
    pub count: usize,
    pub renderer: &'static str,
    pub cards: Vec<RenderedCard>,
    pub unrecognized: Vec<String>,
    pub export_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerPathsResponse {
    pub tracks: &'static [CareerTrack],
    pub tips: &'static [&'static str],
    pub high_demand_skills: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Matches the comma-separated skill list and replaces the session's last result.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let run = run_recommendation(&state, &request.skills, request.session_id).await?;

    Ok(Json(RecommendResponse {
        session_id: run.session_id,
        count: run.cards.len(),
        renderer: state.card_renderer.backend(),
        export_url: run.export_url(),
        cards: run.cards,
        unrecognized: run.unrecognized,
    }))
}

/// GET /api/v1/recommendations/:session_id/export
///
/// Streams the session's last result as a CSV attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (csv, rows) = state
        .sessions
        .with_results(session_id, |results| -> Result<_, AppError> {
            if results.is_empty() {
                return Err(AppError::NoRecommendations(
                    "The last run produced no recommendations to export".to_string(),
                ));
            }
            Ok((export_csv(results)?, results.len()))
        })
        .await
        .ok_or_else(|| {
            AppError::NotFound(format!("Session {session_id} not found or expired"))
        })??;

    info!("Exported {rows} recommendations for session {session_id}");

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        Bytes::from(csv),
    ))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.catalog.skill_keys().to_vec(),
    })
}

/// GET /api/v1/career-paths
pub async fn handle_career_paths() -> Json<CareerPathsResponse> {
    Json(CareerPathsResponse {
        tracks: CAREER_TRACKS,
        tips: JOB_SEARCH_TIPS,
        high_demand_skills: HIGH_DEMAND_SKILLS,
    })
}

//! Recommendation pipeline: match skills → join details → present → render.
//! Both the HTML form and the JSON API go through `run_recommendation`.

pub mod exporter;
pub mod handlers;
pub mod matcher;
pub mod presenter;
pub mod renderer;
pub mod session;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommend::matcher::{match_skills, resolve};
use crate::recommend::presenter::{present, RenderableCard};
use crate::state::AppState;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one skill!";

/// A presented card plus its rendered HTML fragment.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedCard {
    #[serde(flatten)]
    pub card: RenderableCard,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct RecommendationRun {
    pub session_id: Uuid,
    pub cards: Vec<RenderedCard>,
    pub unrecognized: Vec<String>,
}

impl RecommendationRun {
    /// Download is offered only when at least one job was shown.
    pub fn export_url(&self) -> Option<String> {
        (!self.cards.is_empty()).then(|| export_path(self.session_id))
    }
}

pub fn export_path(session_id: Uuid) -> String {
    format!("/api/v1/recommendations/{session_id}/export")
}

/// Rejects empty or whitespace-only input before any matching happens.
pub fn validate_skills(raw: &str) -> Result<(), AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_INPUT_MESSAGE.to_string()));
    }
    Ok(())
}

/// Runs the full pipeline and stores the result as the session's last run.
pub async fn run_recommendation(
    state: &AppState,
    raw: &str,
    session_id: Option<Uuid>,
) -> Result<RecommendationRun, AppError> {
    validate_skills(raw)?;

    let outcome = match_skills(&state.catalog, raw);
    let results = resolve(&state.catalog, &outcome.recommendations);

    let cards = results
        .iter()
        .map(|rec| {
            let card = present(&rec.job, &rec.details);
            let html = state.card_renderer.render(&card);
            RenderedCard { card, html }
        })
        .collect::<Vec<_>>();

    debug!(
        matched = outcome.recommendations.len(),
        shown = cards.len(),
        unrecognized = outcome.unrecognized.len(),
        renderer = state.card_renderer.backend(),
        "Recommendation run complete"
    );

    let session_id = state.sessions.record(session_id, results).await;

    Ok(RecommendationRun {
        session_id,
        cards,
        unrecognized: outcome.unrecognized,
    })
}

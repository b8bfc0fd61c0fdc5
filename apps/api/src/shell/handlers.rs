//! Axum route handlers for the HTML form.

use axum::{
    extract::{Form, State},
    response::Html,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::recommend::run_recommendation;
use crate::shell::{render_page, FormOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillsForm {
    #[serde(default)]
    pub skills: String,
    /// Hidden field; empty on the first submission.
    #[serde(default)]
    pub session_id: String,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state, "", None))
}

/// POST /
///
/// Blank input is the pipeline's only rejection; it is shown as a warning on
/// the page rather than an error response.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<SkillsForm>,
) -> Html<String> {
    let session_id = form.session_id.trim().parse::<Uuid>().ok();

    let outcome = match run_recommendation(&state, &form.skills, session_id).await {
        Ok(run) => FormOutcome::Completed(run),
        Err(e) => {
            debug!("Form submission rejected: {e}");
            FormOutcome::EmptyInput { session_id }
        }
    };

    Html(render_page(&state, &form.skills, Some(&outcome)))
}

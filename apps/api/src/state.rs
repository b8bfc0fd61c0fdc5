use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::recommend::renderer::CardRenderer;
use crate::recommend::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub catalog: Arc<Catalog>,
    /// Chosen once at startup: template if `job_card.html` loaded, else structured.
    pub card_renderer: Arc<dyn CardRenderer>,
    pub sessions: SessionStore,
    /// Inlined into the Shell page when present.
    pub stylesheet: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        config: &Config,
        catalog: Catalog,
        card_renderer: Arc<dyn CardRenderer>,
        stylesheet: Option<String>,
    ) -> Self {
        let sessions = SessionStore::new(config.session_ttl, config.max_sessions);
        AppState {
            catalog: Arc::new(catalog),
            card_renderer,
            sessions,
            stylesheet: stylesheet.map(Arc::from),
        }
    }
}

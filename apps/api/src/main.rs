mod assets;
mod catalog;
mod config;
mod errors;
mod recommend;
mod routes;
mod shell;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::{AssetLoader, CARD_TEMPLATE_FILE};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::recommend::renderer::select_renderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillmap v{}", env!("CARGO_PKG_VERSION"));

    // Static catalog; logs any skill → job links with no details
    let catalog = Catalog::builtin();

    // Optional assets; absence never blocks startup
    let assets = AssetLoader::new(&config.assets_dir);
    let stylesheet = assets.load_stylesheet().await;
    let card_renderer = select_renderer(assets.load(CARD_TEMPLATE_FILE).await);
    info!(
        "Assets dir: {} (renderer: {})",
        config.assets_dir.display(),
        card_renderer.backend()
    );

    let state = AppState::new(&config, catalog, card_renderer, stylesheet);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

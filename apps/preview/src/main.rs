mod config;
mod errors;
mod layout;
mod locale;
mod models;
mod preview;
mod routes;
mod state;
mod store;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::preview::PreviewHost;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::InMemoryResumeStore;
use crate::templates::{default_templates, OutlineRenderer, TemplateRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume preview v{}", env!("CARGO_PKG_VERSION"));

    let registry = TemplateRegistry::new(default_templates())?;
    info!(
        "Template registry loaded: {} templates, default '{}'",
        registry.all().len(),
        registry.default_template().id
    );
    info!(
        "Preview throttle {}ms, locale {}",
        config.throttle_ms, config.locale
    );

    let state = AppState {
        config: config.clone(),
        store: Arc::new(InMemoryResumeStore::new()),
        registry: Arc::new(registry),
        renderer: Arc::new(OutlineRenderer),
        preview: Arc::new(PreviewHost::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor shell has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

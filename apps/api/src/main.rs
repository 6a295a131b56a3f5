mod analysis;
mod config;
mod detail;
mod errors;
mod llm_client;
mod models;
mod narrative;
mod random;
mod roster;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::narrative::{GeminiNarrator, NarrativeAdapter, UnavailableNarrator};
use crate::roster::seed::seed_prospects;
use crate::roster::store::ProspectStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric settings)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the record store
    let store = ProspectStore::seed(seed_prospects()?).context("Failed to seed prospect store")?;

    // Initialize narrative adapter
    let narrator = build_narrator(&config)?;

    if let Some(seed) = config.random_seed {
        info!("Random source seeded with {seed}");
    }
    info!(
        "Fit analysis delay: {}ms",
        config.fit_analysis_delay.as_millis()
    );

    let state = AppState::new(store, narrator, &config);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_narrator(config: &Config) -> Result<Arc<dyn NarrativeAdapter>> {
    match &config.gemini_api_key {
        Some(key) => {
            let narrator = GeminiNarrator::from_credentials(
                key.clone(),
                config.gemini_base_url.clone(),
                config.narrative_timeout,
            )
            .context("Failed to build Gemini HTTP client")?;
            info!("Narrative adapter: Gemini (model: {})", llm_client::MODEL);
            Ok(Arc::new(narrator))
        }
        None => {
            warn!("GEMINI_API_KEY not set; narratives will return the unavailable message");
            Ok(Arc::new(UnavailableNarrator))
        }
    }
}

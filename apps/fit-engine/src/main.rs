mod config;
mod embeddings;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embeddings::{CachedEmbeddings, EmbeddingClient};
use crate::llm_client::LlmClient;
use crate::matching::ontology::SoftSkillOntology;
use crate::matching::FitEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars or invalid engine settings)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fit Engine v{}", env!("CARGO_PKG_VERSION"));

    // Similarity backend: embedding provider behind a process-wide cache
    let embedder = EmbeddingClient::new(
        config.embeddings_api_url.clone(),
        config.embeddings_api_key.clone(),
        config.embeddings_model.clone(),
    )?;
    info!("Embedding client initialized (model: {})", embedder.model());
    let similarity = Arc::new(CachedEmbeddings::new(
        embedder,
        config.embedding_cache_max_entries,
        config.embedding_cache_idle,
    ));
    info!(
        "Embedding cache: up to {} entries, {}s idle expiry",
        config.embedding_cache_max_entries,
        config.embedding_cache_idle.as_secs()
    );

    // Judge backend
    let judge = Arc::new(LlmClient::new(
        config.anthropic_api_key.clone(),
        config.engine.scorer_timeout,
    )?);
    info!("LLM judge initialized (model: {})", llm_client::MODEL);

    let ontology = match &config.soft_skill_ontology_path {
        Some(path) => SoftSkillOntology::from_json_file(path)?,
        None => SoftSkillOntology::default(),
    };
    info!("Soft-skill ontology loaded ({} terms)", ontology.len());

    let engine = FitEngine::new(config.engine.clone(), Arc::new(ontology), similarity, judge)?;
    info!(
        "Fit engine ready: alpha {}, scorer timeout {}ms",
        engine.config().alpha,
        engine.config().scorer_timeout.as_millis()
    );

    // Build router
    let app = build_router(AppState { engine })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

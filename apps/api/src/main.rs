mod chat;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::interpreter::QueryInterpreter;
use crate::chat::orchestrator::ChatOrchestrator;
use crate::chat::summarizer::ResultSummarizer;
use crate::config::{Config, LlmProvider};
use crate::jobs::adzuna::AdzunaClient;
use crate::jobs::JobSource;
use crate::llm_client::{AnthropicBackend, GroqBackend, LlmBackend};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},tower_http={level}",
                env!("CARGO_PKG_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Search AI API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize job search client
    let adzuna = AdzunaClient::new(config.adzuna_app_id.clone(), config.adzuna_app_key.clone())
        .context("Failed to build Adzuna HTTP client")?;
    info!(
        "Adzuna client initialized (credentials configured: {})",
        adzuna.has_credentials()
    );
    let jobs: Arc<dyn JobSource> = Arc::new(adzuna);

    // Initialize LLM backend
    let llm = build_llm_backend(&config)?;
    info!(
        "LLM backend initialized ({:?}, model: {})",
        config.llm_provider,
        llm.model()
    );

    let interpreter = QueryInterpreter::new(llm.clone());
    let mut orchestrator = ChatOrchestrator::new(interpreter, jobs.clone());
    if config.enable_llm_summary {
        orchestrator = orchestrator.with_summarizer(ResultSummarizer::new(llm));
        info!("LLM result summaries enabled");
    }

    let state = AppState {
        jobs,
        chat: Arc::new(orchestrator),
    };

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_allowed_origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN must be a valid header value")?,
        )
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the configured LLM vendor behind the shared trait.
fn build_llm_backend(config: &Config) -> Result<Arc<dyn LlmBackend>> {
    if config.llm_api_key.is_none() {
        warn!(
            "{} not set; chat will answer with an apology until it is configured",
            config.llm_provider.api_key_var()
        );
    }

    let api_key = config.llm_api_key.clone();
    let timeout = Duration::from_secs(config.llm_timeout_secs);

    let llm: Arc<dyn LlmBackend> = match config.llm_provider {
        LlmProvider::Groq => Arc::new(
            GroqBackend::new(api_key, timeout).context("Failed to build Groq HTTP client")?,
        ),
        LlmProvider::Anthropic => Arc::new(
            AnthropicBackend::new(api_key, timeout)
                .context("Failed to build Anthropic HTTP client")?,
        ),
    };
    Ok(llm)
}

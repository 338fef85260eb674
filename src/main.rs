use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use agentic_enterprise::adapters::http::{build_router, ApiServices};
use agentic_enterprise::adapters::{
    GeminiConfig, GeminiIntentExtractor, InMemoryBaselineStore, KeywordIntentExtractor,
    SpreadsheetTableParser,
};
use agentic_enterprise::config::{AppConfig, IntentConfig};
use agentic_enterprise::ports::IntentExtractor;
use secrecy::ExposeSecret;

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn intent_extractor(config: &IntentConfig) -> Arc<dyn IntentExtractor> {
    match config.gemini_api_key.as_ref() {
        Some(key) if config.is_configured() => {
            let gemini = GeminiConfig::new(key.expose_secret().clone())
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout());
            Arc::new(GeminiIntentExtractor::new(gemini))
        }
        _ => Arc::new(KeywordIntentExtractor::new()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_logging(&config);
    config.validate().context("validating configuration")?;

    let extractor = intent_extractor(&config.intent);
    let info = extractor.extractor_info();
    tracing::info!(
        extractor = %info.name,
        model = info.model.as_deref().unwrap_or("none"),
        remote = info.remote,
        "intent extractor selected"
    );

    let services = ApiServices {
        intent_extractor: extractor,
        baseline_store: Arc::new(InMemoryBaselineStore::new()),
        table_parser: Arc::new(SpreadsheetTableParser::new()),
        extraction_timeout: config.intent.timeout(),
    };
    let app = build_router(&services, &config.http_settings());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "agentic-enterprise api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    tracing::info!("agentic-enterprise api stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}

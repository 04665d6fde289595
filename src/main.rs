use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use translation_status_matrix::category::ReportStore;
use translation_status_matrix::config::Config;
use translation_status_matrix::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_status_matrix=info".parse()?),
        )
        .init();

    info!("Starting translation status matrix server");

    let config = Config::from_env()?;

    let store = ReportStore::load_dir(&config.data_dir)
        .with_context(|| format!("Failed to load reports from {}", config.data_dir.display()))?;
    if store.is_empty() {
        anyhow::bail!("No category reports found in {}", config.data_dir.display());
    }
    info!("Loaded {} categories", store.len());

    let state = AppState {
        store: Arc::new(store),
        default_page_size: config.default_page_size,
        preferred_languages: config.preferred_languages.clone(),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

use tracing_subscriber::EnvFilter;

use runbook_search::api;
use runbook_search::config::Config;
use runbook_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("GitHub API: {}", config.github.api_base_url);
    if config.github.token.is_none() {
        tracing::warn!("GITHUB_TOKEN is not set; code search requests will be rate limited");
    }
    tracing::info!(
        "Profiles: runbook={} prompts={}",
        config.runbook.target_repo,
        config.prompts.target_repo
    );

    let state = AppState::new(config.clone())?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

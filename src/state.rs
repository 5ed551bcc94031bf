use std::sync::Arc;

use crate::config::Config;
use crate::github::{CodeHost, GitHubClient};
use crate::query::SynonymTable;
use crate::search::SearchEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: SearchEngine,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let host: Arc<dyn CodeHost> = Arc::new(GitHubClient::new(&config.github)?);
        let synonyms = Arc::new(SynonymTable::load(&config.synonyms_path));
        Ok(Self::with_host(config, host, synonyms))
    }

    /// Build state around an arbitrary code host.
    pub fn with_host(config: Config, host: Arc<dyn CodeHost>, synonyms: Arc<SynonymTable>) -> Self {
        let engine =
            SearchEngine::with_hydration_concurrency(host, synonyms, config.hydration_concurrency);
        Self {
            config: Arc::new(config),
            engine,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::retrieval::DEFAULT_HYDRATION_CONCURRENCY;
use crate::search::SearchConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// JSON file mapping a term to its synonyms
    pub synonyms_path: PathBuf,
    /// GitHub API configuration
    pub github: GitHubConfig,
    /// Maximum concurrent content fetches per engine
    pub hydration_concurrency: usize,
    /// Preset for the runbook repository
    pub runbook: SearchProfile,
    /// Preset for the prompt repository
    pub prompts: SearchProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API root. Point at `https://<host>/api/v3` for GitHub Enterprise.
    pub api_base_url: String,
    /// Personal access token. Unauthenticated requests get a much lower rate limit.
    pub token: Option<String>,
    /// Request timeout in seconds (capped at 120).
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// A named preset: which repository to search and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProfile {
    pub target_repo: String,
    pub additional_qualifiers: Vec<String>,
    pub max_remote_results: usize,
    pub max_final_results: usize,
}

impl SearchProfile {
    pub fn runbook() -> Self {
        Self {
            target_repo: "dwarvesf/runbook".to_string(),
            additional_qualifiers: vec!["language:markdown".to_string(), "in:file,path".to_string()],
            max_remote_results: 30,
            max_final_results: 5,
        }
    }

    pub fn prompts() -> Self {
        Self {
            target_repo: "dwarvesf/prompt-db".to_string(),
            additional_qualifiers: vec![
                "-path:synced_prompts".to_string(),
                "in:file,path".to_string(),
            ],
            max_remote_results: 30,
            max_final_results: 5,
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            target_repo: self.target_repo.clone(),
            additional_qualifiers: self.additional_qualifiers.clone(),
            max_remote_results: self.max_remote_results,
            max_final_results: self.max_final_results,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9100".to_string(),
            synonyms_path: PathBuf::from("./data/synonyms.json"),
            github: GitHubConfig::default(),
            hydration_concurrency: DEFAULT_HYDRATION_CONCURRENCY,
            runbook: SearchProfile::runbook(),
            prompts: SearchProfile::prompts(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` on top of the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("RUNBOOK_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(path) = lookup("RUNBOOK_SEARCH_SYNONYMS_PATH") {
            config.synonyms_path = PathBuf::from(path);
        }
        if let Some(val) = lookup("RUNBOOK_SEARCH_HYDRATION_CONCURRENCY") {
            if let Ok(v) = val.parse::<usize>() {
                config.hydration_concurrency = v.max(1);
            }
        }
        if let Some(repo) = lookup("RUNBOOK_SEARCH_RUNBOOK_REPO") {
            config.runbook.target_repo = repo;
        }
        if let Some(repo) = lookup("RUNBOOK_SEARCH_PROMPTS_REPO") {
            config.prompts.target_repo = repo;
        }

        // GitHub config
        if let Some(url) = lookup("GITHUB_API_URL") {
            config.github.api_base_url = url;
        }
        if let Some(token) = lookup("GITHUB_TOKEN") {
            if !token.trim().is_empty() {
                config.github.token = Some(token);
            }
        }
        if let Some(val) = lookup("GITHUB_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.github.timeout_secs = v.min(120); // Cap at 120s
            }
        }

        config
    }
}

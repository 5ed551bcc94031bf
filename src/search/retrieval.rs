use std::collections::HashSet;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures_util::future::join_all;
use tokio::sync::Semaphore;

use crate::error::Result;
use crate::github::{CodeHost, Contents};
use crate::models::{Candidate, RankedCandidate};
use crate::query::{QueryString, QueryStringBuilder, SynonymTable, TargetRepo, TermExtractor};
use crate::search::ranker::Ranker;

/// Default upper bound on concurrent content fetches.
pub const DEFAULT_HYDRATION_CONCURRENCY: usize = 8;

/// Per-invocation search parameters.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// `owner/name`
    pub target_repo: String,
    pub additional_qualifiers: Vec<String>,
    /// Cap on unique candidates kept after merging, applied before hydration.
    pub max_remote_results: usize,
    pub max_final_results: usize,
}

impl SearchConfig {
    pub fn new(target_repo: impl Into<String>) -> Self {
        Self {
            target_repo: target_repo.into(),
            additional_qualifiers: Vec::new(),
            max_remote_results: 30,
            max_final_results: 10,
        }
    }
}

/// Multi-query retrieval over a [`CodeHost`] followed by local re-ranking.
///
/// Pipeline:
///   1. Term extraction + synonym expansion
///   2. Up to 4 query strings
///   3. Concurrent remote searches, each failure isolated
///   4. Dedupe by path (first occurrence wins), cap at `max_remote_results`
///   5. Concurrent content hydration (bounded)
///   6. Fuzzy re-rank, cap at `max_final_results`
#[derive(Clone)]
pub struct SearchEngine {
    host: Arc<dyn CodeHost>,
    synonyms: Arc<SynonymTable>,
    ranker: Ranker,
    hydration_semaphore: Arc<Semaphore>,
}

impl SearchEngine {
    pub fn new(host: Arc<dyn CodeHost>, synonyms: Arc<SynonymTable>) -> Self {
        Self::with_hydration_concurrency(host, synonyms, DEFAULT_HYDRATION_CONCURRENCY)
    }

    pub fn with_hydration_concurrency(
        host: Arc<dyn CodeHost>,
        synonyms: Arc<SynonymTable>,
        concurrency: usize,
    ) -> Self {
        Self {
            host,
            synonyms,
            ranker: Ranker::default(),
            hydration_semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Run the full pipeline for `raw_query`.
    ///
    /// Remote failures never surface here: a failed search contributes no
    /// candidates and a failed fetch drops its candidate. The only error is
    /// a malformed `target_repo`.
    pub async fn perform_search(
        &self,
        raw_query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<RankedCandidate>> {
        if raw_query.trim().is_empty() {
            return Ok(Vec::new());
        }

        // ── Step 1: Term extraction ─────────────────────────────
        let parts = TermExtractor::new(&self.synonyms).expand(raw_query);
        if parts.is_empty() {
            tracing::warn!("Query produced no terms, returning no results");
            return Ok(Vec::new());
        }

        // ── Step 2: Query strings ───────────────────────────────
        let queries = QueryStringBuilder::new(&self.synonyms).build(
            &parts,
            &config.target_repo,
            &config.additional_qualifiers,
        )?;
        if queries.is_empty() {
            tracing::warn!("Query building produced no query strings");
            return Ok(Vec::new());
        }
        let target = TargetRepo::parse(&config.target_repo)?;

        // ── Step 3: Remote search fan-out ───────────────────────
        let merged = self
            .search_all(&target, &queries, config.max_remote_results)
            .await;

        // ── Step 4: Dedupe + cap ────────────────────────────────
        let mut unique = dedupe_by_path(merged);
        unique.truncate(config.max_remote_results);
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        // ── Step 5: Hydration ───────────────────────────────────
        let hydrated = self.hydrate(&target, unique).await;

        // ── Step 6: Local re-rank ───────────────────────────────
        let mut ranked = self.ranker.rank(hydrated, &parts.original_query);
        ranked.truncate(config.max_final_results);

        tracing::info!(
            "Search '{}' in {}: {} queries, {} ranked results",
            parts.original_query,
            target,
            queries.len(),
            ranked.len()
        );
        Ok(ranked)
    }

    /// Issue every query concurrently and concatenate results in submission order.
    async fn search_all(
        &self,
        target: &TargetRepo,
        queries: &[QueryString],
        per_page: usize,
    ) -> Vec<Candidate> {
        let handles: Vec<_> = queries
            .iter()
            .map(|query| {
                let host = Arc::clone(&self.host);
                let target = target.clone();
                let query = query.clone();
                tokio::spawn(async move {
                    match host.search_code(&target, query.as_str(), per_page).await {
                        Ok(items) => items,
                        Err(e) => {
                            tracing::warn!("Search failed for query '{query}': {e:#}");
                            Vec::new()
                        }
                    }
                })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .flat_map(|outcome| {
                outcome.unwrap_or_else(|e| {
                    tracing::warn!("Search task aborted: {e}");
                    Vec::new()
                })
            })
            .collect()
    }

    /// Fetch and decode content for each candidate. Order is preserved.
    async fn hydrate(&self, target: &TargetRepo, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let mut handles = Vec::with_capacity(candidates.len());
        for mut candidate in candidates {
            let host = Arc::clone(&self.host);
            let sem = Arc::clone(&self.hydration_semaphore);
            let target = target.clone();
            let handle = tokio::spawn(async move {
                let _permit = sem.acquire().await;
                candidate.full_content = match host.get_contents(&target, &candidate.path).await {
                    Ok(contents) => decode_contents(&candidate.path, contents),
                    Err(e) => {
                        tracing::warn!("Failed to fetch content for {}: {e:#}", candidate.path);
                        None
                    }
                };
                candidate
            });
            handles.push(handle);
        }

        let mut hydrated = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(candidate) => hydrated.push(candidate),
                Err(e) => tracing::warn!("Hydration task aborted: {e}"),
            }
        }
        hydrated
    }
}

/// Keep the first candidate seen for each path.
pub fn dedupe_by_path(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.path.clone()))
        .collect()
}

/// Turn a contents response into file text. Directories and undecodable
/// payloads yield `None`.
pub fn decode_contents(path: &str, contents: Contents) -> Option<String> {
    match contents {
        Contents::File {
            content: Some(content),
            encoding,
        } => match encoding.as_deref() {
            Some("base64") => {
                // The API wraps base64 payloads at 60 columns.
                let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
                match STANDARD.decode(compact) {
                    Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                    Err(e) => {
                        tracing::warn!("Invalid base64 content for {path}: {e}");
                        None
                    }
                }
            }
            other => {
                tracing::warn!("Unexpected content encoding for {path}: {other:?}");
                Some(content)
            }
        },
        Contents::File { content: None, .. } => None,
        Contents::Directory(_) => {
            tracing::warn!("Expected file content but received directory listing for {path}");
            None
        }
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::config::SearchProfile;
use crate::error::SearchError;
use crate::models::{
    KeywordRequest, RankedCandidate, SearchRequest, SearchResponse, SearchResultItem,
};
use crate::search::SearchConfig;
use crate::state::AppState;

/// Content-derived snippets are cut at this many characters.
const SNIPPET_CHARS: usize = 200;
const NO_SNIPPET: &str = "No snippet available";

/// POST /api/search - Search an arbitrary repository:
///   1. Term extraction + synonym expansion
///   2. Up to 4 GitHub code searches, merged and deduped
///   3. Content hydration
///   4. Local fuzzy re-ranking
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query is required".to_string()));
    }

    let defaults = SearchConfig::new(req.target_repo.trim());
    let config = SearchConfig {
        additional_qualifiers: req.additional_qualifiers,
        max_remote_results: req.max_remote_results.unwrap_or(defaults.max_remote_results),
        max_final_results: req.max_final_results.unwrap_or(defaults.max_final_results),
        ..defaults
    };

    let ranked = state
        .engine
        .perform_search(&query, &config)
        .await
        .map_err(|e| match e {
            SearchError::InvalidTarget(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        })?;

    let results: Vec<SearchResultItem> = ranked.into_iter().map(to_result_item).collect();
    let message = format!("Found and ranked {} results for \"{query}\".", results.len());

    Ok(Json(SearchResponse {
        query,
        results,
        message,
    }))
}

/// POST /api/runbook/search - Search the runbook repository
pub async fn search_runbook(
    State(state): State<AppState>,
    Json(req): Json<KeywordRequest>,
) -> Json<SearchResponse> {
    let profile = state.config.runbook.clone();
    Json(profile_search(&state, &profile, "runbook", req.keyword, "").await)
}

/// POST /api/prompts/search - Search the prompt repository
pub async fn search_prompts(
    State(state): State<AppState>,
    Json(req): Json<KeywordRequest>,
) -> Json<SearchResponse> {
    let profile = state.config.prompts.clone();
    Json(profile_search(&state, &profile, "prompt", req.keyword, " in prompt-db").await)
}

/// Run a preset search. Failures are reported in `message` with no results.
async fn profile_search(
    state: &AppState,
    profile: &SearchProfile,
    kind: &str,
    keyword: String,
    scope_suffix: &str,
) -> SearchResponse {
    tracing::info!("Handling {kind} search for keyword: {keyword}");

    match state
        .engine
        .perform_search(&keyword, &profile.search_config())
        .await
    {
        Ok(ranked) => {
            let results: Vec<SearchResultItem> = ranked.into_iter().map(to_result_item).collect();
            let message = format!(
                "Found and ranked {} results for \"{keyword}\"{scope_suffix}.",
                results.len()
            );
            SearchResponse {
                query: keyword,
                results,
                message,
            }
        }
        Err(e) => {
            tracing::warn!("Error during {kind} search for keyword \"{keyword}\": {e}");
            SearchResponse {
                query: keyword,
                results: Vec::new(),
                message: format!("An error occurred during {kind} search: {e}"),
            }
        }
    }
}

fn to_result_item(candidate: RankedCandidate) -> SearchResultItem {
    let snippet = snippet(&candidate);
    SearchResultItem {
        path: candidate.path,
        snippet,
        full_content: Some(candidate.full_content),
        url: candidate.url,
        score: candidate.score,
    }
}

/// First text-match fragment, else the head of the content.
fn snippet(candidate: &RankedCandidate) -> String {
    if let Some(fragment) = candidate
        .text_matches
        .first()
        .and_then(|tm| tm.fragment.as_deref())
        .filter(|f| !f.is_empty())
    {
        return fragment.to_string();
    }

    let content = candidate.full_content.as_str();
    if content.is_empty() {
        return NO_SNIPPET.to_string();
    }
    match content.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

pub mod search;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// GET /api/health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// All HTTP routes, bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/search", post(search::search))
        .route("/api/runbook/search", post(search::search_runbook))
        .route("/api/prompts/search", post(search::search_prompts))
        .with_state(state)
}

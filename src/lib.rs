//! # runbook-search
//!
//! Searches a single GitHub repository with several lexical queries derived
//! from one natural-language query, then re-ranks the merged hits locally
//! with fuzzy matching over filename, path and file content.
//!
//! ## Architecture
//!
//! ```text
//!                          ┌─────────────┐
//!                          │  Raw Query  │
//!                          └──────┬──────┘
//!                                 │
//!                                 ▼
//!                     ┌───────────────────────┐
//!                     │    Term Extraction    │
//!                     │ nouns > verbs > adjs  │
//!                     │ + one synonym level   │
//!                     └───────────┬───────────┘
//!                                 │ core + expanded terms
//!                                 ▼
//!                     ┌───────────────────────┐
//!                     │ Query String Builder  │
//!                     │ base + substitutions  │
//!                     │ (breadth first, ≤ 4)  │
//!                     └───────────┬───────────┘
//!            ┌────────────┬───────┴────┬────────────┐
//!            ▼            ▼            ▼            ▼
//!      ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐
//!      │ search 1 │ │ search 2 │ │ search 3 │ │ search 4 │
//!      └────┬─────┘ └────┬─────┘ └────┬─────┘ └────┬─────┘
//!           └────────────┴──────┬─────┴────────────┘
//!                               ▼
//!                  ┌───────────────────────┐
//!                  │ Merge + Dedupe (path) │
//!                  │ first occurrence wins │
//!                  │ keep max_remote (30)  │
//!                  └───────────┬───────────┘
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │  Hydrate (bounded)    │
//!                  │  base64 file content  │
//!                  └───────────┬───────────┘
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │   Fuzzy Re-rank       │
//!                  │ name.4 path.3 body.3  │
//!                  │ lower score = better  │
//!                  └───────────┬───────────┘
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │ Top max_final results │
//!                  └───────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration: bind address, GitHub API, search profiles
//! - [`error`] - `SearchError`, the one error that crosses the pipeline boundary
//! - [`models`] - Candidates, text matches and HTTP request/response types
//! - [`query::terms`] - Heuristic part-of-speech term extraction and synonym expansion
//! - [`query::builder`] - Repository-scoped query strings with synonym substitution
//! - [`query::synonyms`] - JSON-backed synonym table
//! - [`github`] - `CodeHost` trait and its GitHub REST implementation
//! - [`search::retrieval`] - Concurrent search fan-out, dedupe and content hydration
//! - [`search::fuzzy`] - Per-field fuzzy distance built on `nucleo-matcher`
//! - [`search::ranker`] - Weighted multi-field fuzzy scoring
//! - [`api`] - Axum HTTP handlers for generic and profile searches
//! - [`state`] - Shared application state holding config and the search engine

pub mod api;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod query;
pub mod search;
pub mod state;

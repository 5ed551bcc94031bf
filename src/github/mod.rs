//! Remote code host: lexical search and file content retrieval.

pub mod client;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Candidate;
use crate::query::TargetRepo;

pub use client::GitHubClient;

/// Result of a content fetch: a single file or a directory listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Contents {
    File {
        content: Option<String>,
        encoding: Option<String>,
    },
    Directory(Vec<String>),
}

/// The two remote operations the retrieval pipeline needs.
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// Run one lexical search and return items in the host's own order.
    async fn search_code(
        &self,
        repo: &TargetRepo,
        query: &str,
        per_page: usize,
    ) -> Result<Vec<Candidate>>;

    /// Fetch the object stored at `path`.
    async fn get_contents(&self, repo: &TargetRepo, path: &str) -> Result<Contents>;
}

//! GitHub REST implementation of [`CodeHost`].

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use super::{CodeHost, Contents};
use crate::config::GitHubConfig;
use crate::models::{null_as_default, Candidate, TextMatch};
use crate::query::TargetRepo;

const USER_AGENT: &str = concat!("runbook-search/", env!("CARGO_PKG_VERSION"));
const TEXT_MATCH_MEDIA_TYPE: &str = "application/vnd.github.text-match+json";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// The search API never returns more than 100 items per page.
const MAX_PER_PAGE: usize = 100;

pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build GitHub HTTP client")?;

        let base_url = Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", config.api_base_url))?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("GitHub API URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url, accept: &str) -> reqwest::RequestBuilder {
        let req = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl CodeHost for GitHubClient {
    async fn search_code(
        &self,
        _repo: &TargetRepo,
        query: &str,
        per_page: usize,
    ) -> Result<Vec<Candidate>> {
        // The repo scope is already part of the query string.
        let url = self.endpoint(["search", "code"])?;
        let per_page = per_page.clamp(1, MAX_PER_PAGE).to_string();

        let resp = self
            .get(url, TEXT_MATCH_MEDIA_TYPE)
            .query(&[("q", query), ("per_page", per_page.as_str())])
            .send()
            .await
            .context("Failed to call GitHub code search")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GitHub code search returned {status}: {body}");
        }

        let body: SearchCodeResponse = resp
            .json()
            .await
            .context("Failed to parse GitHub code search response")?;

        Ok(body.items.into_iter().map(Candidate::from).collect())
    }

    async fn get_contents(&self, repo: &TargetRepo, path: &str) -> Result<Contents> {
        let mut segments = vec!["repos", repo.owner.as_str(), repo.name.as_str(), "contents"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        let url = self.endpoint(segments)?;

        let resp = self
            .get(url, JSON_MEDIA_TYPE)
            .send()
            .await
            .with_context(|| format!("Failed to fetch contents of {path}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GitHub contents API returned {status} for {path}: {body}");
        }

        let body: ContentsResponse = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse contents response for {path}"))?;

        Ok(body.into())
    }
}

// ─── Wire types ────────────────────────────────────────

#[derive(Deserialize)]
struct SearchCodeResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    name: String,
    path: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    text_matches: Vec<TextMatch>,
}

impl From<SearchItem> for Candidate {
    fn from(item: SearchItem) -> Self {
        Candidate {
            path: item.path,
            name: item.name,
            url: item.html_url,
            score: item.score,
            text_matches: item.text_matches,
            full_content: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Directory(Vec<DirectoryEntry>),
    File(FileEntry),
}

#[derive(Deserialize)]
struct DirectoryEntry {
    #[serde(default)]
    path: String,
}

#[derive(Deserialize)]
struct FileEntry {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

impl From<ContentsResponse> for Contents {
    fn from(resp: ContentsResponse) -> Self {
        match resp {
            ContentsResponse::Directory(entries) => {
                Contents::Directory(entries.into_iter().map(|e| e.path).collect())
            }
            ContentsResponse::File(file) => Contents::File {
                content: file.content,
                encoding: file.encoding,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GitHubClient {
        GitHubClient::new(&GitHubConfig {
            api_base_url: base.to_string(),
            ..GitHubConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_search_response_with_text_matches() {
        let json = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "name": "slow-queries.md",
                "path": "db/slow-queries.md",
                "sha": "abc",
                "html_url": "https://github.com/acme/runbook/blob/main/db/slow-queries.md",
                "score": 1.0,
                "text_matches": [{
                    "object_url": "https://api.github.com/x",
                    "object_type": "FileContent",
                    "property": "content",
                    "fragment": "When queries are slow",
                    "matches": [{"text": "slow", "indices": [17, 21]}]
                }]
            }]
        }"#;
        let body: SearchCodeResponse = serde_json::from_str(json).unwrap();
        let candidates: Vec<Candidate> = body.items.into_iter().map(Candidate::from).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, "db/slow-queries.md");
        assert_eq!(candidates[0].text_matches[0].matches[0].indices, vec![17, 21]);
        assert_eq!(candidates[0].full_content, None);
    }

    #[test]
    fn test_parse_search_item_without_text_matches() {
        let json = r#"{"items": [{"name": "a.md", "path": "a.md", "html_url": "u", "score": 0.5, "text_matches": null}]}"#;
        let body: SearchCodeResponse = serde_json::from_str(json).unwrap();
        assert!(body.items[0].text_matches.is_empty());
    }

    #[test]
    fn test_parse_contents_file() {
        let json = r#"{"type": "file", "encoding": "base64", "content": "aGVsbG8=\n", "path": "a.md"}"#;
        let contents: Contents = serde_json::from_str::<ContentsResponse>(json).unwrap().into();
        assert_eq!(
            contents,
            Contents::File {
                content: Some("aGVsbG8=\n".to_string()),
                encoding: Some("base64".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_contents_directory() {
        let json = r#"[{"type": "file", "path": "docs/a.md"}, {"type": "dir", "path": "docs/b"}]"#;
        let contents: Contents = serde_json::from_str::<ContentsResponse>(json).unwrap().into();
        assert_eq!(
            contents,
            Contents::Directory(vec!["docs/a.md".to_string(), "docs/b".to_string()])
        );
    }

    #[test]
    fn test_endpoint_encodes_path_segments() {
        let c = client("https://api.github.com");
        let url = c
            .endpoint(["repos", "acme", "runbook", "contents", "my notes", "a#b.md"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/acme/runbook/contents/my%20notes/a%23b.md"
        );
    }

    #[test]
    fn test_endpoint_keeps_enterprise_prefix() {
        let c = client("https://ghe.example.com/api/v3/");
        let url = c.endpoint(["search", "code"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/search/code");
    }
}

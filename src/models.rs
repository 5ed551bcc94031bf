use serde::{Deserialize, Deserializer, Serialize};

/// A file returned by a remote search, before local ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Unique key within one search.
    pub path: String,
    pub name: String,
    pub url: String,
    /// Relevance assigned by the remote API. Not comparable to local scores.
    pub score: f64,
    pub text_matches: Vec<TextMatch>,
    /// `None` until hydrated, and after a failed or non-file fetch.
    pub full_content: Option<String>,
}

/// A matched snippet reported by the search API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextMatch {
    #[serde(default)]
    pub object_url: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<MatchSpan>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatchSpan {
    #[serde(default)]
    pub text: Option<String>,
    /// Character offsets of the match inside the fragment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub indices: Vec<usize>,
}

/// A hydrated candidate scored locally. Lower `score` is a better match.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub path: String,
    pub name: String,
    pub url: String,
    /// Local relevance in `[0, 1]`.
    pub score: f64,
    pub text_matches: Vec<TextMatch>,
    pub full_content: String,
}

/// Treat an explicit JSON `null` the same as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Search request for an arbitrary repository
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub target_repo: String,
    #[serde(default)]
    pub additional_qualifiers: Vec<String>,
    pub max_remote_results: Option<usize>,
    pub max_final_results: Option<usize>,
}

/// Search request for one of the preset profiles
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRequest {
    pub keyword: String,
}

/// One result as returned to HTTP callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    pub path: String,
    pub snippet: String,
    pub full_content: Option<String>,
    pub url: String,
    pub score: f64,
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub message: String,
}

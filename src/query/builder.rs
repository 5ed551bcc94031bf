//! Turns extracted terms into a small, ordered set of remote search queries.

use std::fmt;

use super::synonyms::SynonymTable;
use super::terms::QueryParts;
use crate::error::{Result, SearchError};

/// Maximum number of query strings generated per search.
pub const MAX_QUERIES: usize = 4;

/// Number of expanded terms used for the base query when there are no core terms.
const FALLBACK_TERM_COUNT: usize = 3;

/// A repository identifier of the form `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRepo {
    pub owner: String,
    pub name: String,
}

impl TargetRepo {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let mut parts = raw.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if is_repo_segment(owner) && is_repo_segment(name) => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(SearchError::InvalidTarget(raw.to_string())),
        }
    }
}

/// Non-empty and free of whitespace, which would split the `repo:` qualifier.
fn is_repo_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(char::is_whitespace)
}

impl fmt::Display for TargetRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A structured search expression: terms, one `repo:` qualifier, extra qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryString(String);

impl QueryString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the query strings for one search invocation.
pub struct QueryStringBuilder<'a> {
    synonyms: &'a SynonymTable,
    budget: usize,
}

impl<'a> QueryStringBuilder<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self {
            synonyms,
            budget: MAX_QUERIES,
        }
    }

    /// Generate up to [`MAX_QUERIES`] distinct query strings scoped to `target_repo`.
    ///
    /// Order: the base query, then single-term synonym substitutions sweeping
    /// every core term at synonym depth 0 before any term at depth 1, and so
    /// on. When neither produces anything, one broad `OR` query over all
    /// expanded terms.
    pub fn build(
        &self,
        parts: &QueryParts,
        target_repo: &str,
        extra_qualifiers: &[String],
    ) -> Result<Vec<QueryString>> {
        let target = TargetRepo::parse(target_repo)?;
        let suffix = qualifier_suffix(&target, extra_qualifiers);
        let core = &parts.core_terms;

        let mut queries: Vec<QueryString> = Vec::new();

        if !core.is_empty() {
            queries.push(assemble(&quote_terms(core), " ", &suffix));
        } else if !parts.expanded_terms.is_empty() {
            let fallback: Vec<String> = parts
                .expanded_terms
                .iter()
                .take(FALLBACK_TERM_COUNT)
                .cloned()
                .collect();
            queries.push(assemble(&quote_terms(&fallback), " ", &suffix));
        }

        if queries.len() < self.budget && !core.is_empty() {
            let max_depth = core
                .iter()
                .map(|term| self.synonyms.get(term).len())
                .max()
                .unwrap_or(0);

            'depth: for depth in 0..max_depth {
                for (idx, term) in core.iter().enumerate() {
                    if queries.len() >= self.budget {
                        break 'depth;
                    }
                    let Some(synonym) = self.synonyms.get(term).get(depth) else {
                        continue;
                    };
                    if synonym.to_lowercase() == term.to_lowercase() {
                        continue;
                    }
                    let mut substituted = core.clone();
                    substituted[idx] = synonym.clone();
                    let query = assemble(&quote_terms(&substituted), " ", &suffix);
                    if !queries.contains(&query) {
                        queries.push(query);
                    }
                }
            }
        }

        if queries.is_empty() && !parts.expanded_terms.is_empty() {
            queries.push(assemble(&quote_terms(&parts.expanded_terms), " OR ", &suffix));
        }

        let mut unique: Vec<QueryString> = Vec::with_capacity(queries.len());
        for query in queries {
            if !unique.contains(&query) {
                unique.push(query);
            }
        }
        unique.truncate(self.budget);

        for query in &unique {
            tracing::debug!("Generated query: {query}");
        }
        Ok(unique)
    }
}

fn qualifier_suffix(target: &TargetRepo, extra_qualifiers: &[String]) -> String {
    format!("repo:{} {}", target, extra_qualifiers.join(" "))
}

fn assemble(terms: &[String], separator: &str, suffix: &str) -> QueryString {
    let raw = format!("{} {}", terms.join(separator), suffix);
    QueryString(collapse_whitespace(&raw))
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn quote_terms(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| quote_term(t)).collect()
}

/// Quote a term that would otherwise break the search grammar.
pub fn quote_term(term: &str) -> String {
    if term.contains(char::is_whitespace) || term.contains(':') || term.contains('"') {
        format!("\"{}\"", term.replace('"', "\\\""))
    } else {
        term.to_string()
    }
}

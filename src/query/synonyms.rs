//! Synonym dictionary used for query broadening and substitution queries.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Read-only mapping from a lowercase term to its ordered alternates.
///
/// Loaded once at startup and shared by reference; lookups never mutate.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table from a JSON file. A missing or malformed file degrades
    /// to an empty table.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(table) => {
                tracing::info!(
                    "Loaded {} synonym entries from {}",
                    table.len(),
                    path.display()
                );
                table
            }
            Err(e) => {
                tracing::warn!("Synonyms unavailable, continuing without: {e:#}");
                Self::empty()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Parse a JSON object of `term -> [alternates]`. Keys are lowercased.
    pub fn from_json(raw: &str) -> Result<Self> {
        let map: HashMap<String, Vec<String>> =
            serde_json::from_str(raw).context("Synonym file is not a term -> [string] object")?;
        Ok(Self::from_map(map))
    }

    pub fn from_map(map: HashMap<String, Vec<String>>) -> Self {
        let entries = map
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { entries }
    }

    /// Alternates for `term`, case-insensitively. Empty slice when unknown.
    pub fn get(&self, term: &str) -> &[String] {
        self.entries
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &[&str]); N]> for SynonymTable {
    fn from(pairs: [(&str, &[&str]); N]) -> Self {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self::from_map(map)
    }
}

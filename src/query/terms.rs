//! Term extraction: turns a free-text question into core and expanded terms.
//!
//! Extraction runs through a chain of fallbacks so that any query with
//! non-whitespace content yields at least one usable term:
//!
//! 1. part-of-speech extraction (nouns singularized, verbs in base form,
//!    adjectives kept as-is)
//! 2. stopword-filtered tokens, when step 1 kept too little of the query
//! 3. every token, stopwords included
//!
//! Expanded terms add the raw significant tokens and one level of synonyms.

use std::collections::HashSet;

use super::lexicon::{
    is_stopword, ADJECTIVES, CHE_PLURALS, INVARIANT_NOUNS, IRREGULAR_VERBS, VERBS, VERB_CUES,
};
use super::synonyms::SynonymTable;

/// Terms derived from one raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParts {
    /// Normalized significant terms, in query order (nouns, then verbs, then adjectives).
    pub core_terms: Vec<String>,
    /// Core terms, raw significant tokens and their synonyms. Lowercase, deduplicated.
    pub expanded_terms: Vec<String>,
    pub original_query: String,
}

impl QueryParts {
    pub fn is_empty(&self) -> bool {
        self.core_terms.is_empty() && self.expanded_terms.is_empty()
    }
}

/// Extracts [`QueryParts`] from raw text using an injected synonym table.
pub struct TermExtractor<'a> {
    synonyms: &'a SynonymTable,
}

impl<'a> TermExtractor<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self { synonyms }
    }

    pub fn expand(&self, raw_query: &str) -> QueryParts {
        let lowered = raw_query.to_lowercase();
        let tokens = tokenize(&lowered);
        let raw_token_count = raw_query.split_whitespace().count();

        let mut core_terms = tag_core_terms(&tokens);

        let min_expected = (raw_token_count as f64 / 3.0).max(1.0);
        if (core_terms.len() as f64) < min_expected && raw_token_count > 2 {
            core_terms = TermSet::from_terms(tokens.iter().filter(|t| !is_stopword(t))).into_vec();
        }
        if core_terms.is_empty() {
            core_terms = TermSet::from_terms(tokens.iter()).into_vec();
        }
        if core_terms.is_empty() {
            core_terms = TermSet::from_terms(lowered.split_whitespace()).into_vec();
        }

        let mut expanded = TermSet::from_terms(core_terms.iter());
        for token in tokens.iter().filter(|t| !is_stopword(t)) {
            expanded.insert(token);
        }

        // One level only: synonyms added here are not themselves expanded.
        let seeds = expanded.items.clone();
        for term in &seeds {
            for synonym in self.synonyms.get(term) {
                expanded.insert(synonym);
            }
        }

        let mut expanded_terms = expanded.into_vec();
        if expanded_terms.is_empty() {
            expanded_terms = TermSet::from_terms(lowered.split_whitespace()).into_vec();
        }

        QueryParts {
            core_terms,
            expanded_terms,
            original_query: raw_query.to_string(),
        }
    }
}

/// Insertion-ordered, lowercase, deduplicated term list that ignores blanks.
#[derive(Default)]
struct TermSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl TermSet {
    fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for term in terms {
            set.insert(term.as_ref());
        }
        set
    }

    fn insert(&mut self, term: &str) {
        let term = term.trim().to_lowercase();
        if term.is_empty() || self.seen.contains(&term) {
            return;
        }
        self.seen.insert(term.clone());
        self.items.push(term);
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Split lowercased text into word tokens, trimming surrounding punctuation.
/// `+` and `#` survive at the end of a token so `c++` and `c#` stay intact.
pub fn tokenize(lowered: &str) -> Vec<String> {
    lowered
        .split_whitespace()
        .map(|raw| {
            raw.trim_start_matches(|c: char| !c.is_alphanumeric())
                .trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        })
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
enum Tag {
    Noun(String),
    Verb(String),
    Adjective(String),
    Other,
}

fn tag_core_terms(tokens: &[String]) -> Vec<String> {
    let mut nouns = Vec::new();
    let mut verbs = Vec::new();
    let mut adjectives = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| tokens[p].as_str());
        match tag(token, prev) {
            Tag::Noun(t) => nouns.push(t),
            Tag::Verb(t) => verbs.push(t),
            Tag::Adjective(t) => adjectives.push(t),
            Tag::Other => {}
        }
    }

    TermSet::from_terms(nouns.into_iter().chain(verbs).chain(adjectives)).into_vec()
}

fn tag(token: &str, prev: Option<&str>) -> Tag {
    if is_stopword(token) || !token.chars().any(char::is_alphabetic) {
        return Tag::Other;
    }
    if is_adverb(token) {
        return Tag::Other;
    }
    if ADJECTIVES.contains(&token) {
        return Tag::Adjective(token.to_string());
    }
    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == token) {
        return Tag::Verb(base.to_string());
    }
    if let Some(base) = inflected_verb_base(token) {
        return Tag::Verb(base);
    }
    if VERBS.contains(&token) && prev.map_or(true, |p| VERB_CUES.contains(&p)) {
        return Tag::Verb(token.to_string());
    }
    if has_adjective_suffix(token) {
        return Tag::Adjective(token.to_string());
    }
    Tag::Noun(singularize(token))
}

/// `quickly` -> adverb of `quick`, `easily` -> adverb of `easy`.
fn is_adverb(token: &str) -> bool {
    let Some(stem) = token.strip_suffix("ly") else {
        return false;
    };
    if stem.len() < 3 {
        return false;
    }
    if ADJECTIVES.contains(&stem) || has_adjective_suffix(stem) {
        return true;
    }
    stem.strip_suffix('i')
        .map(|s| ADJECTIVES.contains(&format!("{s}y").as_str()))
        .unwrap_or(false)
}

fn has_adjective_suffix(token: &str) -> bool {
    token.len() > 5
        && ["ous", "ful", "able", "ible", "less"]
            .iter()
            .any(|suffix| token.ends_with(suffix))
}

/// Base form of an `-ing` / `-ed` inflection when it resolves to a known verb.
fn inflected_verb_base(token: &str) -> Option<String> {
    let stem = token
        .strip_suffix("ing")
        .or_else(|| token.strip_suffix("ed"))?;
    if stem.len() < 2 {
        return None;
    }

    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    if let Some(undoubled) = undouble(stem) {
        candidates.push(undoubled);
    }
    if let Some(s) = stem.strip_suffix('i') {
        candidates.push(format!("{s}y"));
    }

    candidates
        .into_iter()
        .find(|c| VERBS.contains(&c.as_str()))
}

/// `stopp` -> `stop`, `logg` -> `log`.
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

/// Reduce a plural noun to its singular form with conservative English rules.
pub fn singularize(word: &str) -> String {
    if INVARIANT_NOUNS.contains(&word) || word.len() <= 3 {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if CHE_PLURALS.contains(&word) {
        return word[..word.len() - 1].to_string();
    }
    if let Some(stem) = word.strip_suffix("es") {
        if INVARIANT_NOUNS.contains(&stem) {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    if ["sses", "shes", "ches", "xes", "zes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(query: &str) -> QueryParts {
        TermExtractor::new(&SynonymTable::empty()).expand(query)
    }

    #[test]
    fn test_slow_database_query() {
        let parts = extract("slow database query");
        assert_eq!(parts.core_terms, vec!["database", "query", "slow"]);
        assert_eq!(parts.original_query, "slow database query");
    }

    #[test]
    fn test_plural_nouns_are_singularized() {
        let parts = extract("failing deployments and queries");
        assert!(parts.core_terms.contains(&"deployment".to_string()));
        assert!(parts.core_terms.contains(&"query".to_string()));
        assert!(parts.core_terms.contains(&"fail".to_string()));
    }

    #[test]
    fn test_verbs_reduced_to_base_form() {
        let parts = extract("how to restart stopped containers");
        assert!(parts.core_terms.contains(&"restart".to_string()));
        assert!(parts.core_terms.contains(&"stop".to_string()));
        assert!(parts.core_terms.contains(&"container".to_string()));
        // nouns come before verbs
        let container = parts.core_terms.iter().position(|t| t == "container");
        let restart = parts.core_terms.iter().position(|t| t == "restart");
        assert!(container < restart);
    }

    #[test]
    fn test_expanded_contains_raw_tokens_and_core() {
        let parts = extract("Caching Layers");
        assert!(parts.core_terms.contains(&"cache".to_string()));
        assert!(parts.core_terms.contains(&"layer".to_string()));
        for core in &parts.core_terms {
            assert!(parts.expanded_terms.contains(core));
        }
        assert!(parts.expanded_terms.contains(&"caching".to_string()));
        assert!(parts.expanded_terms.contains(&"layers".to_string()));
    }

    #[test]
    fn test_single_stopword_falls_back_to_all_tokens() {
        let parts = extract("the");
        assert_eq!(parts.core_terms, vec!["the"]);
        assert_eq!(parts.expanded_terms, vec!["the"]);
    }

    #[test]
    fn test_stopword_heavy_query_uses_filtered_tokens() {
        // Only adverbs and numbers besides stopwords: POS keeps nothing.
        let parts = extract("how do we quickly do it 2024");
        assert_eq!(parts.core_terms, vec!["quickly", "2024"]);
    }

    #[test]
    fn test_whitespace_only_yields_empty() {
        let parts = extract("   \t  ");
        assert!(parts.core_terms.is_empty());
        assert!(parts.expanded_terms.is_empty());
        assert!(parts.is_empty());
    }

    #[test]
    fn test_empty_string_yields_empty() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_punctuation_only_still_yields_a_term() {
        let parts = extract("???");
        assert_eq!(parts.core_terms, vec!["???"]);
        assert_eq!(parts.expanded_terms, vec!["???"]);
    }

    #[test]
    fn test_synonyms_added_one_level_only() {
        let synonyms = SynonymTable::from([
            ("slow", &["sluggish"][..]),
            ("sluggish", &["lethargic"][..]),
        ]);
        let parts = TermExtractor::new(&synonyms).expand("slow database");
        assert!(parts.expanded_terms.contains(&"sluggish".to_string()));
        assert!(!parts.expanded_terms.contains(&"lethargic".to_string()));
        assert!(!parts.core_terms.contains(&"sluggish".to_string()));
    }

    #[test]
    fn test_synonyms_are_lowercased_and_deduplicated() {
        let synonyms = SynonymTable::from([("db", &["Database", "database"][..])]);
        let parts = TermExtractor::new(&synonyms).expand("db database");
        let count = parts
            .expanded_terms
            .iter()
            .filter(|t| t.as_str() == "database")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_tokenize_trims_punctuation() {
        assert_eq!(
            tokenize("what's \"node.js\", c++ (ci/cd)?"),
            vec!["what's", "node.js", "c++", "ci/cd"]
        );
    }

    #[test]
    fn test_singularize_rules() {
        assert_eq!(singularize("queries"), "query");
        assert_eq!(singularize("caches"), "cache");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("processes"), "process");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("kubernetes"), "kubernetes");
        assert_eq!(singularize("databases"), "database");
        assert_eq!(singularize("analysis"), "analysis");
    }

    #[test]
    fn test_adverbs_are_not_core_terms() {
        assert_eq!(tag("quickly", None), Tag::Other);
        assert_eq!(tag("easily", None), Tag::Other);
        assert_eq!(tag("family", None), Tag::Noun("family".to_string()));
    }
}

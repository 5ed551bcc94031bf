//! Property tests for query generation and ranking over arbitrary inputs.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use runbook_search::models::Candidate;
use runbook_search::query::{QueryStringBuilder, SynonymTable, TermExtractor, MAX_QUERIES};
use runbook_search::search::Ranker;

const TARGET: &str = "acme/runbook";

/// Word-like tokens, including mixed case and the punctuation that forces quoting.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}",
        "[A-Z][a-z]{0,8}",
        "[a-z]{1,5}[:\"'.+#-][a-z]{0,5}",
    ]
}

/// A raw query with at least one alphabetic token, plus a synonym table
/// keyed on some of its words.
fn query_and_synonyms() -> impl Strategy<Value = (String, SynonymTable)> {
    (
        prop::collection::vec(word(), 1..7),
        prop::collection::vec(prop::collection::vec("[a-z]{1,8}", 0..4), 0..7),
        prop::collection::vec(" {1,3}|[ \t]", 0..7),
    )
        .prop_map(|(words, synonym_lists, gaps)| {
            let mut raw = String::new();
            for (i, w) in words.iter().enumerate() {
                if i > 0 {
                    raw.push_str(gaps.get(i).map(String::as_str).unwrap_or(" "));
                }
                raw.push_str(w);
            }
            let map: HashMap<String, Vec<String>> = words
                .iter()
                .zip(synonym_lists)
                .map(|(w, syns)| (w.to_lowercase(), syns))
                .collect();
            (raw, SynonymTable::from_map(map))
        })
}

fn candidate(path: String, content: String) -> Candidate {
    Candidate {
        name: path.rsplit('/').next().unwrap_or(path.as_str()).to_string(),
        url: format!("https://github.com/{TARGET}/blob/main/{path}"),
        path,
        score: 1.0,
        text_matches: Vec::new(),
        full_content: Some(content),
    }
}

fn candidates() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-z]{1,8}", 1..4),
            prop::collection::vec("[a-z]{1,8}", 0..20),
        ),
        0..8,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(segments, words)| candidate(format!("{}.md", segments.join("/")), words.join(" ")))
            .collect()
    })
}

proptest! {
    #[test]
    fn build_yields_one_to_four_queries((raw, synonyms) in query_and_synonyms()) {
        let parts = TermExtractor::new(&synonyms).expand(&raw);
        let queries = QueryStringBuilder::new(&synonyms).build(&parts, TARGET, &[]).unwrap();
        prop_assert!(
            (1..=MAX_QUERIES).contains(&queries.len()),
            "{} queries for {:?}", queries.len(), raw
        );
    }

    #[test]
    fn every_query_has_exactly_one_repo_qualifier(
        (raw, synonyms) in query_and_synonyms(),
        extra in prop::collection::vec("(language|path|in):[a-z]{1,8}", 0..3),
    ) {
        let parts = TermExtractor::new(&synonyms).expand(&raw);
        let queries = QueryStringBuilder::new(&synonyms).build(&parts, TARGET, &extra).unwrap();
        for q in &queries {
            prop_assert_eq!(q.as_str().matches("repo:acme/runbook").count(), 1, "{}", q);
            prop_assert!(!q.as_str().contains("  "), "{}", q);
        }
    }

    #[test]
    fn queries_are_unique((raw, synonyms) in query_and_synonyms()) {
        let parts = TermExtractor::new(&synonyms).expand(&raw);
        let queries = QueryStringBuilder::new(&synonyms).build(&parts, TARGET, &[]).unwrap();
        let unique: HashSet<&str> = queries.iter().map(|q| q.as_str()).collect();
        prop_assert_eq!(unique.len(), queries.len());
    }

    #[test]
    fn expanded_terms_contain_core_terms((raw, synonyms) in query_and_synonyms()) {
        let parts = TermExtractor::new(&synonyms).expand(&raw);
        prop_assert!(!parts.core_terms.is_empty(), "no core terms for {:?}", raw);
        let expanded: HashSet<&str> = parts.expanded_terms.iter().map(String::as_str).collect();
        for term in &parts.core_terms {
            prop_assert!(expanded.contains(term.to_lowercase().as_str()), "{} missing", term);
        }
        prop_assert!(parts.expanded_terms.iter().all(|t| !t.trim().is_empty()));
    }

    #[test]
    fn ranking_is_deterministic_and_sorted(
        input in candidates(),
        query in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let query = query.join(" ");
        let ranker = Ranker::default();
        let first = ranker.rank(input.clone(), &query);
        let second = ranker.rank(input.clone(), &query);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.len() <= input.len());
        prop_assert!(first.windows(2).all(|w| w[0].score <= w[1].score));
        prop_assert!(first.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }
}

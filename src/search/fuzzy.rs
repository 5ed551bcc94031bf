//! Per-field fuzzy matching on top of `nucleo-matcher`.
//!
//! The matcher reports a higher-is-better score. It is mapped onto a
//! distance relative to the score the query earns against itself:
//!
//! ```text
//! distance = 1 - score / perfect_score
//! ```
//!
//! `0.0` is as good as an exact match; anything above the threshold is
//! reported as no match.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

/// Matching parameters. Default threshold: 0.6.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    pub threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { threshold: 0.6 }
    }
}

/// A query prepared once and matched against many fields.
///
/// Every whitespace-separated word of the query must match, in order,
/// somewhere in the field.
pub struct FieldMatcher {
    pattern: Pattern,
    perfect: u32,
    matcher: Matcher,
    buf: Vec<char>,
}

impl FieldMatcher {
    pub fn new(query: &str) -> Self {
        let pattern = create_pattern(query);
        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
        let mut buf = Vec::new();

        let perfect = if pattern.atoms.is_empty() {
            0
        } else {
            let canonical = query.split_whitespace().collect::<Vec<_>>().join(" ");
            pattern
                .score(Utf32Str::new(&canonical, &mut buf), &mut matcher)
                .unwrap_or(0)
        };

        Self {
            pattern,
            perfect,
            matcher,
            buf,
        }
    }

    /// True when the query can never match anything.
    pub fn is_empty(&self) -> bool {
        self.perfect == 0
    }

    /// Distance of `text` from the query, or `None` above the threshold.
    pub fn distance(&mut self, text: &str, opts: &MatchOptions) -> Option<f64> {
        if self.perfect == 0 || text.is_empty() {
            return None;
        }
        let haystack = Utf32Str::new(text, &mut self.buf);
        let score = self.pattern.score(haystack, &mut self.matcher)?;
        let similarity = (f64::from(score) / f64::from(self.perfect)).min(1.0);
        let distance = 1.0 - similarity;
        (distance <= opts.threshold).then_some(distance)
    }
}

fn create_pattern(query: &str) -> Pattern {
    Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    )
}

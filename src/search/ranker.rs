use crate::models::{Candidate, RankedCandidate};
use crate::search::fuzzy::{FieldMatcher, MatchOptions};

/// Relative importance of each searchable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub name: f64,
    pub path: f64,
    pub content: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        // Filename carries the strongest signal.
        Self {
            name: 0.4,
            path: 0.3,
            content: 0.3,
        }
    }
}

/// Fuzzy re-ranker over hydrated candidates.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    pub weights: FieldWeights,
    pub options: MatchOptions,
}

impl Ranker {
    /// Score `candidates` against `original_query`, best (lowest) first.
    ///
    /// Candidates without content are dropped, as are candidates where no
    /// field passes the match threshold. Ties keep input order.
    pub fn rank(&self, candidates: Vec<Candidate>, original_query: &str) -> Vec<RankedCandidate> {
        let mut matcher = FieldMatcher::new(original_query);
        if matcher.is_empty() {
            return Vec::new();
        }

        let total_weight = self.weights.name + self.weights.path + self.weights.content;
        if total_weight <= 0.0 {
            return Vec::new();
        }

        let mut ranked = Vec::with_capacity(candidates.len());
        for c in candidates {
            let Some(content) = c.full_content.filter(|s| !s.is_empty()) else {
                continue;
            };
            let fields = [
                (c.name.as_str(), self.weights.name),
                (c.path.as_str(), self.weights.path),
                (content.as_str(), self.weights.content),
            ];
            let Some(score) = self.score_fields(&mut matcher, &fields, total_weight) else {
                continue;
            };
            ranked.push(RankedCandidate {
                path: c.path,
                name: c.name,
                url: c.url,
                score,
                text_matches: c.text_matches,
                full_content: content,
            });
        }

        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked
    }

    fn score_fields(
        &self,
        matcher: &mut FieldMatcher,
        fields: &[(&str, f64)],
        total_weight: f64,
    ) -> Option<f64> {
        let mut total = 1.0f64;
        let mut matched = false;

        for &(text, weight) in fields {
            let Some(distance) = matcher.distance(text, &self.options) else {
                continue;
            };
            matched = true;
            let base = if distance == 0.0 { f64::EPSILON } else { distance };
            total *= base.powf((weight / total_weight) * field_norm(text));
        }

        matched.then_some(total.clamp(0.0, 1.0))
    }
}

/// Length normalization: longer fields count for less. `1 / sqrt(tokens)`,
/// rounded to three decimals.
fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

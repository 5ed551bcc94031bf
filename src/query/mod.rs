//! Query understanding: term extraction, synonym expansion and query string
//! generation for the remote search API.

pub mod builder;
pub mod lexicon;
pub mod synonyms;
pub mod terms;

pub use builder::{QueryString, QueryStringBuilder, TargetRepo, MAX_QUERIES};
pub use synonyms::SynonymTable;
pub use terms::{QueryParts, TermExtractor};

pub mod fuzzy;
pub mod ranker;
pub mod retrieval;

pub use ranker::Ranker;
pub use retrieval::{SearchConfig, SearchEngine};

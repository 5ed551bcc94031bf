use thiserror::Error;

/// Errors that cross the search pipeline boundary.
///
/// Remote I/O failures never show up here: they are logged and absorbed
/// as missing results by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The repository identifier is not of the form `owner/name`.
    #[error("Invalid target repo '{0}'. Expected \"owner/repo\".")]
    InvalidTarget(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

use thiserror::Error;

/// Errors surfaced by index construction, loading and searching.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A document is missing a required field or clashes with another one.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A caller-supplied argument (such as a search mode) was not recognized.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    pub fn invalid_document<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidDocument(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

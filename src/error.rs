#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to fetch data: {0}")]
    Fetch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MetaError {
    /// True for failures talking to HSReplay, as opposed to local cache,
    /// parsing or configuration problems.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, MetaError::Fetch(_) | MetaError::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, MetaError>;

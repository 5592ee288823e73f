use thiserror::Error;

/// Errors produced while creating a widget.
///
/// Only [`Error::ContainerNotFound`] and [`Error::InvalidOptions`] reach the
/// caller of [`crate::create`]; the rest are rendered inside the widget.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Container element not found")]
    ContainerNotFound,

    #[error("Invalid widget options: {0}")]
    InvalidOptions(String),

    #[error("Repository not found: {owner}/{repo}")]
    RepositoryNotFound { owner: String, repo: String },

    /// Transport-level failure (connection refused, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

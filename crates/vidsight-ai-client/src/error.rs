//! Completion provider error types.

use thiserror::Error;

pub type CompletionResult<T> = Result<T, CompletionError>;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("rate limited by completion backend")]
    RateLimited,

    #[error("prompt exceeds the model context window")]
    ContextTooLong,

    #[error("invalid completion request: {0}")]
    InvalidRequest(String),

    #[error("completion backend rejected credentials: {0}")]
    Unauthorized(String),

    #[error("completion backend returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

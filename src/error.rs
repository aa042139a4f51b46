// Error types for repostats.
// Handles GitHub API errors, cache IO errors, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;

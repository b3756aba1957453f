//! Error types for the TVMaze catalog client.
//!
//! Both catalog operations return the same error enum, so a caller decides
//! per call whether to log-and-degrade or to propagate.

use thiserror::Error;

/// Error type for TVMaze catalog operations
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// HTTP transport failed (connection, timeout, request build)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with a non-success status other than 404
    #[error("Catalog returned HTTP {0}")]
    Status(u16),

    /// Response body was not the expected JSON shape
    #[error("Malformed catalog response: {0}")]
    MalformedResponse(String),

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Search term was empty or whitespace-only
    #[error("Invalid search term: {0}")]
    InvalidQuery(String),

    /// Invalid show ID provided
    #[error("Invalid show ID: {0}")]
    InvalidId(u32),
}

/// Result type alias for TVMaze catalog operations
pub type Result<T> = std::result::Result<T, TvMazeError>;

//! HTTP client for the TVMaze catalog API.
//!
//! One GET per call, no retries and no caching: a failed request surfaces
//! as a typed error for the caller to handle.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, TvMazeError};

/// Base URL of the public TVMaze API
const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request
const USER_AGENT: &str = concat!("tvmaze-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for the TVMaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API (default: the public TVMaze endpoint).
    /// Injectable so tests can point the client at a local stand-in server.
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client for the TVMaze API
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL all request paths are appended to
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch a JSON document from a catalog path.
    ///
    /// # Arguments
    /// * `path` - Relative path on the catalog API, including any query
    ///   string (e.g. `/search/shows?q=girls`)
    ///
    /// # Errors
    /// - `TvMazeError::Http` - transport failure (connection, timeout)
    /// - `TvMazeError::NotFound` - server returned 404
    /// - `TvMazeError::Status` - any other non-success status
    /// - `TvMazeError::MalformedResponse` - body did not decode as `T`
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "catalog request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TvMazeError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            return Err(TvMazeError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TvMazeError::MalformedResponse(e.to_string()))
    }
}

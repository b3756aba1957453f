//! High-level TVMaze catalog operations.
//!
//! This module combines the HTTP client with the wire-to-domain mappers to
//! provide the two catalog operations: show search and per-show episode
//! listing. All operations are asynchronous and side-effect free beyond
//! the network call itself.

use crate::api::{ApiEpisode, SearchEntry};
use crate::client::{ClientConfig, TvMazeClient};
use crate::error::{Result, TvMazeError};
use crate::mapper::{map_episodes, map_search_results};
use crate::types::{Episode, Show};

/// Client-facing API for the TVMaze catalog
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeCatalog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = TvMazeCatalog::new()?;
///
///     let shows = catalog.search_shows("Breaking Bad").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvMazeCatalog {
    client: TvMazeClient,
}

impl TvMazeCatalog {
    /// Create a new catalog handle with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: TvMazeClient::new()?,
        })
    }

    /// Create a new catalog handle with custom client configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration (base URL, timeout)
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: TvMazeClient::with_config(config)?,
        })
    }

    /// Create a catalog handle around a pre-built client.
    ///
    /// Useful for testing or when custom client setup is needed.
    pub fn with_client(client: TvMazeClient) -> Self {
        Self { client }
    }

    /// Search for shows matching a term.
    ///
    /// Issues one GET to the show-search endpoint and maps each returned
    /// record to a [`Show`]. Result order matches catalog response order.
    ///
    /// # Arguments
    /// * `term` - Search term
    ///
    /// # Returns
    /// * `Ok(Vec<Show>)` with matching shows (possibly empty)
    /// * `Err(TvMazeError::InvalidQuery)` if `term` is empty or
    ///   whitespace-only (no request is issued)
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let catalog = TvMazeCatalog::new()?;
    /// for show in catalog.search_shows("girls").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(TvMazeError::InvalidQuery(
                "search term cannot be empty".to_string(),
            ));
        }

        let path = format!("/search/shows?q={}", urlencoding::encode(trimmed));
        let entries: Vec<SearchEntry> = self.client.get_json(&path).await?;
        tracing::debug!(term = trimmed, results = entries.len(), "search completed");

        Ok(map_search_results(entries))
    }

    /// List all episodes of a show.
    ///
    /// Issues one GET to the per-show episode endpoint and maps each record
    /// to an [`Episode`] by direct field copy.
    ///
    /// # Arguments
    /// * `show_id` - Catalog ID of the show
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` with all episodes, in catalog order
    /// * `Err(TvMazeError::InvalidId)` if `show_id` is 0 (no request is
    ///   issued; catalog IDs are positive)
    /// * `Err(TvMazeError::NotFound)` if the show does not exist
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let catalog = TvMazeCatalog::new()?;
    /// for episode in catalog.get_episodes(139).await? {
    ///     println!("S{:02}E{:02} {}", episode.season, episode.number, episode.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_episodes(&self, show_id: u32) -> Result<Vec<Episode>> {
        if show_id == 0 {
            return Err(TvMazeError::InvalidId(show_id));
        }

        let path = format!("/shows/{}/episodes", show_id);
        let records: Vec<ApiEpisode> = self.client.get_json(&path).await?;
        tracing::debug!(show_id, episodes = records.len(), "episode listing completed");

        Ok(map_episodes(records))
    }
}

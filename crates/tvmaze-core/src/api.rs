//! TVMaze API wire types for deserialization.
//!
//! These structures mirror the JSON responses of the two catalog endpoints.
//! Fields the catalog may send as `null` are `Option` here so the mapping
//! layer decides the policy, not serde; fields we never read are simply
//! omitted and ignored during deserialization.

use serde::Deserialize;

/// One entry of the `/search/shows` response array.
///
/// The catalog wraps each match in a scored envelope; only the `show`
/// payload is of interest.
#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    /// The matched show record
    pub show: ApiShow,
}

/// A show record inside a search entry.
#[derive(Debug, Deserialize)]
pub struct ApiShow {
    /// Unique catalog identifier
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Summary as an HTML fragment (null for shows without one)
    pub summary: Option<String>,
    /// Image URLs (null when the catalog has no artwork)
    pub image: Option<ApiImage>,
}

/// Image URL set attached to a show.
#[derive(Debug, Deserialize)]
pub struct ApiImage {
    /// Medium-size image URL (may be null even when the object is present)
    pub medium: Option<String>,
}

/// One entry of the `/shows/{id}/episodes` response array.
///
/// All four fields are required: an episode record missing any of them is
/// treated as a malformed response, there is no defaulting here.
#[derive(Debug, Deserialize)]
pub struct ApiEpisode {
    /// Unique catalog identifier, scoped to the show
    pub id: u32,
    /// Display name of the episode
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}

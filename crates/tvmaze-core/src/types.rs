//! Data types for the TVMaze catalog.
//!
//! These are the domain-side records the mappers produce: request-scoped
//! values, built fresh per call and discarded once rendered. All types
//! implement Serialize and Deserialize for JSON compatibility.

use serde::{Deserialize, Serialize};

/// Placeholder image URL substituted when the catalog has no image for a show
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/missing-tv";

/// Catalog markup that must not reach a rendering surface unconverted.
///
/// TVMaze summaries are HTML fragments. Keeping them behind this newtype
/// forces every renderer through [`to_plain_text`](RichText::to_plain_text),
/// so a summary cannot inject markup into whatever surface displays it.
///
/// # Example
/// ```
/// use tvmaze_core::RichText;
///
/// let summary = RichText::new("<p><b>Won</b> several awards.</p>");
/// assert_eq!(summary.to_plain_text(), "Won several awards.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    /// Wrap a raw markup fragment.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw markup, tags and all.
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    /// Whether there is any content at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the markup to plain text, stripping tags and decoding
    /// entities.
    pub fn to_plain_text(&self) -> String {
        nanohtml2text::html2text(&self.0).trim().to_string()
    }
}

impl From<&str> for RichText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RichText {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A show as produced by the search pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Unique catalog identifier
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Summary as raw catalog markup
    pub summary: RichText,
    /// Image URL; never empty, the placeholder is substituted during mapping
    pub image: String,
}

/// One installment of a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique catalog identifier, scoped to the show
    pub id: u32,
    /// Display name of the episode
    pub name: String,
    /// Season number (1-based)
    pub season: u32,
    /// Episode number within the season (1-based)
    pub number: u32,
}

//! Event coordination for the widget.
//!
//! [`ShowBrowser`] wires the catalog operations to the rendering surface
//! and implements the two user actions: search submission and episode
//! activation. View state lives behind a `tokio::sync::Mutex`, so a
//! browser wrapped in an `Arc` can serve overlapping actions; the lock is
//! never held across a network await.
//!
//! Every action mints a generation from a single monotonically increasing
//! counter. A response is applied only while its generation is still the
//! latest, so a slow response belonging to a superseded action can never
//! overwrite the display with stale data.

use tokio::sync::Mutex;
use tracing::warn;

use tvmaze_core::TvMazeCatalog;

use crate::render::{render_episodes, render_shows, EpisodePanel, ShowList};

/// Outcome of a search submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shows fetched and rendered; carries the number of cards
    Rendered(usize),
    /// Fetch failed; an empty list was rendered and the failure logged
    Failed,
    /// A newer action superseded this one; the response was discarded
    Superseded,
}

/// Outcome of activating a card's Episodes control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodesOutcome {
    /// Episodes fetched and rendered; carries the number of entries
    Rendered(usize),
    /// Fetch failed; the view was left untouched and the failure logged
    Failed,
    /// A newer action superseded this one; the response was discarded
    Superseded,
    /// No rendered card exists at the given index
    UnknownCard,
}

/// Immutable snapshot of the current view, for display and assertions
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    /// The rendered show cards
    pub shows: ShowList,
    /// The episode region
    pub episodes: EpisodePanel,
}

#[derive(Default)]
struct ViewState {
    shows: ShowList,
    episodes: EpisodePanel,
    /// Generation of the most recent user action
    generation: u64,
}

/// The widget's controller: two pipelines over shared view containers
///
/// The episode region knows two states: hidden (the default, and after
/// every search) and visible (after an episode render). There is no way to
/// re-hide it other than submitting a new search.
pub struct ShowBrowser {
    catalog: TvMazeCatalog,
    state: Mutex<ViewState>,
}

impl ShowBrowser {
    /// Create a browser over the given catalog with empty containers.
    pub fn new(catalog: TvMazeCatalog) -> Self {
        Self {
            catalog,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Current view contents.
    pub async fn view(&self) -> ViewSnapshot {
        let state = self.state.lock().await;
        ViewSnapshot {
            shows: state.shows.clone(),
            episodes: state.episodes.clone(),
        }
    }

    /// Handle a search form submission.
    ///
    /// Fetches shows for `term`, hides the episode region, and renders the
    /// result. A failed fetch renders an empty list; the failure goes to
    /// the log, and the outcome is the only signal the caller sees.
    pub async fn submit_search(&self, term: &str) -> SearchOutcome {
        let generation = self.begin_action().await;
        let result = self.catalog.search_shows(term).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            return SearchOutcome::Superseded;
        }

        // Episodes only reappear after an explicit activation.
        state.episodes.hide();

        match result {
            Ok(shows) => {
                render_shows(&mut state.shows, &shows);
                SearchOutcome::Rendered(shows.len())
            }
            Err(error) => {
                warn!(term, %error, "show search failed");
                render_shows(&mut state.shows, &[]);
                SearchOutcome::Failed
            }
        }
    }

    /// Handle activation of the Episodes control on the card at
    /// `card_index`.
    ///
    /// Recovers the show id from the card's tag, fetches the episode list,
    /// and renders it, revealing the region. A failed fetch leaves the view
    /// untouched.
    pub async fn activate_episodes(&self, card_index: usize) -> EpisodesOutcome {
        let show_id = match self.state.lock().await.shows.show_id_at(card_index) {
            Some(id) => id,
            None => return EpisodesOutcome::UnknownCard,
        };

        let generation = self.begin_action().await;
        let result = self.catalog.get_episodes(show_id).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            return EpisodesOutcome::Superseded;
        }

        match result {
            Ok(episodes) => {
                render_episodes(&mut state.episodes, &episodes);
                EpisodesOutcome::Rendered(episodes.len())
            }
            Err(error) => {
                warn!(show_id, %error, "episode listing failed");
                EpisodesOutcome::Failed
            }
        }
    }

    /// Mint the generation for a new user action.
    async fn begin_action(&self) -> u64 {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.generation
    }
}

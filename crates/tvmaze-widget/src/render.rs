//! Rendering surface for the widget.
//!
//! The containers here are injected stand-ins for the page regions the
//! widget draws into: a card list for shows and a reveal-on-render panel
//! for episodes. Renderers clear before they append, so repeated renders
//! replace prior output instead of duplicating it.

use tvmaze_core::{Episode, Show};

/// Label of the per-card control that triggers the episode pipeline
pub const EPISODES_CONTROL_LABEL: &str = "Episodes";

/// A rendered show card.
///
/// `show_id` is the tag event handling uses to recover which show a card
/// belongs to once its control is activated; it is part of the card, not
/// of any retained model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    show_id: u32,
    /// Image URL shown on the card
    pub image_url: String,
    /// Show name
    pub name: String,
    /// Summary as plain text; markup never crosses into a card
    pub summary: String,
    /// Label of the card's trigger control
    pub control_label: &'static str,
}

impl ShowCard {
    /// The show id this card is tagged with.
    pub fn show_id(&self) -> u32 {
        self.show_id
    }
}

/// Container for rendered show cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowList {
    cards: Vec<ShowCard>,
}

impl ShowList {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered cards, in render order.
    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    /// Number of rendered cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the container holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Recover the tagged show id of the card at `index`.
    pub fn show_id_at(&self, index: usize) -> Option<u32> {
        self.cards.get(index).map(ShowCard::show_id)
    }
}

/// Render show cards into the container, replacing prior content.
///
/// Each card carries the show's tag, image URL, name, the summary converted
/// to plain text, and the control label. Rendering the same slice twice
/// leaves exactly one card per show.
pub fn render_shows(list: &mut ShowList, shows: &[Show]) {
    list.cards.clear();

    for show in shows {
        list.cards.push(ShowCard {
            show_id: show.id,
            image_url: show.image.clone(),
            name: show.name.clone(),
            summary: show.summary.to_plain_text(),
            control_label: EPISODES_CONTROL_LABEL,
        });
    }
}

/// Episode region: an entry list plus its reveal flag.
///
/// Hidden by default. `render_episodes` reveals it; a new search hides it
/// again. Nothing else toggles it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodePanel {
    entries: Vec<String>,
    visible: bool,
}

impl EpisodePanel {
    /// Create a hidden, empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered entry lines, in render order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether the region is currently revealed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the region, leaving its entries in place.
    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

/// Render episode entries and reveal the panel, replacing prior content.
///
/// The panel becomes visible even for an empty episode list.
pub fn render_episodes(panel: &mut EpisodePanel, episodes: &[Episode]) {
    panel.entries.clear();
    panel.entries.extend(episodes.iter().map(format_episode_entry));
    panel.visible = true;
}

/// Entry text for one episode: `"<name> (season <season>, episode <number>)"`.
pub fn format_episode_entry(episode: &Episode) -> String {
    format!(
        "{} (season {}, episode {})",
        episode.name, episode.season, episode.number
    )
}

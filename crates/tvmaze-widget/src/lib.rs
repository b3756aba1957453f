//! TVMaze show/episode widget.
//!
//! Rendering surface and event coordination over the `tvmaze-core` catalog
//! client: show cards, the reveal-on-render episode panel, and the
//! [`ShowBrowser`] driving both pipelines.

pub mod browser;
pub mod render;

// Re-export main types for convenience
pub use browser::{EpisodesOutcome, SearchOutcome, ShowBrowser, ViewSnapshot};
pub use render::{
    format_episode_entry, render_episodes, render_shows, EpisodePanel, ShowCard, ShowList,
    EPISODES_CONTROL_LABEL,
};

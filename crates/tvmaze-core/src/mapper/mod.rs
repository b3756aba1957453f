//! Wire-to-domain mapping for TVMaze responses.
//!
//! This module turns raw API records into the domain types:
//! - `search`: search entries to [`Show`](crate::types::Show) records,
//!   with the fixed image fallback applied
//! - `episodes`: episode records copied field-for-field, no defaulting

pub mod episodes;
pub mod search;

// Re-export main mapping functions
pub use episodes::map_episodes;
pub use search::map_search_results;

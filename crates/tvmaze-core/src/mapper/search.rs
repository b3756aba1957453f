//! Search-result mapping for the TVMaze catalog.
//!
//! Maps the scored envelopes of the search endpoint onto [`Show`] records.

use crate::api::SearchEntry;
use crate::types::{RichText, Show, MISSING_IMAGE_URL};

/// Map raw search entries to [`Show`] records.
///
/// `id` and `name` are copied verbatim; the summary is carried over as raw
/// markup (empty when the catalog sent none). The image URL falls back to
/// [`MISSING_IMAGE_URL`] whenever the record carries no usable one, so a
/// mapped show always has a non-empty image. Output order matches input
/// order; no re-sorting.
pub fn map_search_results(entries: Vec<SearchEntry>) -> Vec<Show> {
    entries.into_iter().map(map_entry).collect()
}

/// Map a single search entry.
fn map_entry(entry: SearchEntry) -> Show {
    let show = entry.show;

    // A present image object can still lack a medium URL; both cases get
    // the placeholder.
    let image = show
        .image
        .and_then(|image| image.medium)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| MISSING_IMAGE_URL.to_string());

    Show {
        id: show.id,
        name: show.name,
        summary: show.summary.map(RichText::new).unwrap_or_default(),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiImage, ApiShow};
    use proptest::prelude::*;

    fn entry(id: u32, name: &str, medium: Option<Option<&str>>) -> SearchEntry {
        SearchEntry {
            show: ApiShow {
                id,
                name: name.to_string(),
                summary: Some(format!("<p>About {name}.</p>")),
                image: medium.map(|medium| ApiImage {
                    medium: medium.map(str::to_string),
                }),
            },
        }
    }

    #[test]
    fn test_map_copies_fields_verbatim() {
        let shows = map_search_results(vec![entry(
            139,
            "Girls",
            Some(Some("https://static.tvmaze.com/girls-medium.jpg")),
        )]);

        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].id, 139);
        assert_eq!(shows[0].name, "Girls");
        assert_eq!(shows[0].summary.as_raw(), "<p>About Girls.</p>");
        assert_eq!(shows[0].image, "https://static.tvmaze.com/girls-medium.jpg");
    }

    #[test]
    fn test_map_substitutes_placeholder_for_missing_image() {
        let shows = map_search_results(vec![entry(5, "Imageless", None)]);
        assert_eq!(shows[0].image, MISSING_IMAGE_URL);
        assert_eq!(shows[0].image, "https://tinyurl.com/missing-tv");
    }

    #[test]
    fn test_map_substitutes_placeholder_for_image_without_medium() {
        let shows = map_search_results(vec![entry(5, "Halfway", Some(None))]);
        assert_eq!(shows[0].image, MISSING_IMAGE_URL);
    }

    #[test]
    fn test_map_defaults_null_summary_to_empty() {
        let mut raw = entry(8, "Quiet", None);
        raw.show.summary = None;

        let shows = map_search_results(vec![raw]);
        assert!(shows[0].summary.is_empty());
    }

    #[test]
    fn test_map_preserves_response_order() {
        let shows = map_search_results(vec![
            entry(3, "Third", None),
            entry(1, "First", None),
            entry(2, "Second", None),
        ]);

        let ids: Vec<u32> = shows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_map_empty_input() {
        assert!(map_search_results(Vec::new()).is_empty());
    }

    proptest! {
        // A mapped show never has an empty image, and it is the placeholder
        // exactly when the record had no usable URL.
        #[test]
        fn prop_image_fallback(medium in proptest::option::of(proptest::option::of(".*"))) {
            let usable = matches!(&medium, Some(Some(url)) if !url.is_empty());
            let raw = SearchEntry {
                show: ApiShow {
                    id: 1,
                    name: "Any".to_string(),
                    summary: None,
                    image: medium.map(|m| ApiImage { medium: m }),
                },
            };

            let shows = map_search_results(vec![raw]);
            prop_assert!(!shows[0].image.is_empty());
            prop_assert_eq!(shows[0].image == MISSING_IMAGE_URL, !usable);
        }
    }
}

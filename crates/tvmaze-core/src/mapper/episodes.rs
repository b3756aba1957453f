//! Episode-list mapping for the TVMaze catalog.
//!
//! Direct field copy from wire records to [`Episode`] values. Unlike the
//! show mapping there is no fallback of any kind here; records missing a
//! field never get this far (they fail deserialization).

use crate::api::ApiEpisode;
use crate::types::Episode;

/// Map raw episode records to [`Episode`] values, preserving order.
pub fn map_episodes(records: Vec<ApiEpisode>) -> Vec<Episode> {
    records
        .into_iter()
        .map(|record| Episode {
            id: record.id,
            name: record.name,
            season: record.season,
            number: record.number,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, season: u32, number: u32) -> ApiEpisode {
        ApiEpisode {
            id,
            name: name.to_string(),
            season,
            number,
        }
    }

    #[test]
    fn test_map_copies_all_fields() {
        let episodes = map_episodes(vec![record(1, "Pilot", 1, 1)]);

        assert_eq!(
            episodes,
            vec![Episode {
                id: 1,
                name: "Pilot".to_string(),
                season: 1,
                number: 1,
            }]
        );
    }

    #[test]
    fn test_map_preserves_order() {
        let episodes = map_episodes(vec![
            record(11, "One", 1, 1),
            record(12, "Two", 1, 2),
            record(21, "Premiere", 2, 1),
        ]);

        let numbers: Vec<(u32, u32)> = episodes.iter().map(|e| (e.season, e.number)).collect();
        assert_eq!(numbers, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_map_empty_input() {
        assert!(map_episodes(Vec::new()).is_empty());
    }
}

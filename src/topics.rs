//! Topic index search and lookup.

use crate::error::{Error, Result};
use crate::models::TheologicalTopic;

/// Case-insensitive substring search over topic names and descriptions.
/// An empty query returns the whole index.
pub fn search<'a>(topics: &'a [TheologicalTopic], query: &str) -> Vec<&'a TheologicalTopic> {
    let needle = query.trim().to_lowercase();
    topics
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.name.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn find<'a>(topics: &'a [TheologicalTopic], id: &str) -> Result<&'a TheologicalTopic> {
    topics
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::not_found(format!("no topic with id {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::theological_topics;

    #[test]
    fn empty_query_returns_everything() {
        let topics = theological_topics();
        assert_eq!(search(&topics, "").len(), topics.len());
        assert_eq!(search(&topics, "   ").len(), topics.len());
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let topics = theological_topics();
        let hits = search(&topics, "graça");
        assert!(hits.iter().any(|t| t.id == "grace"));
        let hits = search(&topics, "GRAÇA");
        assert!(hits.iter().any(|t| t.id == "grace"));
    }

    #[test]
    fn search_reaches_descriptions() {
        let topics = theological_topics();
        // "Hebreus 11:1" only appears in the faith description.
        let hits = search(&topics, "hebreus 11");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "faith");
    }

    #[test]
    fn find_by_id_or_not_found() {
        let topics = theological_topics();
        assert_eq!(find(&topics, "eschatology").unwrap().name, "Escatologia");
        assert!(find(&topics, "christology").is_err());
    }

    #[test]
    fn contested_topics_carry_alternate_views() {
        let topics = theological_topics();
        assert_eq!(find(&topics, "salvation").unwrap().alternate_views.len(), 2);
        assert_eq!(
            find(&topics, "eschatology").unwrap().alternate_views.len(),
            3
        );
        assert!(find(&topics, "grace").unwrap().alternate_views.is_empty());
    }
}

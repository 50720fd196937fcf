//! Content library filtering.
//!
//! Filtering is an AND of three predicates (free text, category, tag set)
//! over the fixed library. Results preserve input order; there is no
//! ranking and no pagination.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ContentItem, ContentKind};

/// The three active filter predicates.
///
/// A default query matches everything. `reset` is the one-click escape from
/// an empty result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentQuery {
    /// Case-insensitive substring matched against title, description and
    /// tags. Empty matches everything.
    #[serde(default)]
    pub search: String,
    /// `None` means "all categories".
    #[serde(default)]
    pub category: Option<ContentKind>,
    /// Every selected tag must be present on the item.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ContentQuery {
    /// Clear all three predicates.
    pub fn reset(&mut self) {
        self.search.clear();
        self.category = None;
        self.tags.clear();
    }

    fn matches(&self, item: &ContentItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || item.title.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
            || item.tags.iter().any(|t| t.to_lowercase().contains(&needle));

        let matches_category = match self.category {
            None => true,
            Some(kind) => item.kind == kind,
        };

        let matches_tags = self.tags.iter().all(|t| item.tags.contains(t));

        matches_search && matches_category && matches_tags
    }
}

/// Filter the library, preserving input order.
pub fn filter<'a>(items: &'a [ContentItem], query: &ContentQuery) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| query.matches(item)).collect()
}

/// All distinct tags, in order of first appearance.
pub fn tag_universe(items: &[ContentItem]) -> Vec<String> {
    let mut tags = Vec::new();
    for item in items {
        for tag in &item.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Item totals per category, for the library statistics table.
pub fn kind_counts(items: &[ContentItem]) -> HashMap<ContentKind, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.kind).or_insert(0) += 1;
    }
    counts
}

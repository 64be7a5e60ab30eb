//! Query matching and ranking over the quick-navigation index.

use serde::Serialize;

use super::index::SearchIndexRecord;
use super::scoring::{MatchType, classify};

/// Maximum number of results returned for a single query.
pub const MAX_RESULTS: usize = 10;

/// A record that matched the current query.
///
/// Results are recomputed wholesale on every keystroke and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub path: String,
    pub group: String,
    pub match_type: MatchType,
}

impl SearchResult {
    fn from_record(record: &SearchIndexRecord, match_type: MatchType) -> Self {
        Self {
            title: record.title().to_string(),
            path: record.path().to_string(),
            group: record.group().to_string(),
            match_type,
        }
    }
}

/// Match a raw query against the index.
///
/// - A blank query (empty or whitespace-only) yields nothing; there is no
///   "browse all" fallback.
/// - Matching is case-insensitive substring containment, title first, then
///   group.
/// - Results keep index order and are capped at [`MAX_RESULTS`]. A group match
///   early in the index can therefore outrank a title match later on.
pub fn search(index: &[SearchIndexRecord], query: &str) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return vec![];
    }

    let folded = query.to_lowercase();

    let results: Vec<SearchResult> = index
        .iter()
        .filter_map(|record| {
            classify(record, &folded).map(|match_type| SearchResult::from_record(record, match_type))
        })
        .take(MAX_RESULTS)
        .collect();

    tracing::trace!("Query '{}' matched {} records", query, results.len());

    results
}

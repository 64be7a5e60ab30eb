//! Quick-navigation search handler.

use crate::search::{MAX_RESULTS, SearchResult};
use crate::state::NavState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QuickSearchRequest {
    /// Text typed into the quick-navigation box. Matched case-insensitively
    /// against page titles, then section names.
    pub query: String,
}

/// Run a query and render the matches as text.
pub fn handle_quick_search(state: &NavState, request: QuickSearchRequest) -> String {
    if request.query.trim().is_empty() {
        return "Empty query. Type part of a page title or section name.".to_string();
    }

    let results = state.index().search(&request.query);

    if results.is_empty() {
        return format!(
            "No results found for '{}'.\n\n\
             Search tips:\n\
             • Try a shorter term\n\
             • Matching is by substring of page titles and section names\n",
            request.query
        );
    }

    format_results(&request.query, &results)
}

/// Render results as a numbered list, one page per line.
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    let mut out = format!("Results for '{}'", query);
    if results.len() == MAX_RESULTS {
        let _ = write!(out, " (first {})", MAX_RESULTS);
    }
    out.push_str(":\n\n");

    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} [{}] → {} (matched {})",
            i + 1,
            result.title,
            result.group,
            result.path,
            result.match_type
        );
    }
    out
}

//! Flattened, search-ready view of the site navigation.

use crate::navigation::NavigationGroup;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::query::{SearchResult, search};

/// Everything that is not a Unicode letter, whitespace, or a CJK ideograph.
static DECORATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\s\x{4E00}-\x{9FA5}]").expect("decoration pattern is valid")
});

/// One searchable navigation entry.
///
/// Records are built once from the navigation data and never mutated; the
/// fields are read-only so the case-folded copies used for matching stay in
/// step with what is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIndexRecord {
    title: String,
    path: String,
    group: String,
    #[serde(skip)]
    title_folded: String,
    #[serde(skip)]
    group_folded: String,
}

impl SearchIndexRecord {
    pub fn new(title: impl Into<String>, path: impl Into<String>, group: impl Into<String>) -> Self {
        let title = title.into();
        let group = group.into();
        Self {
            title_folded: title.to_lowercase(),
            group_folded: group.to_lowercase(),
            title,
            path: path.into(),
            group,
        }
    }

    /// The entry's label, verbatim.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The entry's navigation target, verbatim.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The owning group's title with decorative characters stripped.
    pub fn group(&self) -> &str {
        &self.group
    }

    pub(super) fn title_folded(&self) -> &str {
        &self.title_folded
    }

    pub(super) fn group_folded(&self) -> &str {
        &self.group_folded
    }
}

/// Remove decorative glyphs (emoji, icons, digits, punctuation) from a group
/// title and trim the result.
///
/// Stripping an already-stripped title returns it unchanged.
pub fn strip_group_title(title: &str) -> String {
    DECORATION.replace_all(title, "").trim().to_string()
}

/// Flatten navigation groups into one record per entry, in group order then
/// entry order. Degenerate input (empty labels, empty titles) is kept.
pub fn build_index(groups: &[NavigationGroup]) -> Vec<SearchIndexRecord> {
    groups
        .iter()
        .flat_map(|group| {
            let group_title = strip_group_title(&group.title);
            group
                .entries
                .iter()
                .map(move |entry| SearchIndexRecord::new(&entry.label, &entry.path, group_title.clone()))
        })
        .collect()
}

/// The immutable quick-navigation index.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchIndexRecord>,
}

impl SearchIndex {
    /// Build the index from the site's navigation groups.
    pub fn build(groups: &[NavigationGroup]) -> Self {
        let records = build_index(groups);

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.path.as_str()) {
                tracing::warn!("Duplicate navigation path '{}' ({})", record.path, record.title);
            }
        }

        tracing::debug!(
            "Built quick-navigation index: {} records from {} groups",
            records.len(),
            groups.len()
        );

        Self { records }
    }

    pub fn records(&self) -> &[SearchIndexRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Match a raw query against this index. See [`search`].
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search(&self.records, query)
    }
}

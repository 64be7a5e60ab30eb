//! Two-tier match classification.
//!
//! A record matches on its title or, failing that, on its group. There is no
//! further scoring: ranking across records is left to index order.

use serde::Serialize;
use std::fmt;

use super::index::SearchIndexRecord;

/// Which field of a record satisfied the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Title,
    Group,
}

impl MatchType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a record against an already lower-cased query.
///
/// Title is checked first and wins, so a record is never reported twice.
pub(crate) fn classify(record: &SearchIndexRecord, folded_query: &str) -> Option<MatchType> {
    if record.title_folded().contains(folded_query) {
        Some(MatchType::Title)
    } else if record.group_folded().contains(folded_query) {
        Some(MatchType::Group)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("nacos", Some(MatchType::Title))]
    #[case("核心", Some(MatchType::Group))]
    #[case("discovery", None)]
    // Both fields contain "n"; title wins
    #[case("n", Some(MatchType::Title))]
    fn test_classify(#[case] query: &str, #[case] expected: Option<MatchType>) {
        let record = SearchIndexRecord::new("Nacos 服务发现", "/nacos-discovery", "核心组件 Components");
        check!(classify(&record, query) == expected);
    }

    #[test]
    fn test_match_type_serializes_lowercase() {
        check!(serde_json::to_string(&MatchType::Title).unwrap() == "\"title\"");
        check!(serde_json::to_string(&MatchType::Group).unwrap() == "\"group\"");
        check!(MatchType::Group.to_string() == "group");
    }
}

//! Quick-navigation search over site navigation metadata.
//!
//! The index is built once from the navigation groups, then every keystroke
//! runs a two-tier substring match (title, then group) over it.

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use index::{SearchIndex, SearchIndexRecord, build_index, strip_group_title};
pub use query::{MAX_RESULTS, SearchResult, search};
pub use scoring::MatchType;

pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod overlay;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use error::{ConfigError, NavigationError, ShortcutError};
pub use navigation::{NavigationData, NavigationEntry, NavigationGroup};
pub use overlay::{Host, HostEvent, QuickSearch, SearchUiState, Shortcut};
pub use search::{MatchType, SearchIndex, SearchIndexRecord, SearchResult, build_index, search};
pub use state::NavState;

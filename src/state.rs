//! Shared, read-only navigation state for the CLI and the MCP server.

use crate::navigation::NavigationData;
use crate::overlay::Shortcut;
use crate::search::SearchIndex;
use std::sync::Arc;

/// Navigation metadata and the index built from it, created once at startup.
#[derive(Debug, Clone)]
pub struct NavState {
    navigation: Arc<NavigationData>,
    index: Arc<SearchIndex>,
    shortcut: Shortcut,
}

impl NavState {
    pub fn new(navigation: NavigationData, shortcut: Shortcut) -> Self {
        let index = SearchIndex::build(&navigation.groups);
        Self {
            navigation: Arc::new(navigation),
            index: Arc::new(index),
            shortcut,
        }
    }

    pub fn navigation(&self) -> &NavigationData {
        &self.navigation
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn shortcut(&self) -> Shortcut {
        self.shortcut
    }
}

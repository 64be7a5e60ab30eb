//! Navigation metadata supplied by the hosting site.
//!
//! The site's menu is a list of groups, each holding linkable entries. This
//! module only models and loads that data; flattening it into something
//! searchable is the job of [`crate::search::SearchIndex`].

use crate::error::NavigationError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A single linkable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display text shown in the menu
    pub label: String,
    /// Navigation target, opaque to the search core
    pub path: String,
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// A named menu section. The title may carry decorative glyphs such as emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<NavigationEntry>,
}

impl NavigationGroup {
    pub fn new(title: impl Into<String>, entries: Vec<NavigationEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }
}

/// The complete navigation tree of a site, in menu order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationData {
    #[serde(default)]
    pub groups: Vec<NavigationGroup>,
}

impl NavigationData {
    pub fn new(groups: Vec<NavigationGroup>) -> Self {
        Self { groups }
    }

    /// Load navigation metadata from a `.json` or `.toml` file.
    ///
    /// Both formats share the same shape:
    ///
    /// ```toml
    /// [[groups]]
    /// title = "🚀 Core"
    ///
    /// [[groups.entries]]
    /// label = "Service discovery"
    /// path = "/discovery"
    /// ```
    pub fn load(path: &Path) -> Result<Self, NavigationError> {
        let path = PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref());

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let format = match extension.as_deref() {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            _ => return Err(NavigationError::UnsupportedFormat { path }),
        };

        let content = std::fs::read_to_string(&path).map_err(|source| NavigationError::Read {
            path: path.clone(),
            source,
        })?;

        let data: Self = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|source| NavigationError::Json { path: path.clone(), source })?,
            Format::Toml => toml::from_str(&content)
                .map_err(|source| NavigationError::Toml { path: path.clone(), source })?,
        };

        tracing::debug!(
            "Loaded navigation from {}: {} groups",
            path.display(),
            data.groups.len()
        );

        Ok(data)
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }
}

enum Format {
    Json,
    Toml,
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

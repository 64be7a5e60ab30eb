//! Configuration file loading.
//!
//! ```toml
//! # ~/.config/quicknav/config.toml
//! navigation = "~/site/navigation.toml"
//! shortcut = "mod+k"
//! ```

use crate::error::ConfigError;
use crate::navigation::expand_tilde;
use crate::overlay::Shortcut;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Navigation metadata file (`.json` or `.toml`)
    pub navigation: Option<PathBuf>,
    /// Open-trigger shortcut, e.g. `mod+k`
    pub shortcut: Shortcut,
}

impl Config {
    /// `<config dir>/quicknav/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quicknav").join("config.toml"))
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load from `path` if given, otherwise from [`Config::default_path`],
    /// falling back to defaults when the default file does not exist.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.navigation = config
            .navigation
            .map(|nav| PathBuf::from(expand_tilde(&nav.to_string_lossy()).as_ref()));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Modifier;
    use assert2::check;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("", Path::new("config.toml")).unwrap();
        check!(config == Config::default());
        check!(config.shortcut == Shortcut::default());
    }

    #[test]
    fn test_full_file() {
        let config = Config::parse(
            "navigation = \"/srv/site/nav.json\"\nshortcut = \"cmd+g\"\n",
            Path::new("config.toml"),
        )
        .unwrap();
        check!(config.navigation == Some(PathBuf::from("/srv/site/nav.json")));
        check!(config.shortcut.modifier == Modifier::Meta);
        check!(config.shortcut.key == 'g');
    }

    #[test]
    fn test_reserved_shortcut_is_a_parse_error() {
        let result = Config::parse("shortcut = \"ctrl+w\"\n", Path::new("config.toml"));
        check!(let Err(ConfigError::Parse { .. }) = result);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Config::parse("theme = \"dark\"\n", Path::new("config.toml"));
        check!(let Err(ConfigError::Parse { .. }) = result);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = Config::discover(Some(Path::new("/nonexistent/quicknav.toml")));
        check!(let Err(ConfigError::Read { .. }) = result);
    }
}

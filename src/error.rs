//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for quicknav's outer surfaces (CLI, server).
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods. The search core itself never fails.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading navigation metadata fails.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The navigation file could not be read.
    #[error("Failed to read navigation file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The navigation file is not valid JSON for the expected shape.
    #[error("Invalid JSON navigation data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The navigation file is not valid TOML for the expected shape.
    #[error("Invalid TOML navigation data in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported navigation file format: {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Error returned when parsing an open-trigger shortcut string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    #[error("Shortcut is empty")]
    Empty,
    #[error("Unknown modifier '{0}' (expected mod, ctrl, cmd, alt or shift)")]
    UnknownModifier(String),
    #[error("Shortcut key must be a single letter, got '{0}'")]
    InvalidKey(String),
    #[error("Shortcut must combine a modifier with a letter, got '{0}'")]
    MissingModifier(String),
    #[error("Shortcut '{0}' is reserved by the browser or operating system")]
    Reserved(String),
    #[error("Shortcut '{0}' types a character; use mod, ctrl or cmd")]
    TypingModifier(String),
}

/// Error returned when loading the configuration file fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid shortcut in config: {0}")]
    Shortcut(#[from] ShortcutError),
}

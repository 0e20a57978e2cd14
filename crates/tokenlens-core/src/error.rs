// ABOUTME: Error types for loading and normalizing design-token configurations
// ABOUTME: Scope and lookup misses are not errors and never appear here

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read token config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Token config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Token config has no '{0}' section")]
    MissingSection(&'static str),

    #[error("Invalid '{section}' section in token config: {reason}")]
    InvalidSection { section: String, reason: String },

    #[error("Malformed theme key '{theme}': {reason}")]
    MalformedThemeKey { theme: String, reason: String },
}

impl ConfigError {
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    pub fn invalid_section<S: Into<String>, R: Into<String>>(section: S, reason: R) -> Self {
        Self::InvalidSection {
            section: section.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_theme<S: Into<String>, R: Into<String>>(theme: S, reason: R) -> Self {
        Self::MalformedThemeKey {
            theme: theme.into(),
            reason: reason.into(),
        }
    }

    /// Missing, unreadable or structurally invalid source (as opposed to bad theme naming).
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::MalformedThemeKey { .. })
    }
}

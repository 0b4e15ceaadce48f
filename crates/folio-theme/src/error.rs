//! Error types for palette and configuration loading.
//!
//! Applying a theme never fails: an unknown theme name degrades to the
//! default palette or is ignored. These errors only come from loading
//! configuration (palette files, theme config), where a typo should be
//! reported rather than silently dropped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building palettes or theme configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// YAML parse error.
    #[error("failed to parse palette YAML: {message}")]
    Yaml {
        /// Error message from the YAML parser.
        message: String,
    },

    /// CSS parse error.
    #[error("failed to parse palette CSS at line {line}, column {column}: {message}")]
    Css {
        message: String,
        line: u32,
        column: u32,
    },

    /// A color role holds a value that is not a CSS color.
    #[error("invalid color '{value}' for role '{role}' in palette '{palette}'")]
    InvalidColor {
        palette: String,
        role: String,
        value: String,
    },

    /// A palette definition has the wrong structure.
    #[error("invalid definition for palette '{palette}': {message}")]
    InvalidDefinition { palette: String, message: String },

    /// The registry was built without its default palette.
    #[error("default palette '{name}' is not registered")]
    MissingDefault { name: String },

    /// Theme configuration is malformed.
    #[error("invalid theme configuration: {message}")]
    Config { message: String },

    /// A palette or configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ThemeError {
    pub(crate) fn definition(palette: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            palette: palette.into(),
            message: message.into(),
        }
    }

    pub(crate) fn load(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Yaml {
            message: err.to_string(),
        }
    }
}

/// Result type for palette and configuration loading.
pub type Result<T> = std::result::Result<T, ThemeError>;

//! Theme manager configuration.
//!
//! The defaults match the site's stylesheet and storage layout, so most
//! embeddings never need a config file. When one is used it is YAML:
//!
//! ```yaml
//! storage_key: portfolio_theme
//! dark_theme: default
//! light_theme: ocean
//! class_prefix: "theme-"
//! meta_color_role: primary
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::theme::ColorMode;

/// Prefix of the theme marker class on the document root.
pub const DEFAULT_CLASS_PREFIX: &str = "theme-";

/// Storage key holding the selected theme name.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio_theme";

/// Theme manager settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Store key for the persisted theme name.
    pub storage_key: String,
    /// Theme applied when the system switches to dark mode.
    pub dark_theme: String,
    /// Theme applied when the system switches to light mode.
    pub light_theme: String,
    /// Prefix of the root marker class (`theme-ocean`).
    pub class_prefix: String,
    /// Palette role used for the browser `theme-color` meta value.
    pub meta_color_role: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_theme: "default".to_string(),
            light_theme: "ocean".to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            meta_color_role: "primary".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses a YAML config. An empty document gives the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| ThemeError::load(path, e))?;
        Self::from_yaml(&yaml)
    }

    /// The theme a system color mode maps to.
    pub fn preferred_theme(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Dark => &self.dark_theme,
            ColorMode::Light => &self.light_theme,
        }
    }

    /// Root marker class for a theme: `ocean` -> `theme-ocean`.
    pub fn marker_class(&self, theme: &str) -> String {
        format!("{}{}", self.class_prefix, theme)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("storage_key", &self.storage_key),
            ("dark_theme", &self.dark_theme),
            ("light_theme", &self.light_theme),
            ("class_prefix", &self.class_prefix),
            ("meta_color_role", &self.meta_color_role),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config {
                    message: format!("'{}' must not be empty", field),
                });
            }
        }
        Ok(())
    }
}

//! Palette registry.
//!
//! [`PaletteRegistry`] is the set of palettes the site can switch between.
//! It always contains its default palette: every constructor requires it,
//! and palettes are only ever added or replaced, never removed. That is what
//! lets the theme manager fall back to the default without a failure path.
//!
//! # Sources
//!
//! - Built-in: [`PaletteRegistry::builtin`] (default, ocean, sunset, forest)
//! - Inline: [`PaletteRegistry::add_yaml`], [`PaletteRegistry::add_css`]
//! - Files: [`PaletteRegistry::add_file`], [`PaletteRegistry::add_dir`]
//!
//! A palette with the same name as an existing one replaces it in place,
//! keeping its position in the selector.
//!
//! # Supported Extensions
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.yaml`, `.yml` | YAML, single palette (named after the file) or several |
//! | `.css` | `.theme-<name>` rules (see [`PaletteRegistry::with_class_prefix`]) |
//!
//! # Example
//!
//! ```rust
//! use folio_theme::PaletteRegistry;
//!
//! let mut registry = PaletteRegistry::builtin();
//! registry.add_css(".theme-mint { --primary: #3EB489; }").unwrap();
//!
//! let names: Vec<_> = registry.names().collect();
//! assert_eq!(names, vec!["default", "ocean", "sunset", "forest", "mint"]);
//! assert_eq!(registry.resolve("neon").name(), "default");
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::css::parse_palettes_css_with_prefix;
use super::palette::{builtin_palettes, Palette, DEFAULT_PALETTE};
use super::yaml::{is_single_palette, parse_palette_yaml, parse_palettes_yaml};
use crate::config::DEFAULT_CLASS_PREFIX;
use crate::error::{Result, ThemeError};

/// Recognized palette file extensions.
pub const PALETTE_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".css"];

/// Ordered set of palettes with a guaranteed default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
    default_index: usize,
    class_prefix: String,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteRegistry {
    /// Creates a registry holding only `default`, which becomes the default palette.
    pub fn new(default: Palette) -> Self {
        Self {
            palettes: vec![default],
            default_index: 0,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }

    /// The site's built-in palettes, with `default` as the default.
    pub fn builtin() -> Self {
        let palettes = builtin_palettes();
        let default_index = palettes
            .iter()
            .position(|p| p.name() == DEFAULT_PALETTE)
            .unwrap_or(0);
        Self {
            palettes,
            default_index,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }

    /// Builds a registry from palettes in order. Later duplicates replace
    /// earlier ones. Fails if `default_name` is not among them.
    pub fn from_palettes(
        palettes: impl IntoIterator<Item = Palette>,
        default_name: &str,
    ) -> Result<Self> {
        let mut collected: Vec<Palette> = Vec::new();
        for palette in palettes {
            match collected.iter_mut().find(|p| p.name() == palette.name()) {
                Some(slot) => *slot = palette,
                None => collected.push(palette),
            }
        }

        let default_index = collected
            .iter()
            .position(|p| p.name() == default_name)
            .ok_or_else(|| ThemeError::MissingDefault {
                name: default_name.to_string(),
            })?;

        Ok(Self {
            palettes: collected,
            default_index,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        })
    }

    /// Sets the class prefix CSS palettes are read with. It should match
    /// the manager's [`ThemeConfig::class_prefix`](crate::ThemeConfig).
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Adds a palette, replacing a same-named one in place.
    ///
    /// Returns the replaced palette, if any.
    pub fn insert(&mut self, palette: Palette) -> Option<Palette> {
        match self.palettes.iter_mut().find(|p| p.name() == palette.name()) {
            Some(slot) => Some(std::mem::replace(slot, palette)),
            None => {
                self.palettes.push(palette);
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, palette: Palette) -> Self {
        self.insert(palette);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Palette names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(Palette::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn default_name(&self) -> &str {
        self.default_palette().name()
    }

    pub fn default_palette(&self) -> &Palette {
        &self.palettes[self.default_index]
    }

    /// Returns the palette for `name`, or the default palette if unknown.
    pub fn resolve(&self, name: &str) -> &Palette {
        self.get(name).unwrap_or_else(|| self.default_palette())
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false; kept alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Adds every palette in a multi-palette YAML document.
    pub fn add_yaml(&mut self, yaml: &str) -> Result<usize> {
        let palettes = parse_palettes_yaml(yaml)?;
        Ok(self.extend(palettes))
    }

    /// Adds every palette defined in a CSS document, reading rules for
    /// classes with the registry's class prefix.
    pub fn add_css(&mut self, css: &str) -> Result<usize> {
        let palettes = parse_palettes_css_with_prefix(css, &self.class_prefix)?;
        Ok(self.extend(palettes))
    }

    /// Loads palettes from one file, dispatching on its extension.
    ///
    /// A YAML file with a top-level `colors` key is a single palette named
    /// after the file stem. Returns the number of palettes added or replaced.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let extension = palette_extension(path).ok_or_else(|| {
            ThemeError::load(
                path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("expected one of {:?}", PALETTE_EXTENSIONS),
                ),
            )
        })?;
        let content = fs::read_to_string(path).map_err(|e| ThemeError::load(path, e))?;

        let palettes = if extension == ".css" {
            parse_palettes_css_with_prefix(&content, &self.class_prefix)?
        } else if is_single_palette(&content)? {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ThemeError::definition("", "file name is not valid UTF-8"))?;
            vec![parse_palette_yaml(stem, &content)?]
        } else {
            parse_palettes_yaml(&content)?
        };

        tracing::debug!(path = %path.display(), count = palettes.len(), "loaded palette file");
        Ok(self.extend(palettes))
    }

    /// Loads every palette file in a directory, in file name order.
    ///
    /// Subdirectories and files with other extensions are skipped.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let entries = fs::read_dir(path).map_err(|e| ThemeError::load(path, e))?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ThemeError::load(path, e))?;
            let file = entry.path();
            if file.is_file() && palette_extension(&file).is_some() {
                files.push(file);
            }
        }
        files.sort();

        let mut count = 0;
        for file in files {
            count += self.add_file(&file)?;
        }
        Ok(count)
    }

    fn extend(&mut self, palettes: Vec<Palette>) -> usize {
        let count = palettes.len();
        for palette in palettes {
            self.insert(palette);
        }
        count
    }
}

fn palette_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    PALETTE_EXTENSIONS
        .iter()
        .copied()
        .find(|candidate| candidate[1..] == ext)
}

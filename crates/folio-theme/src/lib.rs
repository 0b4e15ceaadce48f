//! # Folio Theme - Palette Theming for the Portfolio Site
//!
//! `folio-theme` applies named color palettes to a rendered document,
//! remembers the visitor's choice across page loads, and follows the system
//! light/dark preference until a choice is made.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: Named mapping from color roles to CSS color values
//! - [`PaletteRegistry`]: The palettes a site offers, always including a default
//! - [`ThemeManager`]: Applies palettes, persists selections, follows the system mode
//! - [`RenderSurface`]: Write-only document abstraction; [`DocumentSurface`] keeps it in memory
//! - [`ThemeChanged`]: Notification sent to subscribers after every application
//! - [`ThemeSelector`]: View model of the palette dropdown
//! - [`ThemeConfig`]: Storage key, class prefix and preference themes
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_store::MemoryStore;
//! use folio_theme::{DocumentSurface, PaletteRegistry, ThemeManager};
//!
//! let mut manager = ThemeManager::new(
//!     PaletteRegistry::builtin(),
//!     MemoryStore::new(),
//!     DocumentSurface::new(),
//! );
//!
//! manager.apply_theme("forest");
//! assert_eq!(manager.current_theme(), "forest");
//! assert_eq!(manager.load_persisted_theme(), "forest");
//!
//! // Unknown names are ignored.
//! manager.apply_theme("neon");
//! assert_eq!(manager.current_theme(), "forest");
//!
//! print!("{}", manager.surface().to_css());
//! ```
//!
//! ## Custom Palettes
//!
//! Palettes can be added from YAML or CSS, inline or from a directory:
//!
//! ```rust
//! use folio_theme::PaletteRegistry;
//!
//! let mut registry = PaletteRegistry::builtin();
//! registry.add_yaml(r##"
//! mint:
//!   label: Mint
//!   colors:
//!     primary: "#3EB489"
//!     background: "#0B1A14"
//! "##).unwrap();
//!
//! registry.add_css(".theme-lava { --primary: #CF1020; --surface-light: #3A1A1A; }").unwrap();
//!
//! assert_eq!(registry.get("lava").unwrap().get("surfaceLight"), Some("#3A1A1A"));
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber:
//! `info` when a theme is applied, `debug` when an unknown theme is ignored
//! or a color mode change is skipped.

mod config;
mod error;
pub mod palette;
pub mod theme;

pub use config::{ThemeConfig, DEFAULT_CLASS_PREFIX, DEFAULT_STORAGE_KEY};
pub use error::{Result, ThemeError};

pub use palette::{ColorValue, Palette, PaletteRegistry, DEFAULT_PALETTE};

pub use theme::{
    detect_color_mode, reset_preference_detector, set_preference_detector, ChangeSource,
    ColorMode, DocumentSurface, PreferenceWatcher, RenderSurface, SubscriptionId, ThemeChanged,
    ThemeManager, ThemeOption, ThemeSelector, ThemeState,
};

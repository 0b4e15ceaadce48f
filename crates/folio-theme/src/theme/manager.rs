//! The theme manager.
//!
//! [`ThemeManager`] owns the theme state of one page: which palette is
//! applied and whether the system prefers dark mode. It is the only writer
//! of that state. Persistence and rendering are injected, so the same
//! manager drives a browser document, a static page generator, or a test.
//!
//! # Lifecycle
//!
//! 1. [`ThemeManager::new`] reads the persisted theme name (or the default).
//! 2. [`ThemeManager::init`] applies it to the surface and starts watching
//!    the system color mode.
//! 3. [`ThemeManager::apply_theme`] handles explicit selections, which are
//!    persisted. Once one exists, system color mode changes are ignored.
//!
//! Applying an unknown theme name is a no-op. Loading an unknown persisted
//! name falls back to the default palette. Neither is an error.
//!
//! # Example
//!
//! ```rust
//! use folio_store::{KeyValueStore, MemoryStore};
//! use folio_theme::{DocumentSurface, PaletteRegistry, ThemeManager};
//!
//! let mut manager = ThemeManager::new(
//!     PaletteRegistry::builtin(),
//!     MemoryStore::new(),
//!     DocumentSurface::new(),
//! );
//! manager.init();
//! assert_eq!(manager.current_theme(), "default");
//!
//! manager.apply_theme("ocean");
//! assert_eq!(manager.surface().variable("--primary"), Some("#00D4AA"));
//! assert_eq!(manager.store().get("portfolio_theme").as_deref(), Some("ocean"));
//! ```

use std::sync::mpsc::Receiver;

use folio_store::KeyValueStore;

use super::events::{ChangeListeners, ChangeSource, SubscriptionId, ThemeChanged};
use super::mode::{detect_color_mode, ColorMode, PreferenceWatcher};
use super::surface::RenderSurface;
use crate::config::ThemeConfig;
use crate::palette::{Palette, PaletteRegistry};

/// Theme state of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    /// Always a name present in the registry.
    pub current_theme: String,
    pub prefers_dark_mode: bool,
}

/// Applies palettes to a render surface and persists the selection.
#[derive(Debug)]
pub struct ThemeManager<S, R> {
    registry: PaletteRegistry,
    config: ThemeConfig,
    store: S,
    surface: R,
    state: ThemeState,
    watching: bool,
    manual_selection: bool,
    detector: fn() -> ColorMode,
    listeners: ChangeListeners,
}

impl<S: KeyValueStore, R: RenderSurface> ThemeManager<S, R> {
    /// Creates a manager with the default configuration.
    pub fn new(registry: PaletteRegistry, store: S, surface: R) -> Self {
        Self::with_config(registry, ThemeConfig::default(), store, surface)
    }

    /// Creates a manager. The current theme starts as the persisted theme;
    /// nothing is written to the surface until [`init`](Self::init).
    pub fn with_config(
        registry: PaletteRegistry,
        config: ThemeConfig,
        store: S,
        surface: R,
    ) -> Self {
        let mut manager = Self {
            state: ThemeState {
                current_theme: registry.default_name().to_string(),
                prefers_dark_mode: false,
            },
            registry,
            config,
            store,
            surface,
            watching: false,
            manual_selection: false,
            detector: detect_color_mode,
            listeners: ChangeListeners::new(),
        };
        manager.state.current_theme = manager.load_persisted_theme();
        manager.manual_selection = manager.stored_selection();
        manager
    }

    /// Replaces the color mode detector consulted when watching starts.
    pub fn with_detector(mut self, detector: fn() -> ColorMode) -> Self {
        self.detector = detector;
        self
    }

    /// Applies the persisted theme and starts watching the system color mode.
    ///
    /// The startup application is not persisted, so a visitor who never
    /// picked a theme keeps following the system preference on later loads.
    pub fn init(&mut self) {
        let theme = self.load_persisted_theme();
        self.apply(&theme, ChangeSource::Startup);
        self.watch_system_preference();
    }

    /// Returns the persisted theme name if it names a known palette,
    /// otherwise the default palette's name.
    pub fn load_persisted_theme(&self) -> String {
        match self.store.get(&self.config.storage_key) {
            Some(saved) if self.registry.contains(&saved) => saved,
            Some(saved) => {
                tracing::debug!(
                    theme = %saved,
                    fallback = self.registry.default_name(),
                    "persisted theme is not registered, using default"
                );
                self.registry.default_name().to_string()
            }
            None => self.registry.default_name().to_string(),
        }
    }

    /// Applies and persists a theme chosen by the visitor.
    ///
    /// Unknown names are ignored. Returns whether the theme was applied.
    pub fn apply_theme(&mut self, name: &str) -> bool {
        self.apply(name, ChangeSource::User)
    }

    /// Starts following system color mode changes delivered through
    /// [`handle_preference_change`](Self::handle_preference_change).
    pub fn watch_system_preference(&mut self) {
        if self.watching {
            return;
        }
        self.watching = true;
        self.state.prefers_dark_mode = (self.detector)().is_dark();
        tracing::debug!(
            prefers_dark_mode = self.state.prefers_dark_mode,
            "watching system color mode"
        );
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }

    /// Delivers a system color mode change.
    ///
    /// Ignored until watching has started. While no theme has been
    /// persisted, applies the theme configured for `mode`. Returns whether a
    /// theme was applied.
    pub fn handle_preference_change(&mut self, mode: ColorMode) -> bool {
        if !self.watching {
            tracing::debug!(?mode, "not watching system color mode, ignoring change");
            return false;
        }
        self.state.prefers_dark_mode = mode.is_dark();

        if self.has_manual_selection() {
            tracing::debug!(?mode, "theme was selected manually, ignoring color mode change");
            return false;
        }

        let theme = self.config.preferred_theme(mode).to_string();
        self.apply(&theme, ChangeSource::SystemPreference)
    }

    /// Polls `watcher` and delivers a change if one occurred.
    pub fn poll_preference(&mut self, watcher: &mut PreferenceWatcher) -> bool {
        match watcher.poll() {
            Some(mode) => self.handle_preference_change(mode),
            None => false,
        }
    }

    /// True once the visitor picked a theme, on this page or an earlier one.
    ///
    /// Stays true for the life of the manager even if the stored selection
    /// is later removed. An empty stored value is not a selection.
    pub fn has_manual_selection(&self) -> bool {
        self.manual_selection || self.stored_selection()
    }

    fn stored_selection(&self) -> bool {
        self.store
            .get(&self.config.storage_key)
            .is_some_and(|saved| !saved.is_empty())
    }

    pub fn current_theme(&self) -> &str {
        &self.state.current_theme
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn prefers_dark_mode(&self) -> bool {
        self.state.prefers_dark_mode
    }

    /// Palette for `name`, or for the current theme when `None`.
    /// Unknown names give the default palette.
    pub fn theme_colors(&self, name: Option<&str>) -> &Palette {
        self.registry
            .resolve(name.unwrap_or(&self.state.current_theme))
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// The surface, for page setup unrelated to theming.
    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Registers a change callback.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeChanged) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Opens a channel receiving every subsequent change.
    pub fn subscribe_channel(&mut self) -> Receiver<ThemeChanged> {
        self.listeners.channel()
    }

    /// Consumes the manager, returning its store and surface.
    pub fn into_parts(self) -> (S, R) {
        (self.store, self.surface)
    }

    fn apply(&mut self, name: &str, source: ChangeSource) -> bool {
        let Some(palette) = self.registry.get(name) else {
            tracing::debug!(theme = name, ?source, "ignoring unknown theme");
            return false;
        };

        for (variable, value) in palette.css_variables() {
            self.surface.set_style_variable(&variable, value);
        }
        self.surface
            .remove_classes_with_prefix(&self.config.class_prefix);
        self.surface.add_class(&self.config.marker_class(name));
        if let Some(color) = palette.get(&self.config.meta_color_role) {
            self.surface.set_meta_theme_color(color);
        }

        self.state.current_theme = name.to_string();
        if source == ChangeSource::User {
            self.store.set(&self.config.storage_key, name);
            self.manual_selection = true;
        }

        tracing::info!(theme = name, ?source, "applied theme");

        let event = ThemeChanged {
            theme: name.to_string(),
            colors: palette.clone(),
            source,
        };
        self.listeners.notify(&event);
        true
    }
}

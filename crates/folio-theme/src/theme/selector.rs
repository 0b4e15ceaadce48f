//! View model of the palette dropdown.
//!
//! The header shows a palette button that opens a list of theme options,
//! each with a color swatch. The selector tracks whether the list is open;
//! the options themselves are derived from the manager on every read, so
//! the active marker always follows the applied theme.

use folio_store::KeyValueStore;

use super::manager::ThemeManager;
use super::surface::RenderSurface;

/// One entry of the theme dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOption {
    pub name: String,
    pub label: String,
    /// Preview color, the palette's `primary`.
    pub swatch: Option<String>,
    pub active: bool,
}

/// Open/closed state of the theme dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelector {
    open: bool,
}

impl ThemeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handles a click on the palette button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Handles a click anywhere outside the dropdown.
    pub fn click_outside(&mut self) {
        self.close();
    }

    /// Options in registry order, marking the current theme active.
    pub fn options<S, R>(&self, manager: &ThemeManager<S, R>) -> Vec<ThemeOption>
    where
        S: KeyValueStore,
        R: RenderSurface,
    {
        manager
            .registry()
            .iter()
            .map(|palette| ThemeOption {
                name: palette.name().to_string(),
                label: palette.label().to_string(),
                swatch: palette.primary().map(str::to_string),
                active: palette.name() == manager.current_theme(),
            })
            .collect()
    }

    /// Applies the chosen theme and closes the dropdown.
    ///
    /// An unknown name changes nothing, and the dropdown stays as it was.
    pub fn choose<S, R>(&mut self, manager: &mut ThemeManager<S, R>, name: &str) -> bool
    where
        S: KeyValueStore,
        R: RenderSurface,
    {
        if !manager.apply_theme(name) {
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DocumentSurface, PaletteRegistry};
    use folio_store::MemoryStore;

    fn manager() -> ThemeManager<MemoryStore, DocumentSurface> {
        ThemeManager::new(
            PaletteRegistry::builtin(),
            MemoryStore::new(),
            DocumentSurface::new(),
        )
    }

    #[test]
    fn test_toggle_and_click_outside() {
        let mut selector = ThemeSelector::new();
        assert!(!selector.is_open());

        selector.toggle();
        assert!(selector.is_open());
        selector.toggle();
        assert!(!selector.is_open());

        selector.open();
        selector.click_outside();
        assert!(!selector.is_open());
    }

    #[test]
    fn test_options_follow_registry() {
        let manager = manager();
        let options = ThemeSelector::new().options(&manager);

        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Default", "Ocean", "Sunset", "Forest"]);
        assert_eq!(options[2].swatch.as_deref(), Some("#FF6B6B"));

        let active: Vec<_> = options.iter().filter(|o| o.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "default");
    }

    #[test]
    fn test_choose_applies_and_closes() {
        let mut manager = manager();
        let mut selector = ThemeSelector::new();
        selector.toggle();

        assert!(selector.choose(&mut manager, "forest"));
        assert!(!selector.is_open());
        assert_eq!(manager.current_theme(), "forest");

        let options = selector.options(&manager);
        let active: Vec<_> = options
            .iter()
            .filter(|o| o.active)
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(active, vec!["forest"]);
    }

    #[test]
    fn test_choose_unknown_changes_nothing() {
        let mut manager = manager();
        let mut selector = ThemeSelector::new();
        selector.open();

        assert!(!selector.choose(&mut manager, "neon"));
        assert!(selector.is_open());
        assert_eq!(manager.current_theme(), "default");
        assert!(!manager.has_manual_selection());
    }
}

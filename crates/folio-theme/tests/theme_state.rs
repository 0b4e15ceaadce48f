//! Integration tests for theme application and persistence.
//!
//! These drive the manager through its public API with a shared store, the
//! way a page does across loads.

use folio_store::{FileStore, KeyValueStore, MemoryStore, SharedStore};
use folio_theme::{
    ChangeSource, ColorMode, DocumentSurface, Palette, PaletteRegistry, ThemeManager,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn light() -> ColorMode {
    ColorMode::Light
}

fn page_load<S: KeyValueStore>(store: S) -> ThemeManager<S, DocumentSurface> {
    let mut manager = ThemeManager::new(PaletteRegistry::builtin(), store, DocumentSurface::new())
        .with_detector(light);
    manager.init();
    manager
}

fn two_palette_registry() -> PaletteRegistry {
    let builtin = PaletteRegistry::builtin();
    PaletteRegistry::from_palettes(
        [
            builtin.get("default").cloned(),
            builtin.get("ocean").cloned(),
        ]
        .into_iter()
        .flatten(),
        "default",
    )
    .unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn ocean_selection_is_persisted_and_rendered() {
    let mut manager =
        ThemeManager::new(two_palette_registry(), MemoryStore::new(), DocumentSurface::new());

    manager.apply_theme("ocean");

    assert_eq!(
        manager.store().get("portfolio_theme").as_deref(),
        Some("ocean")
    );
    assert_eq!(manager.surface().variable("--primary"), Some("#00D4AA"));
}

#[test]
fn unknown_persisted_theme_loads_default() {
    let store = MemoryStore::new().with_entry("portfolio_theme", "neon");
    let manager = ThemeManager::new(two_palette_registry(), store, DocumentSurface::new());
    assert_eq!(manager.load_persisted_theme(), "default");
}

#[test]
fn empty_store_loads_default() {
    let manager = ThemeManager::new(
        PaletteRegistry::builtin(),
        MemoryStore::new(),
        DocumentSurface::new(),
    );
    assert_eq!(manager.load_persisted_theme(), "default");
}

#[test]
fn selection_survives_page_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("localStorage.json");

    {
        let mut first = page_load(FileStore::open(&path));
        first.apply_theme("sunset");
    }

    let second = page_load(FileStore::open(&path));
    assert_eq!(second.current_theme(), "sunset");
    assert!(second.surface().has_class("theme-sunset"));
    assert_eq!(second.surface().meta_theme_color(), Some("#FF6B6B"));
}

#[test]
fn system_preference_is_followed_until_a_selection() {
    let store = SharedStore::new(MemoryStore::new());
    let mut manager = page_load(store.clone());

    assert!(manager.handle_preference_change(ColorMode::Light));
    assert_eq!(manager.current_theme(), "ocean");
    assert!(store.get("portfolio_theme").is_none());

    manager.apply_theme("forest");
    assert!(!manager.handle_preference_change(ColorMode::Dark));
    assert_eq!(manager.current_theme(), "forest");

    // A later page load keeps ignoring the system preference.
    let mut next = page_load(store.clone());
    assert!(!next.handle_preference_change(ColorMode::Light));
    assert_eq!(next.current_theme(), "forest");
}

#[test]
fn custom_palette_can_be_applied() {
    let registry = PaletteRegistry::builtin().with(
        Palette::new("mint")
            .with_label("Mint")
            .color("primary", "#3EB489")
            .color("surfaceLight", "#1F3A30"),
    );
    let mut manager = ThemeManager::new(registry, MemoryStore::new(), DocumentSurface::new());
    let rx = manager.subscribe_channel();

    manager.apply_theme("mint");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.theme, "mint");
    assert_eq!(event.source, ChangeSource::User);
    assert_eq!(
        manager.surface().to_css(),
        ":root {\n  --primary: #3EB489;\n  --surface-light: #1F3A30;\n}\n"
    );
}

// ============================================================================
// Property tests
// ============================================================================

fn registered_name() -> impl Strategy<Value = String> {
    prop::sample::select(
        PaletteRegistry::builtin()
            .names()
            .map(str::to_string)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn applied_theme_is_loaded_back(name in registered_name()) {
        let mut manager = ThemeManager::new(
            PaletteRegistry::builtin(),
            MemoryStore::new(),
            DocumentSurface::new(),
        );
        manager.apply_theme(&name);
        prop_assert_eq!(manager.load_persisted_theme(), name);
    }

    #[test]
    fn unknown_theme_leaves_current_theme(
        first in registered_name(),
        unknown in "[a-z]{1,12}",
    ) {
        prop_assume!(!PaletteRegistry::builtin().contains(&unknown));

        let mut manager = ThemeManager::new(
            PaletteRegistry::builtin(),
            MemoryStore::new(),
            DocumentSurface::new(),
        );
        manager.apply_theme(&first);
        manager.apply_theme(&unknown);
        prop_assert_eq!(manager.current_theme(), first.as_str());
    }

    #[test]
    fn applying_twice_is_idempotent(name in registered_name()) {
        let mut once = ThemeManager::new(
            PaletteRegistry::builtin(),
            MemoryStore::new(),
            DocumentSurface::new(),
        );
        once.apply_theme(&name);

        let mut twice = ThemeManager::new(
            PaletteRegistry::builtin(),
            MemoryStore::new(),
            DocumentSurface::new(),
        );
        twice.apply_theme(&name);
        twice.apply_theme(&name);

        prop_assert_eq!(once.store(), twice.store());
        prop_assert_eq!(once.surface(), twice.surface());
    }

    #[test]
    fn current_theme_is_always_registered(
        names in prop::collection::vec(prop_oneof![registered_name(), "[a-z]{1,8}"], 0..12),
    ) {
        let registry = PaletteRegistry::builtin();
        let mut manager = ThemeManager::new(registry.clone(), MemoryStore::new(), DocumentSurface::new());
        for name in &names {
            manager.apply_theme(name);
            prop_assert!(registry.contains(manager.current_theme()));
        }
    }
}

//! Theme application.
//!
//! This module provides:
//!
//! - [`ThemeManager`]: Applies palettes, persists the selection, follows the
//!   system color mode
//! - [`RenderSurface`] / [`DocumentSurface`]: Where palettes are written
//! - [`ThemeChanged`]: Change notifications, via callbacks or a channel
//! - [`ColorMode`], [`detect_color_mode`], [`PreferenceWatcher`]: System
//!   light/dark detection
//! - [`ThemeSelector`]: The palette dropdown
//!
//! # Applying a Theme
//!
//! Applying `ocean` writes one style variable per color role
//! (`--primary: #00D4AA`, `--primary-dark: #00B894`, ...), replaces any
//! `theme-*` class on the document root with `theme-ocean`, sets the
//! browser `theme-color` to the palette's primary, and notifies listeners.
//! Only explicit selections are persisted.

mod events;
mod manager;
mod mode;
mod selector;
mod surface;

pub use events::{ChangeListeners, ChangeSource, SubscriptionId, ThemeChanged, ThemeListenerFn};
pub use manager::{ThemeManager, ThemeState};
pub use mode::{
    detect_color_mode, reset_preference_detector, set_preference_detector, ColorMode,
    PreferenceWatcher,
};
pub use selector::{ThemeOption, ThemeSelector};
pub use surface::{DocumentSurface, RenderSurface};

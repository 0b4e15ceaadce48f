//! System color mode detection.
//!
//! The site follows the system light/dark preference until the visitor picks
//! a theme. In a browser that signal is the `prefers-color-scheme` media
//! query; natively it is the OS setting, read through the `dark-light` crate.
//!
//! Detection is global and can be overridden for tests:
//!
//! ```rust
//! use folio_theme::{detect_color_mode, reset_preference_detector, set_preference_detector, ColorMode};
//!
//! set_preference_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! reset_preference_detector();
//! ```
//!
//! Hosts without a push signal can drive the theme manager from a
//! [`PreferenceWatcher`], which polls the detector and reports transitions.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ColorMode {
    /// Maps a `prefers-color-scheme: dark` match result to a mode.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

type PreferenceDetector = fn() -> ColorMode;

static PREFERENCE_DETECTOR: Lazy<Mutex<PreferenceDetector>> =
    Lazy::new(|| Mutex::new(os_preference_detector));

/// Overrides the detector used by [`detect_color_mode`].
pub fn set_preference_detector(detector: PreferenceDetector) {
    let mut guard = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores OS detection.
pub fn reset_preference_detector() {
    set_preference_detector(os_preference_detector);
}

/// Detects the system color mode.
///
/// Uses the OS setting unless overridden with [`set_preference_detector`].
/// An unknown or unreadable setting counts as light, matching a browser
/// where `prefers-color-scheme: dark` does not match.
pub fn detect_color_mode() -> ColorMode {
    let detector = *PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_preference_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ColorMode::Light,
        Err(err) => {
            tracing::debug!(error = ?err, "color mode detection failed, assuming light");
            ColorMode::Light
        }
    }
}

/// Polls the color mode detector and reports changes.
#[derive(Debug, Clone)]
pub struct PreferenceWatcher {
    last: ColorMode,
}

impl PreferenceWatcher {
    /// Starts watching from the currently detected mode.
    pub fn new() -> Self {
        Self::starting_at(detect_color_mode())
    }

    /// Starts watching from a known mode.
    pub fn starting_at(mode: ColorMode) -> Self {
        Self { last: mode }
    }

    /// The last observed mode.
    pub fn current(&self) -> ColorMode {
        self.last
    }

    /// Detects the mode and returns it if it changed since the last poll.
    pub fn poll(&mut self) -> Option<ColorMode> {
        self.observe(detect_color_mode())
    }

    /// Records an observed mode and returns it if it differs from the last one.
    pub fn observe(&mut self, mode: ColorMode) -> Option<ColorMode> {
        if mode == self.last {
            return None;
        }
        self.last = mode;
        Some(mode)
    }
}

impl Default for PreferenceWatcher {
    fn default() -> Self {
        Self::new()
    }
}

//! The intro video page.
//!
//! The landing page plays a short video, then sends the visitor to the home
//! page. The visitor can pause, mute, or skip it with Escape.

use std::time::Duration;

use crate::page::HOME_PATH;

/// Wait before leaving the page after the video fails to load.
pub const ERROR_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// What the page should do after an intro event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroAction {
    /// Nothing beyond updating the controls.
    None,
    /// Navigate to `path` after `delay`.
    Redirect { path: &'static str, delay: Duration },
}

impl IntroAction {
    fn home_now() -> Self {
        IntroAction::Redirect {
            path: HOME_PATH,
            delay: Duration::ZERO,
        }
    }
}

/// Playback state of the intro video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroPlayer {
    paused: bool,
    muted: bool,
}

impl Default for IntroPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroPlayer {
    /// The video autoplays muted.
    pub fn new() -> Self {
        Self {
            paused: false,
            muted: true,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_play(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Icon of the play/pause button.
    pub fn play_icon(&self) -> &'static str {
        if self.paused {
            "fa-play"
        } else {
            "fa-pause"
        }
    }

    /// Icon of the mute button.
    pub fn volume_icon(&self) -> &'static str {
        if self.muted {
            "fa-volume-mute"
        } else {
            "fa-volume-up"
        }
    }

    /// Handles a key press by its `KeyboardEvent.code`.
    ///
    /// Keys typed into a text field are ignored.
    pub fn key_down(&mut self, code: &str, in_text_field: bool) -> IntroAction {
        if in_text_field {
            return IntroAction::None;
        }
        match code {
            "Space" => self.toggle_play(),
            "KeyM" => self.toggle_mute(),
            "Escape" => return IntroAction::home_now(),
            _ => {}
        }
        IntroAction::None
    }

    pub fn ended(&self) -> IntroAction {
        IntroAction::home_now()
    }

    pub fn failed(&self) -> IntroAction {
        tracing::warn!("intro video failed to load, redirecting to home");
        IntroAction::Redirect {
            path: HOME_PATH,
            delay: ERROR_REDIRECT_DELAY,
        }
    }
}

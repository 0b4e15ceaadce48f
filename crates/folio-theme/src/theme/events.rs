//! Theme change notifications.
//!
//! Every applied theme produces a [`ThemeChanged`] event. Collaborators such
//! as the theme selector or analytics either register a callback or take a
//! channel receiver. Listeners run synchronously, in registration order.

use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::palette::Palette;

/// What triggered a theme application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSource {
    /// The persisted (or default) theme applied on page load.
    Startup,
    /// An explicit selection, which is persisted.
    User,
    /// A system light/dark change while no selection exists.
    SystemPreference,
}

/// Payload delivered to theme listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChanged {
    /// Name of the applied theme.
    pub theme: String,
    /// The applied palette.
    pub colors: Palette,
    pub source: ChangeSource,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Type alias for theme change callbacks.
pub type ThemeListenerFn = Rc<dyn Fn(&ThemeChanged)>;

/// Registered callbacks and channels.
#[derive(Clone, Default)]
pub struct ChangeListeners {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, ThemeListenerFn)>,
    channels: Vec<Sender<ThemeChanged>>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeChanged) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Rc::new(listener)));
        id
    }

    /// Removes a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Opens a channel that receives every subsequent event.
    ///
    /// Dropping the receiver unsubscribes it.
    pub fn channel(&mut self) -> Receiver<ThemeChanged> {
        let (tx, rx) = mpsc::channel();
        self.channels.push(tx);
        rx
    }

    /// Delivers an event to every callback and open channel.
    pub fn notify(&mut self, event: &ThemeChanged) {
        for (_, listener) in &self.callbacks {
            listener(event);
        }
        self.channels.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of registered callbacks and open channels.
    pub fn len(&self) -> usize {
        self.callbacks.len() + self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("callback_count", &self.callbacks.len())
            .field("channel_count", &self.channels.len())
            .finish()
    }
}

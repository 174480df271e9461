//! Observable theme selection with persisted restore
//!
//! `ThemeStore` owns the current `ThemeName` and a list of subscribers. Every
//! subscriber gets the current value when it subscribes and each new value
//! after that, synchronously and in subscription order.
//!
//! Storage is optional. A store built without one never touches storage, which
//! is how headless runs stay free of persistence side effects.

pub mod storage;

#[cfg(test)]
mod tests;

use log::{debug, info, warn};

use crate::theme::{get_theme, Palette, ThemeName};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, StorageError};

/// Key under which the selected theme name is persisted
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// Still holding the compiled-in default
    UninitializedDefault,
    /// Restored from storage or chosen by the user
    Resolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemeName)>;

pub struct ThemeStore {
    current: ThemeName,
    state: SelectionState,
    storage: Option<Box<dyn PreferenceStorage>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ThemeStore {
    pub fn new(default: ThemeName, storage: Option<Box<dyn PreferenceStorage>>) -> Self {
        Self {
            current: default,
            state: SelectionState::UninitializedDefault,
            storage,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Store with the default theme and no persistence
    pub fn headless() -> Self {
        Self::new(ThemeName::default(), None)
    }

    pub fn has_persistent_storage(&self) -> bool {
        self.storage.is_some()
    }

    pub fn get(&self) -> ThemeName {
        self.current
    }

    pub fn current_palette(&self) -> &'static Palette {
        get_theme(self.current)
    }

    pub fn selection_state(&self) -> SelectionState {
        self.state
    }

    /// Restore the persisted theme, if one is stored and names a registered theme.
    ///
    /// Safe to call repeatedly. Anything other than an exact registered name is
    /// ignored and the current value is kept.
    pub fn initialize_theme(&mut self) {
        let Some(storage) = self.storage.as_ref() else {
            debug!("No persistent storage, keeping theme {}", self.current);
            return;
        };

        let stored = match storage.get_item(THEME_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!("No stored theme preference");
                return;
            }
            Err(e) => {
                warn!("Failed to read theme preference: {e}");
                return;
            }
        };

        match stored.parse::<ThemeName>() {
            Ok(name) => {
                info!("Restored theme: {name}");
                self.state = SelectionState::Resolved;
                self.set(name);
            }
            Err(e) => debug!("Ignoring stored theme preference: {e}"),
        }
    }

    /// Make `name` the current theme and persist it when storage is available.
    pub fn switch_theme(&mut self, name: ThemeName) {
        self.state = SelectionState::Resolved;
        self.set(name);

        if let Some(storage) = self.storage.as_mut() {
            if let Err(e) = storage.set_item(THEME_KEY, name.as_str()) {
                warn!("Failed to persist theme '{name}': {e}");
            }
        }
    }

    /// Register `subscriber`, calling it right away with the current theme.
    pub fn subscribe<F>(&mut self, mut subscriber: F) -> SubscriptionId
    where
        F: FnMut(ThemeName) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        subscriber(self.current);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    // Subscribers only hear about actual changes.
    fn set(&mut self, name: ThemeName) {
        if self.current == name {
            return;
        }
        self.current = name;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(name);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::headless()
    }
}

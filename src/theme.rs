//! Theme preference resolution, persistence, and toggle.
//!
//! Resolution order is: persisted value, then the system color-scheme signal,
//! then light. Only an explicit toggle writes the preference back. Storage
//! failures degrade to a session-only preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::StoreError;

/// Presentation mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Value written to storage and to the root `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is unknown.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolve the initial theme. A recognised persisted value always wins.
#[must_use]
pub fn resolve(persisted: Option<&str>, system_prefers_dark: bool) -> ThemePreference {
    if let Some(theme) = persisted.and_then(ThemePreference::parse) {
        return theme;
    }
    if system_prefers_dark { ThemePreference::Dark } else { ThemePreference::Light }
}

/// Durable key-value store holding the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Where the active theme is shown (the document root in the browser).
pub trait ThemeTarget {
    fn apply(&mut self, theme: ThemePreference);
}

/// In-memory store used when durable storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// Owns the current theme together with its store and presentation target.
pub struct ThemeController<S, T> {
    store: S,
    target: T,
    current: ThemePreference,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeController<S, T> {
    /// Resolve the initial theme and apply it without persisting.
    pub fn init(store: S, mut target: T, system_prefers_dark: bool) -> Self {
        let persisted = store.load(THEME_STORAGE_KEY);
        let current = resolve(persisted.as_deref(), system_prefers_dark);
        target.apply(current);
        log::debug!("theme resolved to {}", current.as_str());
        Self { store, target, current }
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Persist `theme` and apply it. A failed write keeps the in-memory value.
    pub fn set(&mut self, theme: ThemePreference) {
        self.current = theme;
        self.target.apply(theme);
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DocumentRoot, LocalStorage, system_prefers_dark};

#[cfg(feature = "hydrate")]
mod browser {
    use super::{PreferenceStore, ThemePreference, ThemeTarget};
    use crate::consts::{PREFERS_DARK_QUERY, THEME_ATTRIBUTE};
    use crate::dom::js_err;
    use crate::error::StoreError;

    /// `window.localStorage`.
    pub struct LocalStorage(pub web_sys::Storage);

    impl LocalStorage {
        /// `None` when the browser denies storage access (private mode, policy).
        pub fn open(window: &web_sys::Window) -> Option<Self> {
            match window.local_storage() {
                Ok(Some(storage)) => Some(Self(storage)),
                Ok(None) | Err(_) => None,
            }
        }
    }

    impl PreferenceStore for LocalStorage {
        fn load(&self, key: &str) -> Option<String> {
            match self.0.get_item(key) {
                Ok(value) => value,
                Err(_) => None,
            }
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set_item(key, value).map_err(|e| StoreError::Write(js_err(e).to_string()))
        }
    }

    /// The `<html>` element's `data-theme` attribute.
    pub struct DocumentRoot(pub web_sys::Element);

    impl ThemeTarget for DocumentRoot {
        fn apply(&mut self, theme: ThemePreference) {
            if let Err(e) = self.0.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("failed to apply theme: {}", js_err(e));
            }
        }
    }

    pub fn system_prefers_dark(window: &web_sys::Window) -> bool {
        match window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) | Err(_) => false,
        }
    }
}

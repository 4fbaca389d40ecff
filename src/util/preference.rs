//! Persistent key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller is the only consumer. It talks to the
//! `PreferenceStore` trait so the same rules run against browser
//! `localStorage` in the page and against an in-memory map in tests.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: when `localStorage` is unavailable (privacy
//! mode, sandboxed iframe) reads return `None` and writes are dropped.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::collections::HashMap;

/// String key/value store scoped to the page origin.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native tests. The browser build never falls back to
/// it; `LocalPreferences` turns into a no-op store on its own.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seed for a single entry.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage` backed store.
#[cfg(feature = "csr")]
pub struct LocalPreferences {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl LocalPreferences {
    /// Open the origin's `localStorage`. Never fails; a missing storage
    /// area turns every operation into a no-op.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}: {e:?}");
        }
    }
}

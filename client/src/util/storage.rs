//! Preference persistence backed by `localStorage` with an in-memory fallback.
//!
//! DESIGN
//! ======
//! Every write lands in a per-page session map first, then is mirrored to
//! browser storage. Reads prefer the session map, so the current page view
//! keeps working when `localStorage` is disabled, full, or missing (SSR).
//! Persistence across reloads is best-effort.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Failure to mirror a preference into browser storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No window, or the user disabled `localStorage`.
    #[error("browser storage is unavailable")]
    Unavailable,
    /// The browser refused the write (quota, private mode).
    #[error("browser storage rejected write for key {key:?}")]
    Rejected { key: String },
}

/// Minimal key-value store for user preferences.
pub trait PreferenceStorage {
    /// Read the value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value could not be persisted.
    /// Implementations must still make the value visible to later reads
    /// within the same page view whenever possible.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Plain in-memory store. Never fails.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    #[cfg(test)]
    pub(crate) fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage` store with a session fallback.
///
/// Holds no `web_sys` handles, so it stays `Send + Sync` and can live
/// inside a Leptos signal.
#[derive(Clone, Debug, Default)]
pub struct BrowserStorage {
    session: MemoryStorage,
}

impl BrowserStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.session.read(key).or_else(|| local_read(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.session.write(key, value)?;
        local_write(key, value)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

fn local_read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage().ok()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn local_write(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected { key: key.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}

//! `window.localStorage` as a [`KeyValueStore`].

use canvas::persist::{KeyValueStore, PersistError};

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the page's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Unavailable`] when there is no window or the
    /// browser refuses storage access (private mode, disabled cookies).
    pub fn open() -> Result<Self, PersistError> {
        let window = web_sys::window().ok_or_else(|| PersistError::Unavailable("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| PersistError::Unavailable("localStorage is disabled".to_owned()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.storage
            .get_item(key)
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), PersistError> {
        self.storage
            .remove_item(key)
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))
    }
}

//! Browser LocalStorage backend

use super::KeyValueStore;

pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the window's LocalStorage. Private browsing modes may refuse
    /// access; the store then behaves as empty.
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - progress will not be saved");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else { return };
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to write {} to LocalStorage", key);
        }
    }
}

//! Key/value persistence
//!
//! Only two values survive a session: the high score and the selected skin.
//! Storage is best-effort. Reads that fail yield `None` and writes that fail
//! are logged and dropped, so the game keeps running on in-memory values.

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

/// Storage key for the best score
pub const HIGH_SCORE_KEY: &str = "swipeyBirdHighScore";
/// Storage key for the confirmed skin index
pub const SELECTED_SKIN_KEY: &str = "swipeyBirdSelectedSkin";

/// String key/value store (LocalStorage on web)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Fire-and-forget write; last write wins
    fn set(&mut self, key: &str, value: &str);

    /// Read and parse an integer, ignoring missing or garbled values
    fn get_u32(&self, key: &str) -> Option<u32> {
        let raw = self.get(key)?;
        match raw.trim().parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unreadable value {:?} for {}", raw, key);
                None
            }
        }
    }

    fn set_u32(&mut self, key: &str, value: u32) {
        self.set(key, &value.to_string());
    }
}

/// In-process store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// A store with no backing, e.g. when the browser denies storage access
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) {
        log::debug!("Storage unavailable, dropping write to {}", key);
    }
}

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};

/// Synchronous string key-value store.
///
/// The browser implementation is backed by `localStorage`; the in-memory one
/// lets the session and persistence layers run outside a browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `localStorage` through gloo-storage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalKeyValueStore;

impl KeyValueStore for LocalKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        LocalStorage::set(key, value)
            .map_err(|e| format!("Error saving to localStorage: {}", e))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("w"));
        assert_eq!(store.len(), 1);

        store.remove("k");
        assert!(store.is_empty());
    }
}

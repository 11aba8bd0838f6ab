// ============================================================================
// SECURE STORAGE - localStorage cifrado
// ============================================================================
// Values are sealed with SessionCipher before they reach the underlying store.
// A record that fails to open is reported as absent, never as an error.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::utils::crypto::SessionCipher;
use crate::utils::storage::{KeyValueStore, LocalKeyValueStore};

#[derive(Clone)]
pub struct SecureStorage {
    inner: Rc<dyn KeyValueStore>,
    cipher: SessionCipher,
}

impl SecureStorage {
    pub fn new(inner: Rc<dyn KeyValueStore>, cipher: SessionCipher) -> Self {
        Self { inner, cipher }
    }

    /// `localStorage` sealed with the configured key
    pub fn browser() -> Self {
        Self::new(
            Rc::new(LocalKeyValueStore),
            SessionCipher::new(&CONFIG.session_encryption_key),
        )
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let envelope = self.inner.get(key)?;
        match self.cipher.decrypt(&envelope) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("🔐 Discarding unreadable record {}: {}", key, e);
                None
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let envelope = self.cipher.encrypt(value)?;
        self.inner.set(key, &envelope)
    }

    pub fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryKeyValueStore;

    fn storage() -> (Rc<MemoryKeyValueStore>, SecureStorage) {
        let memory = Rc::new(MemoryKeyValueStore::new());
        let secure = SecureStorage::new(memory.clone(), SessionCipher::new("test-key"));
        (memory, secure)
    }

    #[test]
    fn test_round_trip() {
        let (_, secure) = storage();
        for value in ["", "plain", r#"{"token":"t","user":"u"}"#, "ünïcødé ✓"] {
            secure.set("auth-storage", value).unwrap();
            assert_eq!(secure.get("auth-storage").as_deref(), Some(value));
        }
    }

    #[test]
    fn test_value_is_not_stored_in_clear() {
        let (memory, secure) = storage();
        secure.set("auth-storage", "super-secret-token").unwrap();
        let raw = memory.get("auth-storage").unwrap();
        assert!(!raw.contains("super-secret-token"));
    }

    #[test]
    fn test_absent_key_is_none() {
        let (_, secure) = storage();
        assert!(secure.get("missing").is_none());
    }

    #[test]
    fn test_tampered_record_is_none() {
        let (memory, secure) = storage();
        secure.set("auth-storage", "value").unwrap();

        memory.set("auth-storage", "tampered").unwrap();
        assert!(secure.get("auth-storage").is_none());

        memory.set("auth-storage", r#"{"token":"plain json"}"#).unwrap();
        assert!(secure.get("auth-storage").is_none());
    }

    #[test]
    fn test_remove() {
        let (memory, secure) = storage();
        secure.set("auth-storage", "value").unwrap();
        secure.remove("auth-storage");
        assert!(secure.get("auth-storage").is_none());
        assert!(memory.is_empty());
    }
}

// ============================================================================
// SESSION STORE - singleton de sesión (token, usuario, rol)
// ============================================================================
// One instance per page (thread local). Every mutation persists the session
// through SecureStorage and then notifies subscribers with a snapshot.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::session::{PersistedSession, Session};
use crate::stores::secure_storage::SecureStorage;

pub type SubscriptionId = usize;

type Listener = Rc<dyn Fn(&Session)>;

thread_local! {
    static SESSION_STORE: Rc<SessionStore> = Rc::new(SessionStore::restore(
        SecureStorage::browser(),
        &CONFIG.session_storage_key,
    ));
}

pub struct SessionStore {
    state: RefCell<Session>,
    storage: SecureStorage,
    storage_key: String,
    /// Bumped on every successful login
    generation: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener_id: Cell<SubscriptionId>,
}

impl SessionStore {
    /// The page-wide store, rehydrated from `localStorage` on first use
    pub fn global() -> Rc<SessionStore> {
        SESSION_STORE.with(Rc::clone)
    }

    /// Build a store from whatever `storage` holds under `key`.
    /// Missing or unreadable records start the store logged out.
    pub fn restore(storage: SecureStorage, key: &str) -> Self {
        let session = storage
            .get(key)
            .and_then(|raw| match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("⚠️ Stored session is malformed, starting logged out: {}", e);
                    None
                }
            })
            .map(Session::from_persisted)
            .unwrap_or_default();

        if let Some(user) = &session.user {
            log::info!("✅ Session restored for {}", user);
        }

        Self {
            state: RefCell::new(session),
            storage,
            storage_key: key.to_string(),
            generation: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Token at call time; the HTTP client reads this on every request
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Authenticate. Empty `token` or `user` records an error and leaves the
    /// rest of the session untouched.
    pub fn login(&self, token: &str, user: &str, role: Option<&str>) -> Result<(), String> {
        if token.is_empty() || user.is_empty() {
            let message = "Login requires both a token and a username".to_string();
            log::warn!("⚠️ Rejected login: {}", message);
            let mut next = self.snapshot();
            next.error = Some(message.clone());
            self.commit(next);
            return Err(message);
        }

        self.generation.set(self.generation.get() + 1);
        log::info!("🔐 Logged in as {} ({})", user, role.unwrap_or("no role"));
        self.commit(Session::authenticated(token, user, role));
        Ok(())
    }

    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.commit(Session::empty());
    }

    pub fn clear_error(&self) {
        let mut next = self.snapshot();
        next.error = None;
        self.commit(next);
    }

    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    fn commit(&self, next: Session) {
        *self.state.borrow_mut() = next;
        self.persist();

        let snapshot = self.snapshot();
        // Listeners may subscribe/unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn persist(&self) {
        let record = self.state.borrow().to_persisted();
        let result = serde_json::to_string(&record)
            .map_err(|e| format!("Error serializing session: {}", e))
            .and_then(|json| self.storage.set(&self.storage_key, &json));
        if let Err(e) = result {
            log::warn!("⚠️ Session not persisted: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::crypto::SessionCipher;
    use crate::utils::storage::{KeyValueStore, MemoryKeyValueStore};

    const KEY: &str = "auth-storage";

    fn secure(memory: &Rc<MemoryKeyValueStore>) -> SecureStorage {
        SecureStorage::new(memory.clone(), SessionCipher::new("test-key"))
    }

    fn fresh_store() -> (Rc<MemoryKeyValueStore>, SessionStore) {
        let memory = Rc::new(MemoryKeyValueStore::new());
        let store = SessionStore::restore(secure(&memory), KEY);
        (memory, store)
    }

    #[test]
    fn test_starts_empty() {
        let (_, store) = fresh_store();
        assert_eq!(store.snapshot(), Session::empty());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_valid_login_sets_all_fields() {
        let (_, store) = fresh_store();
        for (role, admin) in [("admin", true), ("user", false), ("editor", false)] {
            store.login("tok", "alice", Some(role)).unwrap();
            let s = store.snapshot();
            assert!(s.is_authenticated);
            assert_eq!(s.is_admin, admin);
            assert_eq!(s.token.as_deref(), Some("tok"));
            assert_eq!(s.user.as_deref(), Some("alice"));
            assert_eq!(s.role.as_deref(), Some(role));
            assert!(s.error.is_none());
        }
    }

    #[test]
    fn test_login_with_empty_token_or_user_fails() {
        let (_, store) = fresh_store();

        assert!(store.login("", "u", Some("admin")).is_err());
        let s = store.snapshot();
        assert!(!s.is_authenticated);
        assert!(s.error.is_some());

        store.clear_error();
        assert!(store.login("t", "", Some("admin")).is_err());
        let s = store.snapshot();
        assert!(!s.is_authenticated);
        assert!(s.error.is_some());
        assert!(s.token.is_none());
    }

    #[test]
    fn test_invalid_login_keeps_existing_session() {
        let (_, store) = fresh_store();
        store.login("tok", "alice", Some("admin")).unwrap();
        assert!(store.login("", "mallory", None).is_err());

        let s = store.snapshot();
        assert!(s.is_authenticated);
        assert_eq!(s.user.as_deref(), Some("alice"));
        assert!(s.error.is_some());
    }

    #[test]
    fn test_successful_login_clears_previous_error() {
        let (_, store) = fresh_store();
        let _ = store.login("", "", None);
        store.login("tok", "alice", None).unwrap();
        assert!(store.snapshot().error.is_none());
    }

    #[test]
    fn test_logout_yields_empty_state() {
        let (_, store) = fresh_store();
        store.logout();
        assert_eq!(store.snapshot(), Session::empty());

        store.login("tok", "alice", Some("admin")).unwrap();
        store.logout();
        assert_eq!(store.snapshot(), Session::empty());

        let _ = store.login("", "alice", None);
        store.logout();
        assert_eq!(store.snapshot(), Session::empty());
    }

    #[test]
    fn test_clear_error_only_touches_error() {
        let (_, store) = fresh_store();
        store.login("tok", "alice", Some("admin")).unwrap();
        let _ = store.login("", "", None);
        store.clear_error();

        let mut expected = Session::authenticated("tok", "alice", Some("admin"));
        expected.error = None;
        assert_eq!(store.snapshot(), expected);
    }

    #[test]
    fn test_session_survives_restore() {
        let memory = Rc::new(MemoryKeyValueStore::new());
        {
            let store = SessionStore::restore(secure(&memory), KEY);
            store.login("tok", "alice", Some("admin")).unwrap();
        }
        let restored = SessionStore::restore(secure(&memory), KEY);
        assert_eq!(
            restored.snapshot(),
            Session::authenticated("tok", "alice", Some("admin"))
        );
    }

    #[test]
    fn test_logout_is_persisted() {
        let memory = Rc::new(MemoryKeyValueStore::new());
        let store = SessionStore::restore(secure(&memory), KEY);
        store.login("tok", "alice", None).unwrap();
        store.logout();

        let restored = SessionStore::restore(secure(&memory), KEY);
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn test_corrupt_record_restores_logged_out() {
        let memory = Rc::new(MemoryKeyValueStore::new());
        memory.set(KEY, "definitely-not-an-envelope").unwrap();
        let store = SessionStore::restore(secure(&memory), KEY);
        assert_eq!(store.snapshot(), Session::empty());

        // Readable envelope, unreadable JSON
        secure(&memory).set(KEY, "{not json").unwrap();
        let store = SessionStore::restore(secure(&memory), KEY);
        assert_eq!(store.snapshot(), Session::empty());
    }

    #[test]
    fn test_record_sealed_with_other_key_is_ignored() {
        let memory = Rc::new(MemoryKeyValueStore::new());
        let other = SecureStorage::new(memory.clone(), SessionCipher::new("other-key"));
        SessionStore::restore(other, KEY).login("tok", "alice", None).unwrap();

        let store = SessionStore::restore(secure(&memory), KEY);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_generation_bumps_on_successful_login_only() {
        let (_, store) = fresh_store();
        assert_eq!(store.generation(), 0);
        store.login("tok", "alice", None).unwrap();
        assert_eq!(store.generation(), 1);
        let _ = store.login("", "alice", None);
        store.logout();
        assert_eq!(store.generation(), 1);
        store.login("tok2", "alice", None).unwrap();
        assert_eq!(store.generation(), 2);
    }

    #[test]
    fn test_subscribers_are_notified_until_unsubscribed() {
        let (_, store) = fresh_store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let seen = seen.clone();
            store.subscribe(move |s| seen.borrow_mut().push(s.is_authenticated))
        };
        store.login("tok", "alice", None).unwrap();
        store.logout();
        store.unsubscribe(id);
        store.login("tok", "alice", None).unwrap();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}

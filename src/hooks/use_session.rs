// ============================================================================
// USE SESSION HOOK
// ============================================================================
// Mirrors the global SessionStore into component state. Components re-render
// whenever the store changes (login, logout, 401, error cleared).
// ============================================================================

use yew::prelude::*;

use crate::models::Session;
use crate::stores::SessionStore;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<Session>,
    /// (token, username, role)
    pub login: Callback<(String, String, Option<String>), Result<(), String>>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(|| SessionStore::global().snapshot());

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let store = SessionStore::global();
            // The store may have changed between first render and this effect
            state.set(store.snapshot());
            let id = store.subscribe(move |session| state.set(session.clone()));
            move || store.unsubscribe(id)
        });
    }

    let login = Callback::from(|(token, user, role): (String, String, Option<String>)| {
        SessionStore::global().login(&token, &user, role.as_deref())
    });

    let logout = Callback::from(|_| SessionStore::global().logout());

    let clear_error = Callback::from(|_| SessionStore::global().clear_error());

    UseSessionHandle {
        state,
        login,
        logout,
        clear_error,
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::use_toast;
use crate::router::Route;
use crate::services::auth_service;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthMode {
    Login,
    Register,
}

pub struct UseAuthHandle {
    pub submitting: bool,
    /// (username, password)
    pub submit: Callback<(String, String)>,
}

/// Submit credentials to the login or register endpoint, then store the
/// session and go to the home page. Failures surface as a toast.
#[hook]
pub fn use_auth(mode: AuthMode) -> UseAuthHandle {
    let submitting = use_state(|| false);
    let navigator = use_navigator();
    let toast = use_toast();
    let session = use_session();

    {
        // Drop any error left over from a previous attempt
        let clear_error = session.clear_error.clone();
        use_effect_with(mode, move |_| {
            clear_error.emit(());
            || ()
        });
    }

    let submit = {
        let submitting = submitting.clone();
        let login = session.login.clone();
        Callback::from(move |(username, password): (String, String)| {
            if *submitting {
                return;
            }
            submitting.set(true);

            let submitting = submitting.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            let login = login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match mode {
                    AuthMode::Login => auth_service::login(&username, &password).await,
                    AuthMode::Register => auth_service::register(&username, &password).await,
                };

                let stored = result.and_then(|response| {
                    login.emit((response.access_token, username.clone(), response.role))
                });
                match stored {
                    Ok(()) => {
                        log::info!("✅ Signed in: {}", username);
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    }
                    Err(message) => toast.error(message),
                }
                submitting.set(false);
            });
        })
    };

    UseAuthHandle {
        submitting: *submitting,
        submit,
    }
}

use yew::prelude::*;

use crate::hooks::use_toast::use_toast;
use crate::models::Product;
use crate::services::product_service;

#[derive(Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseFavoritesHandle {
    pub state: UseStateHandle<FavoritesState>,
    pub refetch: Callback<()>,
}

/// Current user's favorite products
#[hook]
pub fn use_favorites() -> UseFavoritesHandle {
    let state = use_state(FavoritesState::default);
    let reload = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with(*reload, move |_| {
            state.set(FavoritesState {
                loading: true,
                ..(*state).clone()
            });
            wasm_bindgen_futures::spawn_local(async move {
                let next = match product_service::get_favorites().await {
                    Ok(items) => FavoritesState { items, loading: false, error: None },
                    Err(e) => FavoritesState { items: Vec::new(), loading: false, error: Some(e) },
                };
                state.set(next);
            });
            || ()
        });
    }

    let refetch = {
        let reload = reload.clone();
        Callback::from(move |_| reload.set(reload.wrapping_add(1)))
    };

    UseFavoritesHandle { state, refetch }
}

/// Adds or removes a favorite, toasts the outcome, then calls `on_done`.
/// Takes `(product id, currently favorite)`.
#[hook]
pub fn use_favorite_toggle(on_done: Callback<()>) -> Callback<(String, bool)> {
    let toast = use_toast();

    Callback::from(move |(id, is_favorite): (String, bool)| {
        let toast = toast.clone();
        let on_done = on_done.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = if is_favorite {
                product_service::remove_favorite(&id).await
            } else {
                product_service::add_favorite(&id).await
            };
            match result {
                Ok(ack) => toast.success(ack.detail),
                Err(e) => toast.error(e),
            }
            on_done.emit(());
        });
    })
}

use yew::prelude::*;

use crate::components::ProductList;
use crate::hooks::{use_favorite_toggle, use_favorites};

#[function_component(FavoritesView)]
pub fn favorites_view() -> Html {
    let favorites = use_favorites();
    let on_toggle_favorite = use_favorite_toggle(favorites.refetch.clone());
    let state = &*favorites.state;

    html! {
        <div class="favorites-view">
            <div class="view-header">
                <h1>{"Favorites"}</h1>
            </div>
            {
                if let Some(error) = &state.error {
                    html! { <div class="alert alert-error">{ error.clone() }</div> }
                } else if state.loading && state.items.is_empty() {
                    html! { <div class="loading">{"Loading favorites..."}</div> }
                } else {
                    html! {
                        <ProductList
                            products={state.items.clone()}
                            is_admin={false}
                            on_toggle_favorite={on_toggle_favorite}
                            empty_message="No products in favorites."
                        />
                    }
                }
            }
        </div>
    }
}

// ============================================================================
// PRODUCTS VIEW - catálogo (home)
// ============================================================================

use yew::prelude::*;

use crate::components::{CatalogToolbar, DialogMode, Pagination, ProductDialog, ProductList};
use crate::hooks::{use_favorite_toggle, use_products, use_session, use_toast};
use crate::models::Product;
use crate::services::product_service;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(ProductsView)]
pub fn products_view() -> Html {
    let session = use_session();
    let products = use_products();
    let toast = use_toast();
    let dialog = use_state(|| None::<DialogMode>);
    let on_toggle_favorite = use_favorite_toggle(products.refetch.clone());
    let is_admin = session.state.is_admin;

    let open_add = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(DialogMode::Add)))
    };

    let on_edit = {
        let dialog = dialog.clone();
        Callback::from(move |product: Product| dialog.set(Some(DialogMode::Update(product))))
    };

    let on_delete = {
        let refetch = products.refetch.clone();
        let toast = toast.clone();
        Callback::from(move |id: String| {
            if !confirm("Delete this product?") {
                return;
            }
            let refetch = refetch.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::delete_product(&id).await {
                    Ok(ack) => {
                        toast.success(ack.detail);
                        refetch.emit(());
                    }
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(None))
    };

    let on_saved = {
        let dialog = dialog.clone();
        let refetch = products.refetch.clone();
        Callback::from(move |_| {
            dialog.set(None);
            refetch.emit(());
        })
    };

    let state = &*products.state;
    let (items, pages) = state
        .data
        .as_ref()
        .map(|d| (d.items.clone(), d.pages))
        .unwrap_or_default();

    html! {
        <div class="products-view">
            <div class="view-header">
                <h1>{"Products"}</h1>
                {
                    if is_admin {
                        html! { <button class="btn-primary" onclick={open_add}>{"Add Product"}</button> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <CatalogToolbar
                filter={products.query.filter}
                size={products.query.size}
                on_search={products.set_search.clone()}
                on_filter={products.set_filter.clone()}
                on_size={products.set_size.clone()}
            />

            {
                if let Some(error) = &state.error {
                    html! { <div class="alert alert-error">{ error.clone() }</div> }
                } else if state.loading && state.data.is_none() {
                    html! { <div class="loading">{"Loading products..."}</div> }
                } else {
                    html! {
                        <ProductList
                            products={items}
                            is_admin={is_admin}
                            on_toggle_favorite={on_toggle_favorite}
                            on_edit={is_admin.then_some(on_edit)}
                            on_delete={is_admin.then_some(on_delete)}
                        />
                    }
                }
            }

            <Pagination page={products.query.page} pages={pages} on_change={products.set_page.clone()} />

            {
                if let Some(mode) = (*dialog).clone() {
                    html! { <ProductDialog mode={mode} on_close={on_close} on_saved={on_saved} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Product;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    #[prop_or(false)]
    pub is_admin: bool,
    /// (id, currently favorite)
    pub on_toggle_favorite: Callback<(String, bool)>,
    #[prop_or_default]
    pub on_edit: Option<Callback<Product>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let p = &props.product;

    let card_classes = classes!("product-card", p.is_favorite.then_some("favorite"));

    let on_favorite_click = {
        let cb = props.on_toggle_favorite.clone();
        let id = p.id.clone();
        let is_favorite = p.is_favorite;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit((id.clone(), is_favorite));
        })
    };

    let on_edit_click = {
        let cb = props.on_edit.clone();
        let product = p.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(edit) = &cb { edit.emit(product.clone()); }
        })
    };

    let on_delete_click = {
        let cb = props.on_delete.clone();
        let id = p.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(delete) = &cb { delete.emit(id.clone()); }
        })
    };

    html! {
        <div class={card_classes} data-id={p.id.clone()}>
            {
                if let Some(path) = &p.image_url {
                    html! {
                        <div class="product-image">
                            <img src={CONFIG.image_url(path)} alt={p.name.clone()} loading="lazy" />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="product-header">
                <h3 class="product-name">{ &p.name }</h3>
                <button
                    class={classes!("btn-favorite", p.is_favorite.then_some("active"))}
                    title={if p.is_favorite { "Remove from favorites" } else { "Add to favorites" }}
                    onclick={on_favorite_click}
                >
                    { if p.is_favorite { "★" } else { "☆" } }
                </button>
            </div>
            <p class="product-description">{ &p.description }</p>
            <div class="product-footer">
                <span class="badge badge-category">{ &p.category }</span>
                <span class="product-price">{ p.formatted_price() }</span>
            </div>
            {
                if props.is_admin {
                    html! {
                        <div class="product-actions">
                            <button class="btn-secondary" onclick={on_edit_click}>{"Edit"}</button>
                            <button class="btn-danger" onclick={on_delete_click}>{"Delete"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

use yew::prelude::*;

use crate::components::product_card::ProductCard;
use crate::models::Product;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductListProps {
    pub products: Vec<Product>,
    #[prop_or(false)]
    pub is_admin: bool,
    pub on_toggle_favorite: Callback<(String, bool)>,
    #[prop_or_default]
    pub on_edit: Option<Callback<Product>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
    #[prop_or(AttrValue::Static("No products found."))]
    pub empty_message: AttrValue,
}

#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    if props.products.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{ props.empty_message.clone() }</p>
            </div>
        };
    }

    html! {
        <div class="product-grid">
            { for props.products.iter().map(|product| html! {
                <ProductCard
                    key={product.id.clone()}
                    product={product.clone()}
                    is_admin={props.is_admin}
                    on_toggle_favorite={props.on_toggle_favorite.clone()}
                    on_edit={props.on_edit.clone()}
                    on_delete={props.on_delete.clone()}
                />
            }) }
        </div>
    }
}

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::ProductFilter;

#[derive(Properties, PartialEq)]
pub struct CatalogToolbarProps {
    pub filter: ProductFilter,
    pub size: u32,
    /// Raw search text, emitted on every keystroke
    pub on_search: Callback<String>,
    pub on_filter: Callback<ProductFilter>,
    pub on_size: Callback<u32>,
}

#[function_component(CatalogToolbar)]
pub fn catalog_toolbar(props: &CatalogToolbarProps) -> Html {
    let on_input = {
        let cb = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_filter_change = {
        let cb = props.on_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(filter) = ProductFilter::from_key(&select.value()) {
                cb.emit(filter);
            }
        })
    };

    let on_size_change = {
        let cb = props.on_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u32>() {
                Ok(size) => cb.emit(size),
                Err(_) => log::warn!("⚠️ Invalid page size: {}", select.value()),
            }
        })
    };

    let placeholder = format!("Search by {}", props.filter.label().to_lowercase());

    html! {
        <div class="catalog-toolbar">
            <input
                type="search"
                class="search-input"
                placeholder={placeholder}
                oninput={on_input}
            />
            <select class="filter-select" onchange={on_filter_change}>
                { for ProductFilter::ALL.iter().map(|f| html! {
                    <option value={f.key()} selected={*f == props.filter}>{ f.label() }</option>
                }) }
            </select>
            <select class="size-select" onchange={on_size_change}>
                { for CONFIG.ui_config.page_size_options.iter().map(|s| html! {
                    <option value={s.to_string()} selected={*s == props.size}>{ format!("{} / page", s) }</option>
                }) }
            </select>
        </div>
    }
}

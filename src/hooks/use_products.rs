// ============================================================================
// USE PRODUCTS HOOK - catálogo paginado con filtro y búsqueda
// ============================================================================
// Search input is debounced before it becomes part of the query. Every change
// of page, size, filter or (debounced) search value triggers one fetch.
// Responses are applied in arrival order.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::{PaginatedProducts, ProductFilter, ProductQuery};
use crate::services::product_service;

/// Page, size, filter and committed search text of the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub page: u32,
    pub size: u32,
    pub filter: ProductFilter,
    pub search: String,
}

pub enum CatalogAction {
    SetPage(u32),
    /// New page size; back to page 1
    SetSize(u32),
    /// New filter field; back to page 1
    SetFilter(ProductFilter),
    /// Search text once the debounce has elapsed; back to page 1
    CommitSearch(String),
    /// The response for `page` reported `pages` pages in total
    Loaded { page: u32, pages: u32 },
}

impl CatalogState {
    pub fn new(size: u32) -> Self {
        Self {
            page: 1,
            size: size.max(1),
            filter: ProductFilter::default(),
            search: String::new(),
        }
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery::new(self.page, self.size).with_filter(self.filter, self.search.clone())
    }

    pub fn apply(&self, action: CatalogAction) -> CatalogState {
        let mut next = self.clone();
        match action {
            CatalogAction::SetPage(page) => next.page = page.max(1),
            CatalogAction::SetSize(size) => {
                next.size = size.max(1);
                next.page = 1;
            }
            CatalogAction::SetFilter(filter) => {
                next.filter = filter;
                next.page = 1;
            }
            CatalogAction::CommitSearch(search) => {
                next.search = search;
                next.page = 1;
            }
            // Stale responses for another page are ignored
            CatalogAction::Loaded { page, pages } if page == self.page => {
                if let Some(last) = page_past_end(page, pages) {
                    next.page = last;
                }
            }
            CatalogAction::Loaded { .. } => {}
        }
        next
    }
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Last page to fall back to when `page` is beyond a non-empty result set.
/// Happens after deletes shrink the catalog under the current page.
pub fn page_past_end(page: u32, pages: u32) -> Option<u32> {
    (pages > 0 && page > pages).then_some(pages)
}

#[derive(Clone, PartialEq, Default)]
pub struct ProductsState {
    pub data: Option<PaginatedProducts>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseProductsHandle {
    pub query: ProductQuery,
    pub state: UseStateHandle<ProductsState>,
    pub set_page: Callback<u32>,
    pub set_size: Callback<u32>,
    pub set_filter: Callback<ProductFilter>,
    /// Raw keystrokes; applied after the debounce delay
    pub set_search: Callback<String>,
    pub refetch: Callback<()>,
}

#[hook]
pub fn use_products() -> UseProductsHandle {
    let catalog = use_reducer(|| CatalogState::new(CONFIG.ui_config.default_page_size));
    let reload = use_state(|| 0u32);
    let state = use_state(ProductsState::default);
    let debounce = use_mut_ref(|| None::<Timeout>);

    let query = catalog.query();

    {
        let state = state.clone();
        let dispatcher = catalog.dispatcher();
        use_effect_with((query.clone(), *reload), move |(query, _)| {
            let query = query.clone();
            state.set(ProductsState {
                loading: true,
                ..(*state).clone()
            });
            wasm_bindgen_futures::spawn_local(async move {
                let next = match product_service::get_products(&query).await {
                    Ok(data) => {
                        dispatcher.dispatch(CatalogAction::Loaded {
                            page: query.page,
                            pages: data.pages,
                        });
                        ProductsState {
                            data: Some(data),
                            loading: false,
                            error: None,
                        }
                    }
                    Err(e) => ProductsState {
                        data: None,
                        loading: false,
                        error: Some(e),
                    },
                };
                state.set(next);
            });
            || ()
        });
    }

    let set_page = {
        let dispatcher = catalog.dispatcher();
        Callback::from(move |p: u32| dispatcher.dispatch(CatalogAction::SetPage(p)))
    };

    let set_size = {
        let dispatcher = catalog.dispatcher();
        Callback::from(move |s: u32| dispatcher.dispatch(CatalogAction::SetSize(s)))
    };

    let set_filter = {
        let dispatcher = catalog.dispatcher();
        Callback::from(move |f: ProductFilter| dispatcher.dispatch(CatalogAction::SetFilter(f)))
    };

    let set_search = {
        let dispatcher = catalog.dispatcher();
        Callback::from(move |value: String| {
            let dispatcher = dispatcher.clone();
            let timeout = Timeout::new(CONFIG.ui_config.search_debounce_ms, move || {
                dispatcher.dispatch(CatalogAction::CommitSearch(value));
            });
            // Replacing the pending timeout cancels it
            *debounce.borrow_mut() = Some(timeout);
        })
    };

    let refetch = {
        let reload = reload.clone();
        Callback::from(move |_| reload.set(reload.wrapping_add(1)))
    };

    UseProductsHandle {
        query,
        state,
        set_page,
        set_size,
        set_filter,
        set_search,
        refetch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> CatalogState {
        CatalogState::new(5).apply(CatalogAction::SetPage(page))
    }

    #[test]
    fn test_starts_on_first_page_without_search() {
        let state = CatalogState::new(5);
        assert_eq!(state.page, 1);
        assert_eq!(state.size, 5);
        assert_eq!(state.query().params(), vec![("page", "1".to_string()), ("size", "5".to_string())]);
    }

    #[test]
    fn test_set_page_never_goes_below_one() {
        assert_eq!(on_page(3).page, 3);
        assert_eq!(on_page(0).page, 1);
    }

    #[test]
    fn test_size_change_resets_page() {
        let state = on_page(4).apply(CatalogAction::SetSize(10));
        assert_eq!(state.size, 10);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let state = on_page(4).apply(CatalogAction::SetFilter(ProductFilter::Category));
        assert_eq!(state.filter, ProductFilter::Category);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_committed_search_resets_page_and_reaches_query() {
        let before = on_page(4);
        // Keystrokes are only held by the debounce timer; the query is unchanged
        assert_eq!(before.query().value, "");

        let state = before.apply(CatalogAction::CommitSearch("lamp".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "lamp");
        assert!(state.query().params().contains(&("name", "lamp".to_string())));
    }

    #[test]
    fn test_past_last_page_moves_back_to_last() {
        // 6 products, size 5, on page 2; the only product there is deleted
        let state = on_page(2).apply(CatalogAction::Loaded { page: 2, pages: 1 });
        assert_eq!(state.page, 1);

        let state = on_page(7).apply(CatalogAction::Loaded { page: 7, pages: 3 });
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_loaded_keeps_page_in_range_or_empty_catalog() {
        assert_eq!(on_page(2).apply(CatalogAction::Loaded { page: 2, pages: 2 }).page, 2);
        assert_eq!(on_page(2).apply(CatalogAction::Loaded { page: 2, pages: 0 }).page, 2);
    }

    #[test]
    fn test_stale_response_for_other_page_is_ignored() {
        assert_eq!(on_page(5).apply(CatalogAction::Loaded { page: 2, pages: 1 }).page, 5);
    }

    #[test]
    fn test_page_past_end() {
        assert_eq!(page_past_end(2, 1), Some(1));
        assert_eq!(page_past_end(1, 1), None);
        assert_eq!(page_past_end(3, 0), None);
    }

    #[test]
    fn test_unchanged_state_is_not_replaced() {
        let state = Rc::new(CatalogState::new(5));
        let next = state.clone().reduce(CatalogAction::Loaded { page: 1, pages: 4 });
        assert!(Rc::ptr_eq(&state, &next));
    }
}

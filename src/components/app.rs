use yew::prelude::*;
use yew_router::prelude::*;

use super::{Navbar, ToastProvider};
use crate::router::{Route, RouteGuard};
use crate::views::{FavoritesView, LoginView, NotFoundView, ProductsView, RegisterView};

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <ProductsView /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Favorites => html! { <FavoritesView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Navbar />
                <main class="app-content">
                    <RouteGuard>
                        <Switch<Route> render={switch} />
                    </RouteGuard>
                </main>
            </ToastProvider>
        </BrowserRouter>
    }
}

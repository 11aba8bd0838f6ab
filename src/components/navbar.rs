use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    if !session.state.is_authenticated {
        return html! {};
    }

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🔐 Logout");
            logout.emit(());
            if let Some(nav) = &navigator {
                nav.push(&Route::Login);
            }
        })
    };

    let link_class = |target: Route| classes!("nav-link", (route.as_ref() == Some(&target)).then_some("active"));
    let role = session.state.role.clone().unwrap_or_else(|| "user".to_string());

    html! {
        <header class="navbar">
            <div class="navbar-brand">{"📦 Product Console"}</div>
            <nav class="navbar-links">
                <Link<Route> to={Route::Home} classes={link_class(Route::Home)}>{"Products"}</Link<Route>>
                <Link<Route> to={Route::Favorites} classes={link_class(Route::Favorites)}>{"Favorites"}</Link<Route>>
            </nav>
            <div class="navbar-user">
                <span class="user-name">{ session.state.user.clone().unwrap_or_default() }</span>
                <span class={classes!("badge", "badge-role", session.state.is_admin.then_some("badge-admin"))}>
                    { role }
                </span>
                <button class="btn-secondary btn-logout" onclick={on_logout}>{"Logout"}</button>
            </div>
        </header>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_session;
use crate::models::Session;
use crate::utils::constants::{HOME_PATH, LOGIN_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
    RedirectToHome,
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn is_public_path(path: &str) -> bool {
    Route::PUBLIC.iter().any(|route| route.to_path() == path)
}

/// Access policy for one navigation
pub fn decide(path: &str, session: &Session) -> GuardDecision {
    let path = normalize(path);
    match (session.is_authenticated, path) {
        (false, p) if !is_public_path(p) => GuardDecision::RedirectToLogin,
        (true, LOGIN_PATH) => GuardDecision::RedirectToHome,
        _ => GuardDecision::Render,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Applies [`decide`] on every location change
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session();
    let location = use_location();
    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| HOME_PATH.to_string());

    match decide(&path, &session.state) {
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::RedirectToLogin => {
            log::info!("🚧 {} requires login", path);
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        GuardDecision::RedirectToHome => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous() -> Session {
        Session::empty()
    }

    fn signed_in(role: &str) -> Session {
        Session::authenticated("tok", "alice", Some(role))
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        for path in ["/", "/favorites", "/products", "/anything/else", "/404", ""] {
            assert_eq!(decide(path, &anonymous()), GuardDecision::RedirectToLogin, "{}", path);
        }
    }

    #[test]
    fn test_anonymous_may_open_public_pages() {
        for path in ["/login", "/register", "/login/", "/register//"] {
            assert_eq!(decide(path, &anonymous()), GuardDecision::Render, "{}", path);
        }
    }

    #[test]
    fn test_authenticated_on_login_goes_home() {
        assert_eq!(decide("/login", &signed_in("user")), GuardDecision::RedirectToHome);
        assert_eq!(decide("/login/", &signed_in("admin")), GuardDecision::RedirectToHome);
    }

    #[test]
    fn test_authenticated_renders_everything_else() {
        for role in ["admin", "user"] {
            for path in ["/", "/favorites", "/register", "/unknown"] {
                assert_eq!(decide(path, &signed_in(role)), GuardDecision::Render, "{}", path);
            }
        }
    }

    #[test]
    fn test_allow_list_matches_public_routes() {
        for route in Route::PUBLIC {
            assert_eq!(decide(&route.to_path(), &anonymous()), GuardDecision::Render);
        }
    }
}

pub mod guard;

use yew_router::prelude::*;

pub use guard::{decide, GuardDecision, RouteGuard};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/favorites")]
    Favorites,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes an anonymous visitor may open. The guard's allow-list is built
    /// from this, so a new public view only needs to be added here.
    pub const PUBLIC: [Route; 2] = [Route::Login, Route::Register];

    pub fn is_public(&self) -> bool {
        Self::PUBLIC.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(Route::Login.is_public());
        assert!(Route::Register.is_public());
        assert!(!Route::Home.is_public());
        assert!(!Route::Favorites.is_public());
        assert!(!Route::NotFound.is_public());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::Favorites.to_path(), "/favorites");
    }
}

pub mod favorites;
pub mod login;
pub mod not_found;
pub mod products;
pub mod register;

pub use favorites::FavoritesView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use products::ProductsView;
pub use register::RegisterView;

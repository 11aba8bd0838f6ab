pub mod use_auth;
pub mod use_favorites;
pub mod use_products;
pub mod use_session;
pub mod use_toast;

pub use use_auth::{use_auth, AuthMode, UseAuthHandle};
pub use use_favorites::{use_favorite_toggle, use_favorites, FavoritesState, UseFavoritesHandle};
pub use use_products::{use_products, ProductsState, UseProductsHandle};
pub use use_session::{use_session, UseSessionHandle};
pub use use_toast::{use_toast, Toast, ToastHandle, ToastKind, ToastList};

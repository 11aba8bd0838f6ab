pub mod app;
pub mod auth_form;
pub mod catalog_toolbar;
pub mod navbar;
pub mod pagination;
pub mod product_card;
pub mod product_dialog;
pub mod product_list;
pub mod toast;

pub use app::App;
pub use auth_form::AuthForm;
pub use catalog_toolbar::CatalogToolbar;
pub use navbar::Navbar;
pub use pagination::{page_window, Pagination};
pub use product_card::ProductCard;
pub use product_dialog::{DialogMode, ProductDialog};
pub use product_list::ProductList;
pub use toast::ToastProvider;

pub mod api_client;
pub mod auth_service;
pub mod error;
pub mod product_service;

pub use api_client::{ApiClient, UnauthorizedHandler};
pub use error::ApiError;

pub mod auth;
pub mod product;
pub mod session;

pub use auth::{AuthCredentials, AuthResponse};
pub use product::{
    DetailResponse, PaginatedProducts, Product, ProductFilter, ProductPayload, ProductQuery,
    UploadResponse,
};
pub use session::{PersistedSession, Session};

pub mod secure_storage;
pub mod session_store;

pub use secure_storage::SecureStorage;
pub use session_store::{SessionStore, SubscriptionId};

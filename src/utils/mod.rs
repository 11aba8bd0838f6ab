// Utils compartidos

pub mod constants;
pub mod crypto;
pub mod navigation;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use navigation::{BrowserNavigator, Navigator};
pub use storage::{KeyValueStore, LocalKeyValueStore, MemoryKeyValueStore};

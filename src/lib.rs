// ============================================================================
// PRODUCT CONSOLE - Yew + WebAssembly
// ============================================================================
// - Stores: sesión global (cifrada en localStorage)
// - Services: SOLO comunicación API
// - Hooks: estado de UI sobre stores y services
// - Components / Views: renderizado
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

pub use components::App;

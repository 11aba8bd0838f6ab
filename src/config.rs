use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub session_storage_key: String,
    pub session_encryption_key: String,
    pub enable_logging: bool,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            session_storage_key: "auth-storage".to_string(),
            session_encryption_key: "your-secure-encryption-key".to_string(),
            enable_logging: true,
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            default_page_size: 5,
            page_size_options: vec![5, 10, 100],
            search_debounce_ms: 500,
            toast_duration_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            session_encryption_key: option_env!("SESSION_ENCRYPTION_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.session_encryption_key),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            ui_config: UIConfig {
                default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                    .unwrap_or("5").parse().unwrap_or(5),
                search_debounce_ms: option_env!("SEARCH_DEBOUNCE_MS")
                    .unwrap_or("500").parse().unwrap_or(500),
                ..defaults.ui_config
            },
        }
    }

    /// Base URL of the REST API, without trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute URL of a product image given the `image_url` returned by the API
    pub fn image_url(&self, image_path: &str) -> String {
        format!("{}/products{}", self.api_url, image_path)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_is_served_under_products() {
        let config = AppConfig::default();
        assert_eq!(
            config.image_url("/images/abc.png"),
            "http://localhost:8000/products/images/abc.png"
        );
    }

    #[test]
    fn test_default_page_size_is_an_offered_option() {
        let ui = UIConfig::default();
        assert!(ui.page_size_options.contains(&ui.default_page_size));
    }
}

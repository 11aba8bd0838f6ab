use crate::models::{AuthCredentials, AuthResponse};
use crate::services::api_client::ApiClient;

/// Exchange credentials for a token and role
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    log::info!("🔐 Login for {}", username);
    authenticate("/auth/login", username, password).await
}

/// Create an account; the API logs the new user in straight away
pub async fn register(username: &str, password: &str) -> Result<AuthResponse, String> {
    log::info!("📝 Registering {}", username);
    authenticate("/auth/register", username, password).await
}

async fn authenticate(path: &str, username: &str, password: &str) -> Result<AuthResponse, String> {
    let credentials = AuthCredentials {
        username: username.to_string(),
        password: password.to_string(),
    };

    ApiClient::global()
        .post::<_, AuthResponse>(path, &credentials)
        .await
        .map_err(|e| {
            log::error!("❌ {} failed: {}", path, e);
            e.user_message()
        })
}

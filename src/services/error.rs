use thiserror::Error;

use crate::utils::constants::GENERIC_ERROR_MESSAGE;

/// Failure of one call to the REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Unauthorized: {}", .detail.as_deref().unwrap_or("no detail"))]
    Unauthorized { detail: Option<String> },

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Request build error: {0}")]
    Request(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 401 {
            ApiError::Unauthorized { detail }
        } else {
            ApiError::Http { status, detail }
        }
    }

    /// Text shown to the user: the server's `detail` when it sent one,
    /// the generic message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { detail: Some(d) } | ApiError::Http { detail: Some(d), .. } => {
                d.clone()
            }
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Pull a readable message out of an error body.
///
/// Handles `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "...", ...}, ...]}` (first message wins).
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;

    let text = match detail {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(|m| m.as_str()))?
            .to_string(),
        serde_json::Value::Object(map) => map.get("msg").and_then(|m| m.as_str())?.to_string(),
        _ => return None,
    };

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

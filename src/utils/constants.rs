/// Path of the login view; 401 responses force a full-page navigation here
pub const LOGIN_PATH: &str = "/login";

/// Path authenticated users land on
pub const HOME_PATH: &str = "/";

/// Message shown when the API gives no usable `detail`
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Role string the backend assigns to administrators
pub const ADMIN_ROLE: &str = "admin";

/// Image content types accepted by the upload endpoint
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png"];

// ============================================================================
// FORM VALIDATION - reglas de los formularios antes de enviar
// ============================================================================

use std::collections::BTreeMap;

use crate::models::ProductPayload;
use crate::utils::constants::ALLOWED_IMAGE_TYPES;

pub const MIN_USERNAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_PRODUCT_NAME_LEN: usize = 2;
pub const MAX_PRODUCT_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_CATEGORY_LEN: usize = 50;

/// Per-field error messages, keyed by form field name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, ok: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(ok)
        } else {
            Err(self)
        }
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    if username.chars().count() < MIN_USERNAME_LEN {
        errors.add("username", "Username must be at least 2 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 8 characters.");
    }
    errors.into_result(())
}

pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FormErrors> {
    let mut errors = validate_credentials(username, password).err().unwrap_or_default();
    if confirm_password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("confirm_password", "Confirm Password must be at least 8 characters.");
    } else if password != confirm_password {
        errors.add("confirm_password", "Passwords must match.");
    }
    errors.into_result(())
}

/// Raw text of the add/update product form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
}

impl ProductForm {
    pub fn from_payload(payload: &ProductPayload) -> Self {
        Self {
            name: payload.name.clone(),
            category: payload.category.clone(),
            description: payload.description.clone(),
            price: format!("{}", payload.price),
        }
    }

    pub fn validate(&self) -> Result<ProductPayload, FormErrors> {
        let mut errors = FormErrors::new();

        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len < MIN_PRODUCT_NAME_LEN {
            errors.add("name", "Name must be at least 2 characters.");
        } else if name_len > MAX_PRODUCT_NAME_LEN {
            errors.add("name", "Name must be at most 100 characters.");
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.add("category", "Category is required.");
        } else if category.chars().count() > MAX_CATEGORY_LEN {
            errors.add("category", "Category must be at most 50 characters.");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.add("description", "Description is required.");
        } else if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.add("description", "Description must be at most 1000 characters.");
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => (p * 100.0).round() / 100.0,
            Ok(_) => {
                errors.add("price", "Price must be zero or more.");
                0.0
            }
            Err(_) => {
                errors.add("price", "Price must be a number.");
                0.0
            }
        };

        errors.into_result(ProductPayload {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
        })
    }
}

pub fn validate_image_type(content_type: &str) -> Result<(), String> {
    if ALLOWED_IMAGE_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err("Invalid file type. Only JPEG and PNG are allowed.".to_string())
    }
}

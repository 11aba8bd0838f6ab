use crate::models::{
    DetailResponse, PaginatedProducts, Product, ProductPayload, ProductQuery, UploadResponse,
};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::utils::validation::validate_image_type;

fn to_message(operation: &str, e: ApiError) -> String {
    log::error!("❌ {}: {}", operation, e);
    e.user_message()
}

/// One page of the catalog
pub async fn get_products(query: &ProductQuery) -> Result<PaginatedProducts, String> {
    let page = ApiClient::global()
        .get::<PaginatedProducts>("/products/", &query.params())
        .await
        .map_err(|e| to_message("get_products", e))?;
    log::info!("📦 Page {}/{} ({} products)", page.page, page.pages, page.items.len());
    Ok(page)
}

/// Create a product; returns it with its new id
pub async fn create_product(payload: &ProductPayload) -> Result<Product, String> {
    let product = ApiClient::global()
        .post::<_, Product>("/products/", payload)
        .await
        .map_err(|e| to_message("create_product", e))?;
    log::info!("✅ Product created: {} ({})", product.name, product.id);
    Ok(product)
}

pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<Product, String> {
    ApiClient::global()
        .put::<_, Product>(&format!("/products/{}", id), payload)
        .await
        .map_err(|e| to_message("update_product", e))
}

pub async fn delete_product(id: &str) -> Result<DetailResponse, String> {
    ApiClient::global()
        .delete::<DetailResponse>(&format!("/products/{}", id))
        .await
        .map_err(|e| to_message("delete_product", e))
}

pub async fn add_favorite(id: &str) -> Result<DetailResponse, String> {
    ApiClient::global()
        .post_empty::<DetailResponse>(&format!("/products/{}/favorite", id))
        .await
        .map_err(|e| to_message("add_favorite", e))
}

pub async fn remove_favorite(id: &str) -> Result<DetailResponse, String> {
    ApiClient::global()
        .delete::<DetailResponse>(&format!("/products/{}/favorite", id))
        .await
        .map_err(|e| to_message("remove_favorite", e))
}

pub async fn get_favorites() -> Result<Vec<Product>, String> {
    ApiClient::global()
        .get::<Vec<Product>>("/products/favorites", &[])
        .await
        .map_err(|e| to_message("get_favorites", e))
}

/// Attach an image (JPEG/PNG) to an existing product
pub async fn upload_product_image(id: &str, file: &web_sys::File) -> Result<UploadResponse, String> {
    validate_image_type(&file.type_())?;

    let form = web_sys::FormData::new().map_err(|_| "Could not build upload form".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Could not attach file to upload form".to_string())?;

    log::info!("🖼️ Uploading {} for product {}", file.name(), id);
    ApiClient::global()
        .post_form::<UploadResponse>(&format!("/products/{}/upload-image", id), form)
        .await
        .map_err(|e| to_message("upload_product_image", e))
}

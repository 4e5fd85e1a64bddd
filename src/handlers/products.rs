use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{Product, ProductInput},
    AppState,
};

/// Bodies are decoded here rather than through `Json<T>` so that a bad or
/// missing `Content-Type` and any syntax error all produce the same 400.
/// A JSON object is decoded field by field and `null` means every field takes
/// its zero value; serde would otherwise take `[]` as a struct.
fn decode_input(body: &Bytes) -> AppResult<ProductInput> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "Rejected request body");
        AppError::invalid_body()
    })?;
    if value.is_null() {
        return Ok(ProductInput::default());
    }
    if !value.is_object() {
        debug!("Rejected non-object request body");
        return Err(AppError::invalid_body());
    }

    serde_json::from_value(value).map_err(|err| {
        debug!(error = %err, "Rejected request body");
        AppError::invalid_body()
    })
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.store.list().await;
    debug!(count = products.len(), "Listed products");
    (StatusCode::OK, Json(products))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let payload = decode_input(&body)?;
    if !payload.is_valid_for_create() {
        return Err(AppError::BadRequest(
            "Name, price, and category are required".to_string(),
        ));
    }

    let product = state.store.create(payload).await;
    info!(id = %product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state
        .store
        .get(&id)
        .await
        .ok_or_else(AppError::product_not_found)?;

    Ok((StatusCode::OK, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Full replacement. No field checks beyond the body decoding. The id is the
/// whole remainder after `/api/products/`, slashes included.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let payload = decode_input(&body)?;
    let product = state
        .store
        .update(&id, payload)
        .await
        .ok_or_else(AppError::product_not_found)?;

    info!(id = %id, "Updated product");
    Ok((StatusCode::OK, Json(product)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Value>)> {
    if !state.store.delete(&id).await {
        return Err(AppError::product_not_found());
    }

    info!(id = %id, "Deleted product");
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product deleted successfully" })),
    ))
}

/// `/api/products/` with nothing after the slash.
pub async fn missing_id() -> AppError {
    AppError::missing_id()
}
